use std::sync::Mutex;
use std::time::Duration;

use super::types::{PredictionClient, PredictionVerdict};
use super::PredictionError;
use crate::models::{CanonicalRequest, Domain};

/// Blocking HTTP client for the hosted prediction services.
///
/// Each domain has its own endpoint below `base_url`
/// (see `Domain::endpoint_path`).
pub struct HttpPredictionClient {
    base_url: String,
    client: reqwest::blocking::Client,
    timeout_secs: u64,
}

impl HttpPredictionClient {
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self, PredictionError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| PredictionError::HttpClient(e.to_string()))?;

        Ok(Self::with_http_client(base_url, client, timeout_secs))
    }

    /// Wrap a preconfigured reqwest client (proxy, TLS or header settings).
    /// `timeout_secs` should match the client's own timeout; it is only reported.
    pub fn with_http_client(
        base_url: &str,
        client: reqwest::blocking::Client,
        timeout_secs: u64,
    ) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            timeout_secs,
        }
    }

    pub fn endpoint_url(&self, domain: Domain) -> String {
        format!("{}/{}", self.base_url, domain.endpoint_path())
    }
}

impl PredictionClient for HttpPredictionClient {
    fn predict(&self, request: &CanonicalRequest) -> Result<PredictionVerdict, PredictionError> {
        let domain = request.prediction_type;
        let url = self.endpoint_url(domain);

        tracing::info!(
            domain = domain.slug(),
            url = %url,
            fields = request.fields.len(),
            "Submitting prediction request"
        );

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .map_err(|e| {
                if e.is_connect() {
                    PredictionError::Connection(self.base_url.clone())
                } else if e.is_timeout() {
                    PredictionError::Timeout(self.timeout_secs)
                } else {
                    PredictionError::HttpClient(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            tracing::warn!(
                domain = domain.slug(),
                status = status.as_u16(),
                "Prediction service rejected request"
            );
            return Err(PredictionError::ServiceError {
                status: status.as_u16(),
                body,
            });
        }

        let body: serde_json::Value = response
            .json()
            .map_err(|e| PredictionError::ResponseParsing(e.to_string()))?;

        tracing::info!(domain = domain.slug(), status = status.as_u16(), "Prediction received");

        Ok(PredictionVerdict {
            domain,
            status: status.as_u16(),
            body,
        })
    }
}

/// Mock prediction client for testing: returns a configurable verdict and
/// keeps every request it was given.
pub struct MockPredictionClient {
    response: Result<serde_json::Value, (u16, String)>,
    received: Mutex<Vec<CanonicalRequest>>,
}

impl MockPredictionClient {
    pub fn new(body: serde_json::Value) -> Self {
        Self {
            response: Ok(body),
            received: Mutex::new(Vec::new()),
        }
    }

    /// A client whose every call fails with `ServiceError { status, body }`.
    pub fn failing(status: u16, body: &str) -> Self {
        Self {
            response: Err((status, body.to_string())),
            received: Mutex::new(Vec::new()),
        }
    }

    pub fn received(&self) -> Vec<CanonicalRequest> {
        self.received
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }
}

impl PredictionClient for MockPredictionClient {
    fn predict(&self, request: &CanonicalRequest) -> Result<PredictionVerdict, PredictionError> {
        if let Ok(mut received) = self.received.lock() {
            received.push(request.clone());
        }

        match &self.response {
            Ok(body) => Ok(PredictionVerdict {
                domain: request.prediction_type,
                status: 200,
                body: body.clone(),
            }),
            Err((status, body)) => Err(PredictionError::ServiceError {
                status: *status,
                body: body.clone(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::{BufRead, BufReader, Read, Write};
    use std::net::TcpListener;
    use std::thread;

    use super::*;
    use crate::pipeline::report::extract_request;

    /// Direct client for loopback tests, ignoring any proxy in the environment.
    fn loopback_client(base: &str) -> HttpPredictionClient {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(5))
            .no_proxy()
            .build()
            .unwrap();
        HttpPredictionClient::with_http_client(base, client, 5)
    }

    /// One-shot HTTP server: answers a single request with `status` and
    /// `body`, and hands back (request line, request body).
    fn serve_once(status: &'static str, body: &'static str) -> (String, thread::JoinHandle<(String, String)>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base = format!("http://{}/api", listener.local_addr().unwrap());

        let handle = thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());

            let mut request_line = String::new();
            reader.read_line(&mut request_line).unwrap();

            let mut content_length = 0usize;
            loop {
                let mut header = String::new();
                reader.read_line(&mut header).unwrap();
                if header == "\r\n" || header.is_empty() {
                    break;
                }
                if let Some((name, value)) = header.split_once(':') {
                    if name.eq_ignore_ascii_case("content-length") {
                        content_length = value.trim().parse().unwrap();
                    }
                }
            }

            let mut request_body = vec![0u8; content_length];
            reader.read_exact(&mut request_body).unwrap();

            let mut stream = stream;
            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).unwrap();
            stream.flush().unwrap();

            (
                request_line.trim().to_string(),
                String::from_utf8(request_body).unwrap(),
            )
        });

        (base, handle)
    }

    #[test]
    fn posts_request_to_domain_endpoint() {
        let (base, server) = serve_once("200 OK", r#"{"prediction":"Low risk","probability":0.12}"#);
        let client = loopback_client(&base);
        let request = extract_request(Domain::HeartAttack, "Age: 58\nSex: Male\nLDL: 150");

        let verdict = client.predict(&request).unwrap();
        let (request_line, request_body) = server.join().unwrap();

        assert_eq!(verdict.status, 200);
        assert_eq!(verdict.domain, Domain::HeartAttack);
        assert_eq!(verdict.body["prediction"], "Low risk");
        assert!(request_line.starts_with("POST /api/heart-attack/predict"));

        let sent: serde_json::Value = serde_json::from_str(&request_body).unwrap();
        assert_eq!(sent["Prediction_Type"], "Heart attack prediction");
        assert_eq!(sent["Age"], 58);
        assert_eq!(sent["Sex"], 1.0);
        assert_eq!(sent["LDL"], 150.0);
        assert_eq!(sent["Troponin_T"], 0.0);
    }

    #[test]
    fn non_success_status_is_service_error() {
        let (base, server) = serve_once("422 Unprocessable Entity", r#"{"detail":"bad input"}"#);
        let client = loopback_client(&base);
        let request = extract_request(Domain::Diabetes, "");

        let result = client.predict(&request);
        server.join().unwrap();

        match result {
            Err(PredictionError::ServiceError { status, body }) => {
                assert_eq!(status, 422);
                assert!(body.contains("bad input"));
            }
            other => panic!("expected ServiceError, got {other:?}"),
        }
    }

    #[test]
    fn non_json_body_is_parsing_error() {
        let (base, server) = serve_once("200 OK", "<html>oops</html>");
        let client = loopback_client(&base);
        let result = client.predict(&extract_request(Domain::Liver, ""));
        server.join().unwrap();
        assert!(matches!(result, Err(PredictionError::ResponseParsing(_))));
    }

    #[test]
    fn unreachable_service_is_connection_error() {
        // Bind then drop to get a port nothing listens on
        let port = TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();
        let client = loopback_client(&format!("http://127.0.0.1:{port}"));
        let result = client.predict(&extract_request(Domain::Liver, ""));
        assert!(matches!(result, Err(PredictionError::Connection(_))));
    }

    #[test]
    fn endpoint_urls_per_domain() {
        let client = HttpPredictionClient::new("https://example.test/api/", 30).unwrap();
        assert_eq!(client.base_url, "https://example.test/api");
        assert_eq!(
            client.endpoint_url(Domain::Liver),
            "https://example.test/api/liver-disease/predict"
        );
        assert_eq!(
            client.endpoint_url(Domain::Diabetes),
            "https://example.test/api/diabetes-disease/predict"
        );
        assert_eq!(
            client.endpoint_url(Domain::HeartAttack),
            "https://example.test/api/heart-attack/predict"
        );
    }

    #[test]
    fn constructor_keeps_timeout() {
        let client = HttpPredictionClient::new("http://localhost:8000", 120).unwrap();
        assert_eq!(client.timeout_secs, 120);
    }

    #[test]
    fn mock_client_records_requests() {
        let client = MockPredictionClient::new(serde_json::json!({"result": "Positive"}));
        let request = extract_request(Domain::Liver, "Albumin: 3.1");

        let verdict = client.predict(&request).unwrap();

        assert_eq!(verdict.body["result"], "Positive");
        assert_eq!(verdict.domain, Domain::Liver);
        let received = client.received();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].value("Albumin"), Some(3.1));
    }

    #[test]
    fn failing_mock_returns_service_error() {
        let client = MockPredictionClient::failing(503, "maintenance");
        let result = client.predict(&extract_request(Domain::Diabetes, ""));
        assert!(matches!(
            result,
            Err(PredictionError::ServiceError { status: 503, .. })
        ));
        assert_eq!(client.received().len(), 1);
    }
}
