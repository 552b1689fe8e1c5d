use serde::{Deserialize, Serialize};

use super::ExtractionError;

/// How the report text was obtained
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionMethod {
    PdfDirect,
    PlainTextRead,
}

impl ExtractionMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PdfDirect => "pdf_direct",
            Self::PlainTextRead => "plain_text_read",
        }
    }
}

/// Raw text of a report, before line normalization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportText {
    pub method: ExtractionMethod,
    pub text: String,
}

/// PDF text extraction abstraction (allows mocking for tests)
pub trait PdfExtractor {
    /// All page text of the document, pages joined in reading order.
    fn text_of(&self, pdf_bytes: &[u8]) -> Result<String, ExtractionError>;
}

/// Test double returning fixed text regardless of input.
pub struct MockPdfExtractor {
    text: String,
}

impl MockPdfExtractor {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }
}

impl PdfExtractor for MockPdfExtractor {
    fn text_of(&self, _pdf_bytes: &[u8]) -> Result<String, ExtractionError> {
        Ok(self.text.clone())
    }
}
