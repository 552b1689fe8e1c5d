//! Report Processing Orchestrator.
//!
//! Single entry point that drives the full report pipeline:
//! bytes → text → lines → parsed record → canonical request → (optional) verdict.
//!
//! Uses trait-based DI for the PDF extractor and prediction client so the
//! orchestrator remains fully testable with mock implementations.

use std::path::{Path, PathBuf};

use serde::Serialize;
use uuid::Uuid;

use crate::config;
use crate::models::{CanonicalRequest, Domain, ParsedRecord};
use crate::pipeline::diagnostic;
use crate::pipeline::extraction::{
    decode_report, normalize, read_report_bytes, ExtractionError, ExtractionMethod, PdfExtractor,
};
use crate::pipeline::prediction::{PredictionClient, PredictionError, PredictionVerdict};
use crate::pipeline::report::{assemble, observed_fields, scan};

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can occur during report processing.
///
/// Missing or unreadable fields are never errors; they default in the request.
#[derive(Debug, thiserror::Error)]
pub enum ProcessingError {
    #[error("Extraction failed: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("Prediction failed: {0}")]
    Prediction(#[from] PredictionError),
}

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// Extraction stage summary.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractionSummary {
    pub domain: Domain,
    pub method: ExtractionMethod,
    pub text_length: usize,
    pub line_count: usize,
    /// Schema fields filled from the report.
    pub fields_observed: Vec<&'static str>,
    /// Schema fields left at their default.
    pub fields_defaulted: usize,
}

/// Everything one extraction run produced.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessingOutput {
    pub run_id: Uuid,
    pub lines: Vec<String>,
    pub parsed: ParsedRecord,
    pub request: CanonicalRequest,
    pub summary: ExtractionSummary,
    /// Diagnostic directory for this run, if dumping is enabled.
    #[serde(skip)]
    pub dump_dir: Option<PathBuf>,
}

// ---------------------------------------------------------------------------
// Orchestrator
// ---------------------------------------------------------------------------

/// Orchestrates report processing: decode → normalize → scan → assemble.
pub struct ReportProcessor {
    extractor: Box<dyn PdfExtractor + Send + Sync>,
    dump_base: Option<PathBuf>,
}

impl ReportProcessor {
    /// Processor dumping artifacts only if `HEALTH_SUPPORT_DUMP_DIR` is set.
    pub fn new(extractor: Box<dyn PdfExtractor + Send + Sync>) -> Self {
        Self {
            extractor,
            dump_base: config::dump_dir(),
        }
    }

    /// Override the diagnostic dump base directory (`None` disables dumping).
    pub fn with_dump_dir(mut self, base: Option<PathBuf>) -> Self {
        self.dump_base = base;
        self
    }

    /// Full pipeline from a report file (PDF or plain text).
    pub fn process_file(
        &self,
        domain: Domain,
        path: &Path,
    ) -> Result<ProcessingOutput, ProcessingError> {
        tracing::info!(
            domain = domain.slug(),
            path = %path.display(),
            "Processing report file"
        );
        let bytes = read_report_bytes(path)?;
        self.process_bytes(domain, &bytes)
    }

    /// Full pipeline from in-memory report bytes.
    pub fn process_bytes(
        &self,
        domain: Domain,
        bytes: &[u8],
    ) -> Result<ProcessingOutput, ProcessingError> {
        let report = decode_report(bytes, self.extractor.as_ref())?;
        Ok(self.run(domain, report.method, &report.text))
    }

    /// Pipeline from already-extracted text. Cannot fail.
    pub fn process_text(&self, domain: Domain, text: &str) -> ProcessingOutput {
        self.run(domain, ExtractionMethod::PlainTextRead, text)
    }

    /// Post the run's request to the prediction service.
    pub fn submit(
        &self,
        output: &ProcessingOutput,
        client: &dyn PredictionClient,
    ) -> Result<PredictionVerdict, ProcessingError> {
        let verdict = client.predict(&output.request)?;

        if let Some(dir) = &output.dump_dir {
            diagnostic::dump_json(dir, "04-verdict.json", &verdict);
        }

        Ok(verdict)
    }

    fn run(&self, domain: Domain, method: ExtractionMethod, text: &str) -> ProcessingOutput {
        let run_id = Uuid::new_v4();
        let dump_dir = self
            .dump_base
            .as_deref()
            .and_then(|base| diagnostic::run_dir_in(base, &run_id));

        // Step 1: Normalize
        let lines = normalize(text);

        // Step 2: Scan against the domain dictionary
        let parsed = scan(&lines, domain.dictionary());

        // Step 3: Assemble the fixed-schema request
        let request = assemble(domain, &parsed);

        let fields_observed = observed_fields(domain, &parsed);
        let summary = ExtractionSummary {
            domain,
            method,
            text_length: text.len(),
            line_count: lines.len(),
            fields_defaulted: request.fields.len() - fields_observed.len(),
            fields_observed,
        };

        tracing::info!(
            run_id = %run_id,
            domain = domain.slug(),
            method = method.as_str(),
            lines = summary.line_count,
            observed = summary.fields_observed.len(),
            defaulted = summary.fields_defaulted,
            "Report extracted"
        );

        if summary.fields_observed.is_empty() {
            tracing::warn!(
                run_id = %run_id,
                domain = domain.slug(),
                "No fields recognized; request is entirely defaults"
            );
        }

        if let Some(dir) = &dump_dir {
            diagnostic::dump_json(dir, "00-source-info.json", &summary);
            diagnostic::dump_json(dir, "01-lines.json", &lines);
            diagnostic::dump_json(dir, "02-parsed.json", &parsed);
            diagnostic::dump_json(dir, "03-request.json", &request);
        }

        ProcessingOutput {
            run_id,
            lines,
            parsed,
            request,
            summary,
            dump_dir,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
