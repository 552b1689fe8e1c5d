use std::path::Path;

use serde::{Deserialize, Serialize};

use super::types::{ExtractionMethod, PdfExtractor, ReportText};
use super::ExtractionError;

/// Report file formats we read
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ReportFormat {
    Pdf,
    PlainText,
}

impl ReportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::PlainText => "plain_text",
        }
    }
}

const MAX_REPORT_SIZE: u64 = 100 * 1024 * 1024; // 100MB

/// Detect the report format from magic bytes (NOT file extensions).
/// Anything that is not a PDF is treated as text and validated on decode.
pub fn detect_format(bytes: &[u8]) -> ReportFormat {
    match bytes {
        // PDF: starts with %PDF
        [0x25, 0x50, 0x44, 0x46, ..] => ReportFormat::Pdf,
        _ => ReportFormat::PlainText,
    }
}

/// Turn report bytes into raw text: PDFs go through `extractor`, everything
/// else must be valid UTF-8.
pub fn decode_report(
    bytes: &[u8],
    extractor: &dyn PdfExtractor,
) -> Result<ReportText, ExtractionError> {
    let format = detect_format(bytes);
    tracing::debug!(format = format.as_str(), size = bytes.len(), "Report format detected");

    match format {
        ReportFormat::Pdf => Ok(ReportText {
            method: ExtractionMethod::PdfDirect,
            text: extractor.text_of(bytes)?,
        }),
        ReportFormat::PlainText => {
            let text = std::str::from_utf8(bytes)
                .map_err(|e| ExtractionError::EncodingError(e.to_string()))?;
            Ok(ReportText {
                method: ExtractionMethod::PlainTextRead,
                text: text.to_string(),
            })
        }
    }
}

/// Read a report file from disk, refusing anything over 100MB.
pub fn read_report_bytes(path: &Path) -> Result<Vec<u8>, ExtractionError> {
    let size = std::fs::metadata(path)?.len();
    if size > MAX_REPORT_SIZE {
        return Err(ExtractionError::FileTooLarge {
            size_mb: size as f64 / (1024.0 * 1024.0),
            max_mb: MAX_REPORT_SIZE / (1024 * 1024),
        });
    }
    Ok(std::fs::read(path)?)
}
