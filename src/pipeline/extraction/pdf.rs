use super::types::PdfExtractor;
use super::ExtractionError;

/// PDF text extractor using the pdf-extract crate.
/// Handles digital PDFs with embedded text layers; scanned reports yield little or no text.
pub struct PdfTextExtractor;

impl PdfExtractor for PdfTextExtractor {
    fn text_of(&self, pdf_bytes: &[u8]) -> Result<String, ExtractionError> {
        let text = pdf_extract::extract_text_from_mem(pdf_bytes)
            .map_err(|e| ExtractionError::PdfParsing(e.to_string()))?;

        if text.trim().is_empty() {
            tracing::warn!(
                size = pdf_bytes.len(),
                "PDF has no extractable text layer (scanned report?)"
            );
        }

        Ok(text)
    }
}
