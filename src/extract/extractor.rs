use crate::error::{AutofillError, Result};
use crate::extract::extract_model::{DocumentRef, ExtractionResult};

// ============================================================================
// DocumentExtractor trait: the external document-understanding collaborator
// ============================================================================

/// Turns a document into raw label/value pairs. Implementations own
/// transport, OCR and language understanding; the engine only consumes the
/// result. Retrying is the implementation's (or caller's) business.
pub trait DocumentExtractor {
    fn extract(&self, document: &DocumentRef) -> Result<ExtractionResult>;
}

// ============================================================================
// MockExtractor: canned result, for tests and offline runs
// ============================================================================

/// Returns the same extraction for every document.
pub struct MockExtractor {
    pub result: ExtractionResult,
}

impl MockExtractor {
    pub fn new(result: ExtractionResult) -> Self {
        Self { result }
    }
}

impl DocumentExtractor for MockExtractor {
    fn extract(&self, _document: &DocumentRef) -> Result<ExtractionResult> {
        Ok(self.result.clone())
    }
}

/// Always fails, the way an unreachable service does.
pub struct UnavailableExtractor;

impl DocumentExtractor for UnavailableExtractor {
    fn extract(&self, _document: &DocumentRef) -> Result<ExtractionResult> {
        Err(AutofillError::ExtractionStatus {
            status: 503,
            body: "extraction service unavailable".to_string(),
        })
    }
}
