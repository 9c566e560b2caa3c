use std::time::Duration;

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{AutofillError, Result};
use crate::extract::extract_model::{DocumentRef, ExtractionResult};
use crate::extract::extractor::DocumentExtractor;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:8088/analyze";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

// ============================================================================
// HttpExtractor: blocking POST to a document-understanding endpoint
// ============================================================================

/// Posts the raw document bytes and expects a JSON label map back, either
/// flat or wrapped in a `fields` member.
pub struct HttpExtractor {
    pub endpoint: String,
    pub timeout: Duration,
}

impl Default for HttpExtractor {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl HttpExtractor {
    pub fn new(endpoint: &str, timeout_secs: u64) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    fn transport_error(&self, source: reqwest::Error) -> AutofillError {
        AutofillError::ExtractionTransport {
            endpoint: self.endpoint.clone(),
            source,
        }
    }
}

impl DocumentExtractor for HttpExtractor {
    fn extract(&self, document: &DocumentRef) -> Result<ExtractionResult> {
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| self.transport_error(e))?;

        debug!(
            endpoint = %self.endpoint,
            file_name = %document.file_name,
            bytes = document.bytes.len(),
            "requesting document extraction"
        );

        let response = client
            .post(&self.endpoint)
            .header(reqwest::header::CONTENT_TYPE, "application/octet-stream")
            .header("X-File-Name", document.file_name.as_str())
            .body(document.bytes.clone())
            .send()
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            warn!(status = status.as_u16(), "extraction service rejected request");
            return Err(AutofillError::ExtractionStatus {
                status: status.as_u16(),
                body,
            });
        }

        let value: Value = response.json().map_err(|e| self.transport_error(e))?;
        ExtractionResult::from_json(value)
    }
}
