use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::schema::form_type::FormTypeId;
use crate::session::session_model::{AutoFillState, SessionToken};

/// One line of the JSONL audit trail: a state transition of one form's
/// auto-fill session. Carries counts and a fingerprint, never field values.
#[derive(Debug, Clone, Serialize)]
pub struct TraceEvent {
    pub timestamp_ms: u128,
    pub session: u64,

    pub state: String,

    pub form_type: Option<String>,
    pub extraction_fingerprint: Option<String>,

    pub populated: Option<usize>,
    pub unresolved: Option<usize>,
    pub rejected: Option<usize>,
    pub kept_existing: Option<usize>,

    pub discard_reason: Option<String>,
}

impl TraceEvent {
    pub fn now(token: SessionToken, state: AutoFillState) -> Self {
        Self {
            timestamp_ms: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis())
                .unwrap_or_default(),
            session: token.value(),
            state: format!("{:?}", state),
            form_type: None,
            extraction_fingerprint: None,
            populated: None,
            unresolved: None,
            rejected: None,
            kept_existing: None,
            discard_reason: None,
        }
    }

    pub fn with_form_type(mut self, form_type: FormTypeId) -> Self {
        self.form_type = Some(form_type.to_string());
        self
    }

    pub fn with_fingerprint(mut self, fingerprint: impl ToString) -> Self {
        self.extraction_fingerprint = Some(fingerprint.to_string());
        self
    }

    pub fn with_counts(mut self, populated: usize, unresolved: usize, rejected: usize, kept_existing: usize) -> Self {
        self.populated = Some(populated);
        self.unresolved = Some(unresolved);
        self.rejected = Some(rejected);
        self.kept_existing = Some(kept_existing);
        self
    }

    pub fn with_discard(mut self, reason: impl ToString) -> Self {
        self.discard_reason = Some(reason.to_string());
        self
    }
}
