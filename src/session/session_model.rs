use serde::Serialize;

use crate::extract::extract_model::ExtractionResult;
use crate::resolve::pipeline::ResolvedField;
use crate::schema::form_type::FormTypeId;
use crate::session::highlight::HighlightSet;

/// Monotonic identity of an extraction request on one form instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct SessionToken(u64);

impl SessionToken {
    pub fn value(&self) -> u64 {
        self.0
    }

    pub(crate) fn next(self) -> Self {
        SessionToken(self.0 + 1)
    }
}

/// Per-form lifecycle. `Extracting` is the only state that waits on the
/// outside world; `Resolving` and `Merged` are passed through within one
/// call once extraction data is in hand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum AutoFillState {
    #[default]
    Idle,
    Extracting,
    Resolving,
    Merged,
}

/// Transitions the controller is allowed to make.
pub fn allowed_transitions(from: AutoFillState) -> &'static [AutoFillState] {
    match from {
        AutoFillState::Idle => &[AutoFillState::Extracting],
        // Back to Idle on failure, cancel or supersession.
        AutoFillState::Extracting => &[
            AutoFillState::Extracting,
            AutoFillState::Resolving,
            AutoFillState::Idle,
        ],
        AutoFillState::Resolving => &[AutoFillState::Merged, AutoFillState::Idle],
        AutoFillState::Merged => &[AutoFillState::Idle],
    }
}

/// Everything one extraction event produced. Superseded wholesale by the
/// next event; never merged with it.
#[derive(Debug, Clone, PartialEq)]
pub struct AutoFillSession {
    pub token: SessionToken,
    pub form_type: FormTypeId,
    pub extraction: ExtractionResult,
    pub resolved: Vec<ResolvedField>,
    pub highlighted: HighlightSet,
}

/// What happened to a completed extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "outcome")]
pub enum SessionOutcome {
    /// Merged into the form; `populated` fields were written.
    Applied { populated: usize },
    /// A newer request was issued (or this one cancelled) before it landed.
    Stale,
    /// The category/subcategory pair named no form type.
    NoFormType,
}

impl SessionOutcome {
    pub fn populated(&self) -> usize {
        match self {
            SessionOutcome::Applied { populated } => *populated,
            _ => 0,
        }
    }
}

/// User-facing notification text for a finished session.
pub fn populated_message(populated: usize) -> String {
    format!("Populated {} field(s) from document analysis", populated)
}
