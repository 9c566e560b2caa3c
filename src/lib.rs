use crate::{
    extract::extract_model::ExtractionResult,
    merge::{form_state::FormState, policy::MergePolicy},
    resolve::pipeline::ResolveContext,
    session::{controller::AutoFillController, session_model::SessionOutcome},
};

pub mod cli;
pub mod coerce;
pub mod error;
pub mod extract;
pub mod merge;
pub mod resolve;
pub mod schema;
pub mod session;
pub mod text;
pub mod trace;

pub use error::{AutofillError, Result};

/// One-shot auto-fill: resolve the taxonomy pair, reconcile `extraction`
/// against that form's schema and merge into `form`.
///
/// Builds a throwaway controller, so there is no highlight state to carry
/// across calls; use [`AutoFillController`] directly for a live form.
pub fn autofill_once<F: FormState + ?Sized>(
    category: &str,
    subcategory: &str,
    extraction: ExtractionResult,
    ctx: &ResolveContext<'_>,
    form: &mut F,
    policy: MergePolicy,
) -> SessionOutcome {
    let mut controller = AutoFillController::default().with_policy(policy);

    match controller.begin_extraction(category, subcategory) {
        Some(ticket) => controller.complete_extraction(ticket, extraction, ctx, form),
        None => SessionOutcome::NoFormType,
    }
}
