use tracing::{debug, info, warn};

use crate::error::Result;
use crate::extract::extract_model::{DocumentRef, ExtractionResult};
use crate::extract::extractor::DocumentExtractor;
use crate::merge::form_state::FormState;
use crate::merge::policy::{apply_merge, MergePolicy};
use crate::resolve::pipeline::{resolve_extraction, DropReason, ResolveContext};
use crate::schema::form_type::FormTypeId;
use crate::schema::taxonomy::resolve_form_type;
use crate::session::highlight::HighlightSet;
use crate::session::session_model::{
    allowed_transitions, AutoFillSession, AutoFillState, SessionOutcome, SessionToken,
};
use crate::trace::logger::TraceLogger;
use crate::trace::trace::TraceEvent;

/// Handle for one in-flight extraction. Only the ticket carrying the latest
/// token can land its results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractionTicket {
    pub token: SessionToken,
    pub form_type: FormTypeId,
    pub policy: MergePolicy,
}

/// Owns the auto-fill lifecycle of one form instance.
///
/// Single-threaded by construction: every mutation goes through `&mut self`,
/// and the form itself is only touched inside `complete_extraction` and
/// `clear_all`.
pub struct AutoFillController {
    policy: MergePolicy,
    state: AutoFillState,
    latest: SessionToken,
    highlights: HighlightSet,
    session: Option<AutoFillSession>,
    tracer: TraceLogger,
}

impl Default for AutoFillController {
    fn default() -> Self {
        Self::new(TraceLogger::disabled())
    }
}

impl AutoFillController {
    pub fn new(tracer: TraceLogger) -> Self {
        Self {
            policy: MergePolicy::default(),
            state: AutoFillState::Idle,
            latest: SessionToken::default(),
            highlights: HighlightSet::new(),
            session: None,
            tracer,
        }
    }

    pub fn with_policy(mut self, policy: MergePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Policy for sessions started from now on. In-flight tickets keep theirs.
    pub fn set_policy(&mut self, policy: MergePolicy) {
        self.policy = policy;
    }

    pub fn state(&self) -> AutoFillState {
        self.state
    }

    pub fn latest_token(&self) -> SessionToken {
        self.latest
    }

    pub fn highlights(&self) -> &HighlightSet {
        &self.highlights
    }

    pub fn is_highlighted(&self, key: &str) -> bool {
        self.highlights.contains(key)
    }

    pub fn session(&self) -> Option<&AutoFillSession> {
        self.session.as_ref()
    }

    // ------------------------------------------------------------------------
    // Session lifecycle
    // ------------------------------------------------------------------------

    /// Start a new extraction for the record type named by the taxonomy pair.
    ///
    /// Returns `None` (and changes nothing) when the pair names no form
    /// type. Otherwise the previous session and every highlight are dropped
    /// and a fresh token is issued.
    pub fn begin_extraction(&mut self, category: &str, subcategory: &str) -> Option<ExtractionTicket> {
        let form_type = resolve_form_type(category, subcategory)?;
        Some(self.begin_for(form_type))
    }

    /// Start a new extraction for an already known form type.
    pub fn begin_for(&mut self, form_type: FormTypeId) -> ExtractionTicket {
        self.latest = self.latest.next();
        self.session = None;
        self.highlights.clear();
        self.transition(AutoFillState::Extracting);

        self.tracer
            .log(&TraceEvent::now(self.latest, self.state).with_form_type(form_type));
        debug!(session = self.latest.value(), form_type = %form_type, "extraction started");

        ExtractionTicket {
            token: self.latest,
            form_type,
            policy: self.policy,
        }
    }

    /// Land an extraction result. Stale tickets are discarded without
    /// touching the form or the highlight set.
    pub fn complete_extraction<F: FormState + ?Sized>(
        &mut self,
        ticket: ExtractionTicket,
        extraction: ExtractionResult,
        ctx: &ResolveContext<'_>,
        form: &mut F,
    ) -> SessionOutcome {
        if ticket.token != self.latest || self.state != AutoFillState::Extracting {
            self.tracer.log(
                &TraceEvent::now(ticket.token, self.state)
                    .with_form_type(ticket.form_type)
                    .with_fingerprint(extraction.fingerprint())
                    .with_discard("superseded"),
            );
            debug!(
                session = ticket.token.value(),
                latest = self.latest.value(),
                "discarding stale extraction result"
            );
            return SessionOutcome::Stale;
        }

        self.transition(AutoFillState::Resolving);
        let resolution = resolve_extraction(ticket.form_type, &extraction, ctx);

        // Form state is read here, once, right before merging.
        let outcome = apply_merge(form, &resolution.fields, ticket.policy);
        self.highlights.replace(&outcome.written);

        let unresolved = resolution.count_dropped(|r| matches!(r, DropReason::Unresolved));
        let rejected = resolution.dropped.len() - unresolved;

        self.transition(AutoFillState::Merged);
        self.tracer.log(
            &TraceEvent::now(ticket.token, self.state)
                .with_form_type(ticket.form_type)
                .with_fingerprint(extraction.fingerprint())
                .with_counts(
                    outcome.populated(),
                    unresolved,
                    rejected,
                    outcome.kept_existing.len(),
                ),
        );
        info!(
            session = ticket.token.value(),
            form_type = %ticket.form_type,
            populated = outcome.populated(),
            "auto-fill merged"
        );

        self.session = Some(AutoFillSession {
            token: ticket.token,
            form_type: ticket.form_type,
            extraction,
            resolved: resolution.fields,
            highlighted: self.highlights.clone(),
        });
        self.transition(AutoFillState::Idle);

        SessionOutcome::Applied {
            populated: outcome.populated(),
        }
    }

    /// The extraction call failed. Only the current ticket moves the form
    /// back to idle; highlights are already empty from `begin_for`.
    pub fn fail_extraction(&mut self, ticket: ExtractionTicket) {
        if ticket.token != self.latest || self.state != AutoFillState::Extracting {
            return;
        }

        self.transition(AutoFillState::Idle);
        self.tracer.log(
            &TraceEvent::now(ticket.token, self.state)
                .with_form_type(ticket.form_type)
                .with_discard("extraction_failed"),
        );
    }

    /// Blocking convenience: begin, call the extractor, complete.
    pub fn run<F: FormState + ?Sized>(
        &mut self,
        extractor: &dyn DocumentExtractor,
        document: &DocumentRef,
        form_type: FormTypeId,
        ctx: &ResolveContext<'_>,
        form: &mut F,
    ) -> Result<SessionOutcome> {
        let ticket = self.begin_for(form_type);

        match extractor.extract(document) {
            Ok(extraction) => Ok(self.complete_extraction(ticket, extraction, ctx, form)),
            Err(e) => {
                warn!(session = ticket.token.value(), error = %e, "document extraction failed");
                self.fail_extraction(ticket);
                Err(e)
            }
        }
    }

    // ------------------------------------------------------------------------
    // User actions
    // ------------------------------------------------------------------------

    /// The user typed into `key`; it is no longer machine-populated.
    pub fn user_edited(&mut self, key: &str) {
        if self.highlights.remove(key) {
            if let Some(session) = self.session.as_mut() {
                session.highlighted.remove(key);
            }
        }
    }

    /// "Clear all fields": empty the form and the highlight set together.
    /// Any in-flight result becomes stale, like `cancel`.
    pub fn clear_all<F: FormState + ?Sized>(&mut self, form: &mut F) {
        form.clear();
        self.invalidate("cleared");
    }

    /// Abandon the current session. Any in-flight result becomes stale.
    pub fn cancel(&mut self) {
        self.invalidate("cancelled");
    }

    /// The record was saved; nothing of the session survives.
    pub fn submitted(&mut self) {
        self.invalidate("submitted");
    }

    fn invalidate(&mut self, reason: &str) {
        self.latest = self.latest.next();
        self.highlights.clear();
        self.session = None;
        self.transition(AutoFillState::Idle);
        self.tracer
            .log(&TraceEvent::now(self.latest, self.state).with_discard(reason));
    }

    fn transition(&mut self, to: AutoFillState) {
        if self.state == to && to == AutoFillState::Idle {
            return;
        }

        if !allowed_transitions(self.state).contains(&to) {
            warn!(from = ?self.state, to = ?to, "unexpected auto-fill state transition");
        }

        self.state = to;
    }
}
