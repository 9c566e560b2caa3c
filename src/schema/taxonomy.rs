use serde::Serialize;
use tracing::debug;

use crate::schema::form_type::FormTypeId;
use crate::text::normalize::normalize_label;

/// A declared (category, subcategory) pair and the form it opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TaxonomyEntry {
    pub category: &'static str,
    pub subcategory: &'static str,
    pub form_type: FormTypeId,
}

const fn entry(
    category: &'static str,
    subcategory: &'static str,
    form_type: FormTypeId,
) -> TaxonomyEntry {
    TaxonomyEntry {
        category,
        subcategory,
        form_type,
    }
}

/// Declaration order is the tie-break order for normalized matches.
pub const TAXONOMY: &[TaxonomyEntry] = &[
    entry("Research", "Paper Published in Journal", FormTypeId::JournalPublication),
    entry("Research", "Paper Presented in Conference", FormTypeId::ConferencePresentation),
    entry("Research", "Book / Book Chapter", FormTypeId::BookChapter),
    entry("Research", "Patent", FormTypeId::Patent),
    entry("Research", "Funded Research Project", FormTypeId::ResearchGrant),
    entry("Research", "Consultancy Project", FormTypeId::Consultancy),
    entry("Research", "PhD Guidance", FormTypeId::PhdGuidance),
    entry("Faculty Development", "FDP / Workshop Attended", FormTypeId::FdpAttended),
    entry("Faculty Development", "Event Organized", FormTypeId::EventOrganized),
    entry("Faculty Development", "Guest Lecture Delivered", FormTypeId::GuestLecture),
    entry("Faculty Development", "Online Course Completed", FormTypeId::OnlineCertification),
    entry("Recognition", "Award / Honour Received", FormTypeId::Award),
    entry("Recognition", "Professional Body Membership", FormTypeId::ProfessionalMembership),
    entry("Student Activities", "Student Achievement", FormTypeId::StudentAchievement),
    entry("Student Activities", "Industrial Visit", FormTypeId::IndustrialVisit),
    entry("Institutional", "MoU Signed", FormTypeId::Mou),
];

/// Map a free-text (category, subcategory) pair onto a form type.
///
/// Exact match first, then a normalized comparison of both halves where the
/// first declared entry wins. `None` means auto-fill must not run.
pub fn resolve_form_type(category: &str, subcategory: &str) -> Option<FormTypeId> {
    resolve_in(TAXONOMY, category, subcategory)
}

pub fn resolve_in(
    taxonomy: &[TaxonomyEntry],
    category: &str,
    subcategory: &str,
) -> Option<FormTypeId> {
    if let Some(hit) = taxonomy
        .iter()
        .find(|e| e.category == category && e.subcategory == subcategory)
    {
        return Some(hit.form_type);
    }

    let wanted_category = normalize_label(category);
    let wanted_subcategory = normalize_label(subcategory);

    let hit = taxonomy.iter().find(|e| {
        normalize_label(e.category) == wanted_category
            && normalize_label(e.subcategory) == wanted_subcategory
    });

    if hit.is_none() {
        debug!(category, subcategory, "no form type declared for taxonomy pair");
    }

    hit.map(|e| e.form_type)
}

/// Declared subcategories under one category, in declaration order.
pub fn subcategories_of(category: &str) -> Vec<&'static TaxonomyEntry> {
    let wanted = normalize_label(category);
    TAXONOMY
        .iter()
        .filter(|e| normalize_label(e.category) == wanted)
        .collect()
}
