use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::schema::catalog;
use crate::schema::schema_model::FormSchema;

/// Closed set of record types that accept document auto-fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormTypeId {
    JournalPublication,
    ConferencePresentation,
    BookChapter,
    Patent,
    ResearchGrant,
    Consultancy,
    PhdGuidance,
    FdpAttended,
    EventOrganized,
    GuestLecture,
    OnlineCertification,
    Award,
    ProfessionalMembership,
    StudentAchievement,
    IndustrialVisit,
    Mou,
}

impl FormTypeId {
    pub const ALL: [FormTypeId; 16] = [
        FormTypeId::JournalPublication,
        FormTypeId::ConferencePresentation,
        FormTypeId::BookChapter,
        FormTypeId::Patent,
        FormTypeId::ResearchGrant,
        FormTypeId::Consultancy,
        FormTypeId::PhdGuidance,
        FormTypeId::FdpAttended,
        FormTypeId::EventOrganized,
        FormTypeId::GuestLecture,
        FormTypeId::OnlineCertification,
        FormTypeId::Award,
        FormTypeId::ProfessionalMembership,
        FormTypeId::StudentAchievement,
        FormTypeId::IndustrialVisit,
        FormTypeId::Mou,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FormTypeId::JournalPublication => "journal_publication",
            FormTypeId::ConferencePresentation => "conference_presentation",
            FormTypeId::BookChapter => "book_chapter",
            FormTypeId::Patent => "patent",
            FormTypeId::ResearchGrant => "research_grant",
            FormTypeId::Consultancy => "consultancy",
            FormTypeId::PhdGuidance => "phd_guidance",
            FormTypeId::FdpAttended => "fdp_attended",
            FormTypeId::EventOrganized => "event_organized",
            FormTypeId::GuestLecture => "guest_lecture",
            FormTypeId::OnlineCertification => "online_certification",
            FormTypeId::Award => "award",
            FormTypeId::ProfessionalMembership => "professional_membership",
            FormTypeId::StudentAchievement => "student_achievement",
            FormTypeId::IndustrialVisit => "industrial_visit",
            FormTypeId::Mou => "mou",
        }
    }

    /// Field schema and alias table declared for this record type.
    pub fn schema(&self) -> &'static FormSchema {
        catalog::schema_for(*self)
    }
}

impl fmt::Display for FormTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown form type '{0}'")]
pub struct UnknownFormType(pub String);

impl FromStr for FormTypeId {
    type Err = UnknownFormType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace(['-', ' '], "_");
        FormTypeId::ALL
            .into_iter()
            .find(|t| t.as_str() == wanted)
            .ok_or_else(|| UnknownFormType(s.to_string()))
    }
}
