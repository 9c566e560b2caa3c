//! Field schemas and alias tables for every record type.
//!
//! Within each alias table, entries are scanned front to back by the
//! substring tier of the resolver. Multi-word, specific variants are declared
//! before short generic ones (`"Date"`, `"Title"`, `"Year"`) so that a label
//! like "Date of Sanction" lands on the intended field.

use crate::schema::form_type::FormTypeId;
use crate::schema::schema_model::{
    alias, field, AliasEntry, FieldKind, FieldSpec, FormSchema,
};

use FieldKind::{Date, Enum, Text, Url, Year};

const AMOUNT: FieldKind = FieldKind::AMOUNT;

// ============================================================================
// Research
// ============================================================================

const JOURNAL_PUBLICATION_FIELDS: &[FieldSpec] = &[
    field("title_of_paper", Text),
    field("journal_name", Text),
    field("authors", Text),
    field("issn", Text),
    field("volume", Text),
    field("issue", Text),
    field("page_numbers", Text),
    field("indexing", Enum),
    field("publication_date", Date),
    field("publication_year", Year),
    field("impact_factor", AMOUNT),
    field("doi_url", Url),
    field("publisher", Text),
];

const JOURNAL_PUBLICATION_ALIASES: &[AliasEntry] = &[
    alias("Title of Paper", "title_of_paper"),
    alias("Title of the Paper", "title_of_paper"),
    alias("Paper Title", "title_of_paper"),
    alias("Article Title", "title_of_paper"),
    alias("Journal Name", "journal_name"),
    alias("Name of Journal", "journal_name"),
    alias("Name of the Journal", "journal_name"),
    alias("Journal", "journal_name"),
    alias("Author(s)", "authors"),
    alias("Authors", "authors"),
    alias("ISSN", "issn"),
    alias("ISSN No", "issn"),
    alias("Volume", "volume"),
    alias("Issue No", "issue"),
    alias("Issue", "issue"),
    alias("Page Numbers", "page_numbers"),
    alias("Page No", "page_numbers"),
    alias("Pages", "page_numbers"),
    alias("Indexed In", "indexing"),
    alias("Indexing", "indexing"),
    alias("Date of Publication", "publication_date"),
    alias("Publication Date", "publication_date"),
    alias("Published On", "publication_date"),
    alias("Year of Publication", "publication_year"),
    alias("Publication Year", "publication_year"),
    alias("Impact Factor", "impact_factor"),
    alias("DOI Link", "doi_url"),
    alias("DOI", "doi_url"),
    alias("Paper URL", "doi_url"),
    alias("Publisher", "publisher"),
    alias("Date", "publication_date"),
    alias("Year", "publication_year"),
    alias("Title", "title_of_paper"),
];

const CONFERENCE_PRESENTATION_FIELDS: &[FieldSpec] = &[
    field("title_of_paper", Text),
    field("conference_name", Text),
    field("organizer", Text),
    field("level", Enum),
    field("mode", Enum),
    field("date_of_presentation", Date),
    field("venue", Text),
    field("co_authors", Text),
    field("proceedings_url", Url),
    field("year_of_presentation", Year),
    field("registration_fee", AMOUNT),
];

const CONFERENCE_PRESENTATION_ALIASES: &[AliasEntry] = &[
    alias("Title of Paper", "title_of_paper"),
    alias("Title of the Paper", "title_of_paper"),
    alias("Paper Title", "title_of_paper"),
    alias("Conference Name", "conference_name"),
    alias("Name of Conference", "conference_name"),
    alias("Name of the Conference", "conference_name"),
    alias("Organized By", "organizer"),
    alias("Organised By", "organizer"),
    alias("Organizing Institution", "organizer"),
    alias("Organizer", "organizer"),
    alias("Presentation Level", "level"),
    alias("Conference Level", "level"),
    alias("Level", "level"),
    alias("Mode of Presentation", "mode"),
    alias("Mode", "mode"),
    alias("Date of Presentation", "date_of_presentation"),
    alias("Presentation Date", "date_of_presentation"),
    alias("Presented On", "date_of_presentation"),
    alias("Venue", "venue"),
    alias("Location", "venue"),
    alias("Co-Authors", "co_authors"),
    alias("Authors", "co_authors"),
    alias("Proceedings URL", "proceedings_url"),
    alias("Paper Link", "proceedings_url"),
    alias("URL", "proceedings_url"),
    alias("Registration Fee", "registration_fee"),
    alias("Fee", "registration_fee"),
    alias("Year of Presentation", "year_of_presentation"),
    alias("Date", "date_of_presentation"),
    alias("Year", "year_of_presentation"),
    alias("Title", "title_of_paper"),
];

const BOOK_CHAPTER_FIELDS: &[FieldSpec] = &[
    field("book_title", Text),
    field("chapter_title", Text),
    field("authors", Text),
    field("editors", Text),
    field("publisher", Text),
    field("isbn", Text),
    field("publication_type", Enum),
    field("edition", Text),
    field("page_numbers", Text),
    field("publication_date", Date),
    field("publication_year", Year),
    field("book_url", Url),
];

const BOOK_CHAPTER_ALIASES: &[AliasEntry] = &[
    alias("Chapter Title", "chapter_title"),
    alias("Title of Chapter", "chapter_title"),
    alias("Title of the Chapter", "chapter_title"),
    alias("Book Title", "book_title"),
    alias("Title of Book", "book_title"),
    alias("Title of the Book", "book_title"),
    alias("Author(s)", "authors"),
    alias("Authors", "authors"),
    alias("Editor(s)", "editors"),
    alias("Edited By", "editors"),
    alias("Editors", "editors"),
    alias("Publishing House", "publisher"),
    alias("Published By", "publisher"),
    alias("Publisher", "publisher"),
    alias("ISBN No", "isbn"),
    alias("ISBN", "isbn"),
    alias("Publication Type", "publication_type"),
    alias("Type", "publication_type"),
    alias("Edition", "edition"),
    alias("Page Numbers", "page_numbers"),
    alias("Pages", "page_numbers"),
    alias("Date of Publication", "publication_date"),
    alias("Publication Date", "publication_date"),
    alias("Year of Publication", "publication_year"),
    alias("Book URL", "book_url"),
    alias("Link", "book_url"),
    alias("URL", "book_url"),
    alias("Date", "publication_date"),
    alias("Year", "publication_year"),
    alias("Title", "book_title"),
];

const PATENT_FIELDS: &[FieldSpec] = &[
    field("patent_title", Text),
    field("application_number", Text),
    field("patent_number", Text),
    field("inventors", Text),
    field("applicant", Text),
    field("patent_office", Text),
    field("status", Enum),
    field("filing_date", Date),
    field("publication_date", Date),
    field("grant_date", Date),
    field("filing_year", Year),
];

const PATENT_ALIASES: &[AliasEntry] = &[
    alias("Title of Invention", "patent_title"),
    alias("Title of the Invention", "patent_title"),
    alias("Invention Title", "patent_title"),
    alias("Patent Title", "patent_title"),
    alias("Patent Application No", "application_number"),
    alias("Application Number", "application_number"),
    alias("Application No", "application_number"),
    alias("Patent Number", "patent_number"),
    alias("Patent No", "patent_number"),
    alias("Inventor(s)", "inventors"),
    alias("Inventors", "inventors"),
    alias("Applicant Name", "applicant"),
    alias("Applicant", "applicant"),
    alias("Patent Office", "patent_office"),
    alias("Country", "patent_office"),
    alias("Patent Status", "status"),
    alias("Status", "status"),
    alias("Date of Filing", "filing_date"),
    alias("Filing Date", "filing_date"),
    alias("Filed On", "filing_date"),
    alias("Date of Publication", "publication_date"),
    alias("Publication Date", "publication_date"),
    alias("Published On", "publication_date"),
    alias("Date of Grant", "grant_date"),
    alias("Grant Date", "grant_date"),
    alias("Granted On", "grant_date"),
    alias("Grant Number", "patent_number"),
    alias("Year of Filing", "filing_year"),
    alias("Date", "filing_date"),
    alias("Year", "filing_year"),
    alias("Title", "patent_title"),
];

const RESEARCH_GRANT_FIELDS: &[FieldSpec] = &[
    field("project_title", Text),
    field("funding_agency", Text),
    field("principal_investigator", Text),
    field("co_investigator", Text),
    field("scheme", Text),
    field("grant_amount", AMOUNT),
    field("duration_months", AMOUNT),
    field("status", Enum),
    field("sanction_date", Date),
    field("sanction_year", Year),
];

const RESEARCH_GRANT_ALIASES: &[AliasEntry] = &[
    alias("Project Title", "project_title"),
    alias("Title of Project", "project_title"),
    alias("Title of the Project", "project_title"),
    alias("Funding Agency", "funding_agency"),
    alias("Sponsoring Agency", "funding_agency"),
    alias("Funded By", "funding_agency"),
    alias("Principal Investigator", "principal_investigator"),
    alias("PI Name", "principal_investigator"),
    alias("Co-Investigator", "co_investigator"),
    alias("Co-PI", "co_investigator"),
    alias("Scheme", "scheme"),
    alias("Grant Received", "grant_amount"),
    alias("Grant Amount", "grant_amount"),
    alias("Amount Sanctioned", "grant_amount"),
    alias("Sanctioned Amount", "grant_amount"),
    alias("Amount", "grant_amount"),
    alias("Duration (Months)", "duration_months"),
    alias("Duration", "duration_months"),
    alias("Project Status", "status"),
    alias("Status", "status"),
    alias("Date of Sanction", "sanction_date"),
    alias("Sanction Date", "sanction_date"),
    alias("Sanctioned On", "sanction_date"),
    alias("Year of Sanction", "sanction_year"),
    alias("Date", "sanction_date"),
    alias("Year", "sanction_year"),
    alias("Title", "project_title"),
];

const CONSULTANCY_FIELDS: &[FieldSpec] = &[
    field("project_title", Text),
    field("client_organization", Text),
    field("consultant", Text),
    field("amount_received", AMOUNT),
    field("status", Enum),
    field("start_date", Date),
    field("end_date", Date),
    field("year", Year),
];

const CONSULTANCY_ALIASES: &[AliasEntry] = &[
    alias("Title of Consultancy", "project_title"),
    alias("Consultancy Title", "project_title"),
    alias("Project Title", "project_title"),
    alias("Client Organization", "client_organization"),
    alias("Client Organisation", "client_organization"),
    alias("Sponsoring Agency", "client_organization"),
    alias("Client", "client_organization"),
    alias("Consultant Name", "consultant"),
    alias("Consultant", "consultant"),
    alias("Faculty Name", "consultant"),
    alias("Amount Received", "amount_received"),
    alias("Consultancy Fee", "amount_received"),
    alias("Revenue Generated", "amount_received"),
    alias("Amount", "amount_received"),
    alias("Status", "status"),
    alias("Date of Commencement", "start_date"),
    alias("Start Date", "start_date"),
    alias("From Date", "start_date"),
    alias("Date of Completion", "end_date"),
    alias("End Date", "end_date"),
    alias("To Date", "end_date"),
    alias("Date", "start_date"),
    alias("Year", "year"),
    alias("Organization", "client_organization"),
    alias("Title", "project_title"),
];

const PHD_GUIDANCE_FIELDS: &[FieldSpec] = &[
    field("scholar_name", Text),
    field("registration_number", Text),
    field("thesis_title", Text),
    field("university", Text),
    field("guide_role", Enum),
    field("status", Enum),
    field("registration_date", Date),
    field("award_date", Date),
    field("year_of_award", Year),
];

const PHD_GUIDANCE_ALIASES: &[AliasEntry] = &[
    alias("Name of Scholar", "scholar_name"),
    alias("Name of the Scholar", "scholar_name"),
    alias("Scholar Name", "scholar_name"),
    alias("Research Scholar", "scholar_name"),
    alias("Candidate Name", "scholar_name"),
    alias("Registration Number", "registration_number"),
    alias("Registration No", "registration_number"),
    alias("Enrollment No", "registration_number"),
    alias("Title of Thesis", "thesis_title"),
    alias("Thesis Title", "thesis_title"),
    alias("Research Topic", "thesis_title"),
    alias("Awarding University", "university"),
    alias("University", "university"),
    alias("Guide Role", "guide_role"),
    alias("Supervisor Role", "guide_role"),
    alias("Role", "guide_role"),
    alias("Current Status", "status"),
    alias("Status", "status"),
    alias("Date of Registration", "registration_date"),
    alias("Registration Date", "registration_date"),
    alias("Date of Award", "award_date"),
    alias("Award Date", "award_date"),
    alias("Viva Date", "award_date"),
    alias("Year of Award", "year_of_award"),
    alias("Year", "year_of_award"),
    alias("Name", "scholar_name"),
    alias("Title", "thesis_title"),
];

// ============================================================================
// Faculty development
// ============================================================================

const FDP_ATTENDED_FIELDS: &[FieldSpec] = &[
    field("program_title", Text),
    field("organizer", Text),
    field("program_type", Enum),
    field("mode", Enum),
    field("start_date", Date),
    field("end_date", Date),
    field("duration_days", AMOUNT),
    field("sponsoring_agency", Text),
    field("certificate_url", Url),
];

const FDP_ATTENDED_ALIASES: &[AliasEntry] = &[
    alias("Title of Programme", "program_title"),
    alias("Title of the Programme", "program_title"),
    alias("Programme Title", "program_title"),
    alias("Program Title", "program_title"),
    alias("Workshop Title", "program_title"),
    alias("Title of FDP", "program_title"),
    alias("Organized By", "organizer"),
    alias("Organised By", "organizer"),
    alias("Organizing Institution", "organizer"),
    alias("Host Institution", "organizer"),
    alias("Organizer", "organizer"),
    alias("Type of Programme", "program_type"),
    alias("Program Type", "program_type"),
    alias("Mode", "mode"),
    alias("Start Date", "start_date"),
    alias("From Date", "start_date"),
    alias("End Date", "end_date"),
    alias("To Date", "end_date"),
    alias("Duration (Days)", "duration_days"),
    alias("Number of Days", "duration_days"),
    alias("No of Days", "duration_days"),
    alias("Duration", "duration_days"),
    alias("Sponsoring Agency", "sponsoring_agency"),
    alias("Sponsored By", "sponsoring_agency"),
    alias("Funding Agency", "sponsoring_agency"),
    alias("Certificate URL", "certificate_url"),
    alias("Certificate Link", "certificate_url"),
    alias("URL", "certificate_url"),
    alias("Date", "start_date"),
    alias("Type", "program_type"),
    alias("Title", "program_title"),
];

const EVENT_ORGANIZED_FIELDS: &[FieldSpec] = &[
    field("event_title", Text),
    field("event_type", Enum),
    field("level", Enum),
    field("start_date", Date),
    field("end_date", Date),
    field("participants", AMOUNT),
    field("coordinator", Text),
    field("budget", AMOUNT),
    field("sponsor", Text),
    field("venue", Text),
];

const EVENT_ORGANIZED_ALIASES: &[AliasEntry] = &[
    alias("Event Title", "event_title"),
    alias("Title of Event", "event_title"),
    alias("Name of Event", "event_title"),
    alias("Event Name", "event_title"),
    alias("Event Type", "event_type"),
    alias("Type of Event", "event_type"),
    alias("Level of Event", "level"),
    alias("Event Level", "level"),
    alias("Level", "level"),
    alias("Date of Event", "start_date"),
    alias("Event Date", "start_date"),
    alias("Start Date", "start_date"),
    alias("From Date", "start_date"),
    alias("End Date", "end_date"),
    alias("To Date", "end_date"),
    alias("Number of Participants", "participants"),
    alias("No of Participants", "participants"),
    alias("Participants", "participants"),
    alias("Coordinator Name", "coordinator"),
    alias("Coordinator", "coordinator"),
    alias("Convener", "coordinator"),
    alias("Total Budget", "budget"),
    alias("Expenditure", "budget"),
    alias("Budget", "budget"),
    alias("Sponsored By", "sponsor"),
    alias("Funding Agency", "sponsor"),
    alias("Sponsor", "sponsor"),
    alias("Venue", "venue"),
    alias("Location", "venue"),
    alias("Date", "start_date"),
    alias("Type", "event_type"),
    alias("Title", "event_title"),
];

const GUEST_LECTURE_FIELDS: &[FieldSpec] = &[
    field("topic", Text),
    field("host_institution", Text),
    field("audience", Enum),
    field("mode", Enum),
    field("lecture_date", Date),
    field("honorarium", AMOUNT),
    field("lecture_url", Url),
];

const GUEST_LECTURE_ALIASES: &[AliasEntry] = &[
    alias("Title of Lecture", "topic"),
    alias("Title of the Lecture", "topic"),
    alias("Lecture Topic", "topic"),
    alias("Topic", "topic"),
    alias("Subject", "topic"),
    alias("Host Institution", "host_institution"),
    alias("Invited By", "host_institution"),
    alias("Organized By", "host_institution"),
    alias("Institution", "host_institution"),
    alias("Target Audience", "audience"),
    alias("Audience", "audience"),
    alias("Mode", "mode"),
    alias("Date of Lecture", "lecture_date"),
    alias("Lecture Date", "lecture_date"),
    alias("Delivered On", "lecture_date"),
    alias("Honorarium", "honorarium"),
    alias("Remuneration", "honorarium"),
    alias("Amount", "honorarium"),
    alias("Recording URL", "lecture_url"),
    alias("Lecture Link", "lecture_url"),
    alias("URL", "lecture_url"),
    alias("Date", "lecture_date"),
    alias("Title", "topic"),
];

const ONLINE_CERTIFICATION_FIELDS: &[FieldSpec] = &[
    field("course_name", Text),
    field("platform", Enum),
    field("institution", Text),
    field("completion_date", Date),
    field("duration_weeks", AMOUNT),
    field("score", AMOUNT),
    field("credential_id", Text),
    field("certificate_url", Url),
];

const ONLINE_CERTIFICATION_ALIASES: &[AliasEntry] = &[
    alias("Course Name", "course_name"),
    alias("Name of Course", "course_name"),
    alias("Name of the Course", "course_name"),
    alias("Course Title", "course_name"),
    alias("Platform", "platform"),
    alias("Offered By", "platform"),
    alias("Provider", "platform"),
    alias("Offering Institution", "institution"),
    alias("Institution", "institution"),
    alias("University", "institution"),
    alias("Date of Completion", "completion_date"),
    alias("Completion Date", "completion_date"),
    alias("Completed On", "completion_date"),
    alias("Issue Date", "completion_date"),
    alias("Duration (Weeks)", "duration_weeks"),
    alias("Duration", "duration_weeks"),
    alias("Percentage", "score"),
    alias("Score", "score"),
    alias("Marks", "score"),
    alias("Credential ID", "credential_id"),
    alias("Certificate ID", "credential_id"),
    alias("Certificate Number", "credential_id"),
    alias("Certificate URL", "certificate_url"),
    alias("Verification URL", "certificate_url"),
    alias("Certificate Link", "certificate_url"),
    alias("URL", "certificate_url"),
    alias("Date", "completion_date"),
    alias("Course", "course_name"),
    alias("Title", "course_name"),
];

// ============================================================================
// Recognition
// ============================================================================

const AWARD_FIELDS: &[FieldSpec] = &[
    field("award_name", Text),
    field("awarding_body", Text),
    field("level", Enum),
    field("award_category", Enum),
    field("award_date", Date),
    field("prize_amount", AMOUNT),
    field("award_year", Year),
];

const AWARD_ALIASES: &[AliasEntry] = &[
    alias("Name of Award", "award_name"),
    alias("Name of the Award", "award_name"),
    alias("Award Name", "award_name"),
    alias("Award Title", "award_name"),
    alias("Awarding Body", "awarding_body"),
    alias("Awarding Agency", "awarding_body"),
    alias("Awarded By", "awarding_body"),
    alias("Conferred By", "awarding_body"),
    alias("Award Level", "level"),
    alias("Level", "level"),
    alias("Award Category", "award_category"),
    alias("Date of Award", "award_date"),
    alias("Award Date", "award_date"),
    alias("Awarded On", "award_date"),
    alias("Prize Money", "prize_amount"),
    alias("Cash Prize", "prize_amount"),
    alias("Amount", "prize_amount"),
    alias("Year of Award", "award_year"),
    alias("Date", "award_date"),
    alias("Year", "award_year"),
    alias("Organization", "awarding_body"),
    alias("Award", "award_name"),
    alias("Title", "award_name"),
];

const PROFESSIONAL_MEMBERSHIP_FIELDS: &[FieldSpec] = &[
    field("body_name", Text),
    field("membership_id", Text),
    field("membership_type", Enum),
    field("start_date", Date),
    field("fee_paid", AMOUNT),
    field("year_of_joining", Year),
    field("profile_url", Url),
];

const PROFESSIONAL_MEMBERSHIP_ALIASES: &[AliasEntry] = &[
    alias("Name of Professional Body", "body_name"),
    alias("Professional Body", "body_name"),
    alias("Society Name", "body_name"),
    alias("Membership ID", "membership_id"),
    alias("Membership Number", "membership_id"),
    alias("Membership No", "membership_id"),
    alias("Member ID", "membership_id"),
    alias("Membership Type", "membership_type"),
    alias("Type of Membership", "membership_type"),
    alias("Grade", "membership_type"),
    alias("Member Since", "start_date"),
    alias("Date of Joining", "start_date"),
    alias("Start Date", "start_date"),
    alias("Valid From", "start_date"),
    alias("Membership Fee", "fee_paid"),
    alias("Fee Paid", "fee_paid"),
    alias("Amount", "fee_paid"),
    alias("Year of Joining", "year_of_joining"),
    alias("Profile URL", "profile_url"),
    alias("URL", "profile_url"),
    alias("Date", "start_date"),
    alias("Year", "year_of_joining"),
    alias("Type", "membership_type"),
    alias("Organization", "body_name"),
];

// ============================================================================
// Student activities
// ============================================================================

const STUDENT_ACHIEVEMENT_FIELDS: &[FieldSpec] = &[
    field("student_name", Text),
    field("roll_number", Text),
    field("event_name", Text),
    field("achievement", Text),
    field("level", Enum),
    field("event_date", Date),
    field("organizer", Text),
    field("prize_amount", AMOUNT),
    field("year", Year),
];

const STUDENT_ACHIEVEMENT_ALIASES: &[AliasEntry] = &[
    alias("Name of Student", "student_name"),
    alias("Name of the Student", "student_name"),
    alias("Student Name", "student_name"),
    alias("Roll Number", "roll_number"),
    alias("Roll No", "roll_number"),
    alias("Register Number", "roll_number"),
    alias("Enrollment Number", "roll_number"),
    alias("Name of Event", "event_name"),
    alias("Event Name", "event_name"),
    alias("Competition", "event_name"),
    alias("Prize Money", "prize_amount"),
    alias("Cash Prize", "prize_amount"),
    alias("Amount", "prize_amount"),
    alias("Achievement", "achievement"),
    alias("Position", "achievement"),
    alias("Prize", "achievement"),
    alias("Rank", "achievement"),
    alias("Level", "level"),
    alias("Date of Event", "event_date"),
    alias("Event Date", "event_date"),
    alias("Organized By", "organizer"),
    alias("Organised By", "organizer"),
    alias("Host Institution", "organizer"),
    alias("Organizer", "organizer"),
    alias("Date", "event_date"),
    alias("Year", "year"),
    alias("Event", "event_name"),
    alias("Name", "student_name"),
];

const INDUSTRIAL_VISIT_FIELDS: &[FieldSpec] = &[
    field("company_name", Text),
    field("visit_date", Date),
    field("students_count", AMOUNT),
    field("faculty_coordinator", Text),
    field("location", Text),
    field("purpose", Text),
    field("class_name", Text),
];

const INDUSTRIAL_VISIT_ALIASES: &[AliasEntry] = &[
    alias("Company Name", "company_name"),
    alias("Name of Company", "company_name"),
    alias("Name of the Company", "company_name"),
    alias("Industry Visited", "company_name"),
    alias("Organization Visited", "company_name"),
    alias("Date of Visit", "visit_date"),
    alias("Visit Date", "visit_date"),
    alias("Number of Students", "students_count"),
    alias("No of Students", "students_count"),
    alias("Student Count", "students_count"),
    alias("Faculty Coordinator", "faculty_coordinator"),
    alias("Faculty In-charge", "faculty_coordinator"),
    alias("Coordinator", "faculty_coordinator"),
    alias("Purpose of Visit", "purpose"),
    alias("Objective", "purpose"),
    alias("Purpose", "purpose"),
    alias("Location", "location"),
    alias("Place", "location"),
    alias("City", "location"),
    alias("Class", "class_name"),
    alias("Semester", "class_name"),
    alias("Date", "visit_date"),
    alias("Students", "students_count"),
    alias("Company", "company_name"),
    alias("Industry", "company_name"),
];

// ============================================================================
// Institutional
// ============================================================================

const MOU_FIELDS: &[FieldSpec] = &[
    field("partner_organization", Text),
    field("title", Text),
    field("signing_date", Date),
    field("duration_years", AMOUNT),
    field("mou_type", Enum),
    field("coordinator", Text),
    field("document_url", Url),
    field("signing_year", Year),
];

const MOU_ALIASES: &[AliasEntry] = &[
    alias("Partner Organization", "partner_organization"),
    alias("Partner Organisation", "partner_organization"),
    alias("Name of Organization", "partner_organization"),
    alias("Signed With", "partner_organization"),
    alias("Title of MoU", "title"),
    alias("MoU Title", "title"),
    alias("Date of Signing", "signing_date"),
    alias("Signing Date", "signing_date"),
    alias("Signed On", "signing_date"),
    alias("Duration (Years)", "duration_years"),
    alias("Validity (Years)", "duration_years"),
    alias("Duration", "duration_years"),
    alias("Validity", "duration_years"),
    alias("Nature of Collaboration", "mou_type"),
    alias("MoU Type", "mou_type"),
    alias("Faculty Coordinator", "coordinator"),
    alias("Contact Person", "coordinator"),
    alias("Coordinator", "coordinator"),
    alias("Document URL", "document_url"),
    alias("MoU Link", "document_url"),
    alias("URL", "document_url"),
    alias("Date", "signing_date"),
    alias("Year", "signing_year"),
    alias("Type", "mou_type"),
    alias("Organization", "partner_organization"),
    alias("Partner", "partner_organization"),
    alias("Title", "title"),
];

// ============================================================================
// Lookup
// ============================================================================

static SCHEMAS: [FormSchema; 16] = [
    FormSchema {
        form_type: FormTypeId::JournalPublication,
        fields: JOURNAL_PUBLICATION_FIELDS,
        aliases: JOURNAL_PUBLICATION_ALIASES,
    },
    FormSchema {
        form_type: FormTypeId::ConferencePresentation,
        fields: CONFERENCE_PRESENTATION_FIELDS,
        aliases: CONFERENCE_PRESENTATION_ALIASES,
    },
    FormSchema {
        form_type: FormTypeId::BookChapter,
        fields: BOOK_CHAPTER_FIELDS,
        aliases: BOOK_CHAPTER_ALIASES,
    },
    FormSchema {
        form_type: FormTypeId::Patent,
        fields: PATENT_FIELDS,
        aliases: PATENT_ALIASES,
    },
    FormSchema {
        form_type: FormTypeId::ResearchGrant,
        fields: RESEARCH_GRANT_FIELDS,
        aliases: RESEARCH_GRANT_ALIASES,
    },
    FormSchema {
        form_type: FormTypeId::Consultancy,
        fields: CONSULTANCY_FIELDS,
        aliases: CONSULTANCY_ALIASES,
    },
    FormSchema {
        form_type: FormTypeId::PhdGuidance,
        fields: PHD_GUIDANCE_FIELDS,
        aliases: PHD_GUIDANCE_ALIASES,
    },
    FormSchema {
        form_type: FormTypeId::FdpAttended,
        fields: FDP_ATTENDED_FIELDS,
        aliases: FDP_ATTENDED_ALIASES,
    },
    FormSchema {
        form_type: FormTypeId::EventOrganized,
        fields: EVENT_ORGANIZED_FIELDS,
        aliases: EVENT_ORGANIZED_ALIASES,
    },
    FormSchema {
        form_type: FormTypeId::GuestLecture,
        fields: GUEST_LECTURE_FIELDS,
        aliases: GUEST_LECTURE_ALIASES,
    },
    FormSchema {
        form_type: FormTypeId::OnlineCertification,
        fields: ONLINE_CERTIFICATION_FIELDS,
        aliases: ONLINE_CERTIFICATION_ALIASES,
    },
    FormSchema {
        form_type: FormTypeId::Award,
        fields: AWARD_FIELDS,
        aliases: AWARD_ALIASES,
    },
    FormSchema {
        form_type: FormTypeId::ProfessionalMembership,
        fields: PROFESSIONAL_MEMBERSHIP_FIELDS,
        aliases: PROFESSIONAL_MEMBERSHIP_ALIASES,
    },
    FormSchema {
        form_type: FormTypeId::StudentAchievement,
        fields: STUDENT_ACHIEVEMENT_FIELDS,
        aliases: STUDENT_ACHIEVEMENT_ALIASES,
    },
    FormSchema {
        form_type: FormTypeId::IndustrialVisit,
        fields: INDUSTRIAL_VISIT_FIELDS,
        aliases: INDUSTRIAL_VISIT_ALIASES,
    },
    FormSchema {
        form_type: FormTypeId::Mou,
        fields: MOU_FIELDS,
        aliases: MOU_ALIASES,
    },
];

/// Schema declared for `form_type`. Every variant has exactly one entry.
pub fn schema_for(form_type: FormTypeId) -> &'static FormSchema {
    // SCHEMAS is declared in FormTypeId::ALL order.
    &SCHEMAS[form_type as usize]
}

pub fn all_schemas() -> &'static [FormSchema] {
    &SCHEMAS
}
