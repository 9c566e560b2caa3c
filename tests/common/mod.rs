#![allow(dead_code)]

use chrono::NaiveDate;
use record_autofill::coerce::options::{DropdownOption, DropdownOptions};

/// Fixed evaluation date so date rules do not drift with the wall clock.
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

pub fn level_options() -> Vec<DropdownOption> {
    vec![
        DropdownOption::new(1, "National"),
        DropdownOption::new(2, "International"),
    ]
}

pub fn conference_options() -> DropdownOptions {
    DropdownOptions::new()
        .with("level", level_options())
        .with(
            "mode",
            vec![DropdownOption::new(10, "Online"), DropdownOption::new(11, "Offline")],
        )
}

pub const RESEARCH: &str = "Research";
pub const CONFERENCE: &str = "Paper Presented in Conference";
pub const GRANT: &str = "Funded Research Project";
