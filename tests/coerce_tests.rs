mod common;

use chrono::NaiveDate;
use record_autofill::coerce::options::{DropdownOption, DropdownOptionSet};
use record_autofill::coerce::validator::{
    coerce_date, coerce_enum, coerce_number, coerce_text, coerce_url, coerce_value, coerce_year,
    parse_date, CoercionContext,
};
use record_autofill::coerce::value::{FieldValue, RawValue};
use record_autofill::schema::schema_model::FieldKind;
use serde_json::json;

fn text(s: &str) -> RawValue {
    RawValue::from(s)
}

fn num(n: i64) -> RawValue {
    RawValue::from(n)
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn levels() -> DropdownOptionSet {
    DropdownOptionSet::from(common::level_options())
}

// ============================================================================
// text
// ============================================================================

#[test]
fn text_is_trimmed() {
    assert_eq!(
        coerce_text(&text("  Deep Learning for Crops  ")),
        Some(FieldValue::Text("Deep Learning for Crops".into()))
    );
}

#[test]
fn blank_text_is_rejected() {
    assert_eq!(coerce_text(&text("   ")), None);
    assert_eq!(coerce_text(&text("")), None);
    assert_eq!(coerce_text(&RawValue::Absent), None);
}

#[test]
fn numbers_are_accepted_as_text() {
    assert_eq!(coerce_text(&num(42)), Some(FieldValue::Text("42".into())));
}

// ============================================================================
// number
// ============================================================================

#[test]
fn thousands_separators_are_stripped() {
    let value = coerce_number(&text("15,000"), false).unwrap();
    assert_eq!(value.to_json(), json!(15000));

    let value = coerce_number(&text("1,00,000"), false).unwrap();
    assert_eq!(value.to_json(), json!(100000));
}

#[test]
fn misplaced_separators_are_rejected() {
    assert_eq!(coerce_number(&text("12 34"), false), None);
    assert_eq!(coerce_number(&text("1,5"), false), None);
    assert_eq!(coerce_number(&text("1,2345"), false), None);
    assert_eq!(coerce_number(&text("15,000,"), false), None);
    assert_eq!(coerce_number(&text(",500"), false), None);
    assert_eq!(coerce_number(&text("12.5,0"), false), None);
}

#[test]
fn grouped_digits_are_joined() {
    assert_eq!(
        coerce_number(&text("1 500 000"), false).map(|v| v.to_json()),
        Some(json!(1500000))
    );
    assert_eq!(
        coerce_number(&text("12,34,567"), false).map(|v| v.to_json()),
        Some(json!(1234567))
    );
    assert_eq!(
        coerce_number(&text("1,234.75"), false).map(|v| v.to_json()),
        Some(json!(1234.75))
    );
    assert_eq!(
        coerce_number(&text("-2,500"), true).map(|v| v.to_json()),
        Some(json!(-2500))
    );
}

#[test]
fn non_numeric_is_rejected() {
    assert_eq!(coerce_number(&text("abc"), false), None);
    assert_eq!(coerce_number(&text("12 lakh"), false), None);
    assert_eq!(coerce_number(&text(""), false), None);
    assert_eq!(coerce_number(&text("NaN"), true), None);
}

#[test]
fn negatives_follow_field_configuration() {
    assert_eq!(coerce_number(&text("-5"), false), None);
    assert_eq!(coerce_number(&num(-5), false), None);
    assert_eq!(
        coerce_number(&text("-5"), true).map(|v| v.to_json()),
        Some(json!(-5))
    );
}

#[test]
fn decimals_and_raw_numbers() {
    assert_eq!(
        coerce_number(&text("12.5"), false).map(|v| v.to_json()),
        Some(json!(12.5))
    );
    assert_eq!(
        coerce_number(&num(3), false).map(|v| v.to_json()),
        Some(json!(3))
    );
}

// ============================================================================
// date
// ============================================================================

#[test]
fn past_and_present_dates_are_accepted() {
    let today = common::today();
    assert_eq!(
        coerce_date(&text("2023-04-10"), today),
        Some(FieldValue::Date(date(2023, 4, 10)))
    );
    assert_eq!(
        coerce_date(&text("2024-06-01"), today),
        Some(FieldValue::Date(today))
    );
}

#[test]
fn future_dates_are_rejected() {
    let today = common::today();
    assert_eq!(coerce_date(&text("2099-01-01"), today), None);
    assert_eq!(coerce_date(&text("2024-06-02"), today), None);
}

#[test]
fn impossible_dates_are_rejected() {
    let today = common::today();
    assert_eq!(coerce_date(&text("31/02/2023"), today), None);
    assert_eq!(coerce_date(&text("2023-13-01"), today), None);
    assert_eq!(coerce_date(&text("yesterday"), today), None);
    assert_eq!(coerce_date(&num(20230410), today), None);
}

#[test]
fn common_layouts_parse() {
    assert_eq!(parse_date("10/04/2023"), Some(date(2023, 4, 10)));
    assert_eq!(parse_date("10.04.2023"), Some(date(2023, 4, 10)));
    assert_eq!(parse_date("10-Apr-2023"), Some(date(2023, 4, 10)));
    assert_eq!(parse_date("10 April 2023"), Some(date(2023, 4, 10)));
    assert_eq!(parse_date("April 10, 2023"), Some(date(2023, 4, 10)));
    assert_eq!(parse_date("2023-04-10T09:30:00Z"), Some(date(2023, 4, 10)));
    assert_eq!(parse_date("2023-04-10 09:30:00"), Some(date(2023, 4, 10)));
}

#[test]
fn written_dates_serialize_iso() {
    let value = coerce_date(&text("10/04/2023"), common::today()).unwrap();
    assert_eq!(value.to_json(), json!("2023-04-10"));
}

// ============================================================================
// enum
// ============================================================================

#[test]
fn numeric_id_must_be_a_member() {
    assert_eq!(coerce_enum(&num(2), &levels()), Some(FieldValue::Choice(2)));
    assert_eq!(coerce_enum(&num(3), &levels()), None);
}

#[test]
fn names_match_case_insensitively() {
    assert_eq!(coerce_enum(&text("international"), &levels()), Some(FieldValue::Choice(2)));
    assert_eq!(coerce_enum(&text("  NATIONAL "), &levels()), Some(FieldValue::Choice(1)));
}

#[test]
fn numeric_text_falls_back_to_id() {
    assert_eq!(coerce_enum(&text("2"), &levels()), Some(FieldValue::Choice(2)));
    assert_eq!(coerce_enum(&text("2.0"), &levels()), Some(FieldValue::Choice(2)));
    assert_eq!(coerce_enum(&text("5"), &levels()), None);
}

#[test]
fn unmatched_enum_values_are_dropped() {
    assert_eq!(coerce_enum(&text("Regional"), &levels()), None);
    assert_eq!(coerce_enum(&num(1), &DropdownOptionSet::default()), None);
}

#[test]
fn enum_without_supplied_options_is_never_written() {
    let ctx = CoercionContext {
        today: common::today(),
        options: None,
    };
    assert_eq!(coerce_value(FieldKind::Enum, &num(1), &ctx), None);
}

#[test]
fn first_matching_name_wins() {
    let options = DropdownOptionSet::from(vec![
        DropdownOption::new(7, "Online"),
        DropdownOption::new(8, "online"),
    ]);
    assert_eq!(coerce_enum(&text("ONLINE"), &options), Some(FieldValue::Choice(7)));
}

// ============================================================================
// url / year
// ============================================================================

#[test]
fn urls_must_parse_strictly() {
    assert_eq!(
        coerce_url(&text("  https://doi.org/10.1000/xyz  ")),
        Some(FieldValue::Url("https://doi.org/10.1000/xyz".into()))
    );
    assert_eq!(coerce_url(&text("not a url")), None);
    assert_eq!(coerce_url(&text("www.example.com")), None);
    assert_eq!(coerce_url(&num(5)), None);
}

#[test]
fn years_need_exactly_four_digits() {
    assert_eq!(coerce_year(&text("2023")), Some(FieldValue::Year(2023)));
    assert_eq!(coerce_year(&text("FY 2023")), Some(FieldValue::Year(2023)));
    assert_eq!(coerce_year(&num(2021)), Some(FieldValue::Year(2021)));
    assert_eq!(coerce_year(&text("2023-24")), None);
    assert_eq!(coerce_year(&text("23")), None);
}

#[test]
fn whole_float_years_are_accepted() {
    assert_eq!(coerce_year(&RawValue::from(json!(2021.0))), Some(FieldValue::Year(2021)));
    assert_eq!(coerce_year(&RawValue::from(json!(2021.5))), None);
}

// ============================================================================
// dispatch by kind
// ============================================================================

#[test]
fn dispatch_selects_validator_by_kind() {
    let options = levels();
    let ctx = CoercionContext {
        today: common::today(),
        options: Some(&options),
    };

    assert_eq!(
        coerce_value(FieldKind::Enum, &text("National"), &ctx),
        Some(FieldValue::Choice(1))
    );
    assert_eq!(coerce_value(FieldKind::AMOUNT, &text("National"), &ctx), None);
    assert_eq!(
        coerce_value(FieldKind::Text, &text("National"), &ctx),
        Some(FieldValue::Text("National".into()))
    );
    assert_eq!(coerce_value(FieldKind::Date, &RawValue::Absent, &ctx), None);
}
