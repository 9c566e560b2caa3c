use chrono::{DateTime, NaiveDate, NaiveDateTime};
use reqwest::Url;

use crate::coerce::options::DropdownOptionSet;
use crate::coerce::value::{FieldValue, RawValue};
use crate::schema::schema_model::FieldKind;

/// Accepted calendar layouts, tried in order. Numeric layouts are day-first.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%d-%m-%Y",
    "%d/%m/%Y",
    "%d.%m.%Y",
    "%d-%b-%Y",
    "%d %B %Y",
    "%d %b %Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%B %d %Y",
];

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

// ============================================================================
// Kind-keyed coercion
// ============================================================================

/// Everything a validator may consult besides the raw value itself.
#[derive(Debug, Clone, Copy)]
pub struct CoercionContext<'a> {
    /// Latest acceptable date; anything strictly after it is rejected.
    pub today: NaiveDate,
    /// Option set of the field being coerced, when it is enumerated.
    pub options: Option<&'a DropdownOptionSet>,
}

/// Coerce `raw` according to `kind`. `None` means "do not write"; there is
/// no error channel at this layer.
pub fn coerce_value(kind: FieldKind, raw: &RawValue, ctx: &CoercionContext<'_>) -> Option<FieldValue> {
    if raw.is_absent() {
        return None;
    }

    match kind {
        FieldKind::Text => coerce_text(raw),
        FieldKind::Number { allow_negative } => coerce_number(raw, allow_negative),
        FieldKind::Date => coerce_date(raw, ctx.today),
        FieldKind::Enum => coerce_enum(raw, ctx.options?),
        FieldKind::Url => coerce_url(raw),
        FieldKind::Year => coerce_year(raw),
    }
}

pub fn coerce_text(raw: &RawValue) -> Option<FieldValue> {
    let text = raw.as_text()?;
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return None;
    }

    Some(FieldValue::Text(trimmed.to_string()))
}

pub fn coerce_number(raw: &RawValue, allow_negative: bool) -> Option<FieldValue> {
    let number = match raw {
        RawValue::Number(n) => n.clone(),
        RawValue::Text(s) => parse_number(s)?,
        RawValue::Absent => return None,
    };

    let as_float = number.as_f64()?;
    if !allow_negative && as_float < 0.0 {
        return None;
    }

    Some(FieldValue::Number(number))
}

/// Parse a human-written number, dropping digit-group separators.
///
/// Commas or spaces are accepted only between complete digit groups of the
/// integer part (`15,000`, `1 500 000`, or lakh style `1,00,000`). Any other
/// comma or space rejects the value.
pub fn parse_number(text: &str) -> Option<serde_json::Number> {
    let cleaned = strip_group_separators(text.trim())?;

    if cleaned.is_empty() {
        return None;
    }

    if let Ok(int) = cleaned.parse::<i64>() {
        return Some(int.into());
    }

    let float = cleaned.parse::<f64>().ok()?;
    if !float.is_finite() {
        return None;
    }
    serde_json::Number::from_f64(float)
}

fn strip_group_separators(text: &str) -> Option<String> {
    let sign_len = usize::from(text.starts_with(['-', '+']));
    let (sign, body) = text.split_at(sign_len);

    let int_end = body
        .find(|c: char| !(c.is_ascii_digit() || c == ',' || c == ' '))
        .unwrap_or(body.len());
    let (int_part, rest) = body.split_at(int_end);

    if rest.contains([',', ' ']) {
        return None;
    }
    if !int_part.contains([',', ' ']) {
        return Some(text.to_string());
    }

    let separator = if int_part.contains(',') { ',' } else { ' ' };
    let groups: Vec<&str> = int_part.split(separator).collect();
    if !well_grouped(&groups) {
        return None;
    }

    Some(format!("{}{}{}", sign, groups.concat(), rest))
}

/// Western (`1,234,567`) or lakh (`12,34,567`) grouping of an integer part.
fn well_grouped(groups: &[&str]) -> bool {
    let Some((last, leading)) = groups.split_last() else {
        return false;
    };
    let Some((first, middle)) = leading.split_first() else {
        return false;
    };

    let digits = |g: &str| !g.is_empty() && g.bytes().all(|b| b.is_ascii_digit());
    if !groups.iter().all(|g| digits(*g)) || last.len() != 3 {
        return false;
    }

    let western = first.len() <= 3 && middle.iter().all(|g| g.len() == 3);
    let lakh = first.len() <= 2 && middle.iter().all(|g| g.len() == 2);
    western || lakh
}

pub fn coerce_date(raw: &RawValue, today: NaiveDate) -> Option<FieldValue> {
    let RawValue::Text(text) = raw else {
        return None;
    };

    let date = parse_date(text.trim())?;
    if date > today {
        return None;
    }

    Some(FieldValue::Date(date))
}

/// Parse a calendar date from the layouts extraction services commonly emit.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    if text.is_empty() {
        return None;
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return Some(date);
        }
    }

    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(text, format) {
            return Some(datetime.date());
        }
    }

    DateTime::parse_from_rfc3339(text)
        .ok()
        .map(|dt| dt.date_naive())
}

pub fn coerce_enum(raw: &RawValue, options: &DropdownOptionSet) -> Option<FieldValue> {
    if options.is_empty() {
        return None;
    }

    let id = match raw {
        RawValue::Number(n) => integral_id(n)?,
        RawValue::Text(text) => match options.find_by_name(text) {
            Some(option) => option.id,
            None => integral_id(&parse_number(text)?)?,
        },
        RawValue::Absent => return None,
    };

    if !options.contains_id(id) {
        return None;
    }

    Some(FieldValue::Choice(id))
}

fn integral_id(n: &serde_json::Number) -> Option<i64> {
    if let Some(id) = n.as_i64() {
        return Some(id);
    }

    let float = n.as_f64()?;
    if float.fract() == 0.0 && float >= i64::MIN as f64 && float <= i64::MAX as f64 {
        Some(float as i64)
    } else {
        None
    }
}

pub fn coerce_url(raw: &RawValue) -> Option<FieldValue> {
    let RawValue::Text(text) = raw else {
        return None;
    };

    let trimmed = text.trim();
    Url::parse(trimmed).ok()?;

    Some(FieldValue::Url(trimmed.to_string()))
}

pub fn coerce_year(raw: &RawValue) -> Option<FieldValue> {
    let text = match raw {
        RawValue::Number(n) => integral_id(n)?.to_string(),
        RawValue::Text(s) => s.clone(),
        RawValue::Absent => return None,
    };
    let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.len() != 4 {
        return None;
    }

    digits.parse::<u16>().ok().map(FieldValue::Year)
}
