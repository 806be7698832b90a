//! Date field helpers
//!
//! Entries carry their date as up to three loose fields (`year`, `month`,
//! `day`). These helpers coerce the textual forms people actually write
//! (`Mon 17`, `July`, `Jul`) into calendar numbers.

use chrono::NaiveDate;

/// One of the three date fields an entry header may carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateField {
    Year,
    Month,
    Day,
}

impl DateField {
    /// Returns the metadata key for this field
    pub fn key(&self) -> &'static str {
        match self {
            DateField::Year => "year",
            DateField::Month => "month",
            DateField::Day => "day",
        }
    }
}

impl std::fmt::Display for DateField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

const MONTH_NAMES: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Looks up a month by its English name
///
/// Full names are tried first, then the three-letter abbreviations.
/// Matching ignores case and surrounding whitespace.
pub fn month_from_name(name: &str) -> Option<u32> {
    let name = name.trim().to_lowercase();

    let full = MONTH_NAMES.iter().position(|m| *m == name);
    let abbreviated = || {
        MONTH_NAMES
            .iter()
            .position(|m| name.len() == 3 && m.starts_with(name.as_str()))
    };

    full.or_else(abbreviated).map(|idx| idx as u32 + 1)
}

/// Returns the first maximal run of ASCII digits in `text`
pub fn first_number(text: &str) -> Option<&str> {
    let start = text.find(|c: char| c.is_ascii_digit())?;
    let rest = &text[start..];
    let len = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    Some(&rest[..len])
}

/// Years a post date may carry; file names need exactly four digits
const YEAR_RANGE: std::ops::RangeInclusive<i64> = 1..=9999;

/// Builds a calendar date, explaining why the triple is rejected
pub fn calendar_date(year: i64, month: i64, day: i64) -> Result<NaiveDate, &'static str> {
    if !YEAR_RANGE.contains(&year) {
        return Err("year is out of range");
    }

    if !(1..=12).contains(&month) {
        return Err("month must be in 1..12");
    }

    u32::try_from(day)
        .ok()
        .and_then(|day| NaiveDate::from_ymd_opt(year as i32, month as u32, day))
        .ok_or("day is out of range for month")
}
