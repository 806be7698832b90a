//! Journal.TXT parser
//!
//! A journal is a single text file of alternating header and body blocks,
//! separated by `---` lines:
//!
//! ```text
//! ---
//! year: 2017
//! month: July
//! day: Mon 17
//! ---
//! Arrived in Vienna.
//! ---
//! day: Tue 18
//! ---
//! Museums all day.
//! ```
//!
//! Headers are YAML. Each entry must name its `day`; `year` and `month` may be
//! omitted after the first entry, in which case they carry over from the
//! entry before it.

use chrono::{Datelike, NaiveDate};

use super::date::{calendar_date, first_number, month_from_name, DateField};
use super::error::ParseError;
use super::meta::{EntryMeta, MetaValue};

/// One header/body pair as it appears in the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawEntry<'a> {
    /// YAML header text
    pub meta: &'a str,

    /// Body text, verbatim
    pub content: &'a str,
}

/// A journal entry with its date resolved
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedEntry {
    /// The resolved entry date (also stored under `date` in `meta`)
    pub date: NaiveDate,

    /// Header fields without `year`/`month`/`day`, plus `date`
    pub meta: EntryMeta,

    /// Body text exactly as in the source, trailing newlines included
    pub content: String,
}

/// Parses a whole journal into dated entries
///
/// Fails on the first bad entry; there is no partial result.
pub fn parse(text: &str) -> Result<Vec<ParsedEntry>, ParseError> {
    let raw_entries = split_entries(text)?;

    let mut previous: Option<NaiveDate> = None;
    let mut entries = Vec::with_capacity(raw_entries.len());

    for (idx, raw) in raw_entries.iter().enumerate() {
        let entry = resolve_entry(idx + 1, raw, previous)?;
        previous = Some(entry.date);
        entries.push(entry);
    }

    Ok(entries)
}

/// Returns true for a `---` line, ignoring trailing blanks and `\r`
fn is_delimiter(line: &str) -> bool {
    line.strip_prefix("---")
        .is_some_and(|rest| rest.chars().all(|c| matches!(c, ' ' | '\t' | '\r')))
}

/// Splits a journal into header/body pairs
///
/// A delimiter on the very first line is skipped. A trailing header with no
/// body becomes an entry with empty content unless it is blank.
pub fn split_entries(text: &str) -> Result<Vec<RawEntry<'_>>, ParseError> {
    let mut fragments = Vec::new();
    let mut found_delimiter = false;
    let mut start = 0;
    let mut offset = 0;

    for line in text.split_inclusive('\n') {
        let line_start = offset;
        offset += line.len();

        if !is_delimiter(line.strip_suffix('\n').unwrap_or(line)) {
            continue;
        }

        if line_start > 0 {
            fragments.push(&text[start..line_start]);
        }
        found_delimiter = true;
        start = offset;
    }
    fragments.push(&text[start..]);

    if !found_delimiter {
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }
        // Without a single header block there is nothing to date the text by
        return Err(ParseError::MissingRequiredField {
            entry: 1,
            field: DateField::Year,
            reason: "no --- header line found",
        });
    }

    let mut entries = Vec::with_capacity(fragments.len() / 2 + 1);
    for pair in fragments.chunks(2) {
        match *pair {
            [meta, content] => entries.push(RawEntry { meta, content }),
            [meta] if !meta.trim().is_empty() => entries.push(RawEntry { meta, content: "" }),
            _ => {}
        }
    }

    Ok(entries)
}

/// Decodes one header and resolves its date
///
/// `ordinal` is the 1-based entry number used in errors. `previous` is the
/// date of the entry before this one, if any.
pub fn resolve_entry(
    ordinal: usize,
    raw: &RawEntry<'_>,
    previous: Option<NaiveDate>,
) -> Result<ParsedEntry, ParseError> {
    let mut meta = decode_meta(ordinal, raw.meta)?;

    let year = take_field(&mut meta, DateField::Year);
    let month = take_field(&mut meta, DateField::Month);
    let day = take_field(&mut meta, DateField::Day);

    let year = match year {
        Some(value) => year_number(ordinal, &value)?,
        None => match previous {
            Some(prev) => i64::from(prev.year()),
            None => {
                return Err(ParseError::MissingRequiredField {
                    entry: ordinal,
                    field: DateField::Year,
                    reason: "year entry required for first entry",
                })
            }
        },
    };

    let day = match day {
        Some(value) => day_number(ordinal, &value)?,
        None => {
            return Err(ParseError::MissingRequiredField {
                entry: ordinal,
                field: DateField::Day,
                reason: "day entry required",
            })
        }
    };

    let month = match month {
        Some(value) => month_number(ordinal, &value)?,
        None => match previous {
            Some(prev) => i64::from(prev.month()),
            None => {
                return Err(ParseError::MissingRequiredField {
                    entry: ordinal,
                    field: DateField::Month,
                    reason: "month entry required for first entry",
                })
            }
        },
    };

    let date = calendar_date(year, month, day).map_err(|reason| ParseError::InvalidDate {
        entry: ordinal,
        year,
        month,
        day,
        reason,
    })?;

    meta.insert("date", date);

    Ok(ParsedEntry {
        date,
        meta,
        content: raw.content.to_string(),
    })
}

/// Decodes a YAML header block; blank blocks decode to empty metadata
fn decode_meta(ordinal: usize, text: &str) -> Result<EntryMeta, ParseError> {
    use serde_yaml::Value;

    let invalid = |message: String| ParseError::InvalidMetadata {
        entry: ordinal,
        message,
    };

    if text.trim().is_empty() {
        return Ok(EntryMeta::new());
    }

    let value: Value = serde_yaml::from_str(text).map_err(|e| invalid(e.to_string()))?;

    match value {
        Value::Null => Ok(EntryMeta::new()),
        Value::Mapping(map) => EntryMeta::try_from(map).map_err(invalid),
        Value::Sequence(_) => Err(invalid("expected key-value fields, found a list".to_string())),
        _ => Err(invalid("expected key-value fields, found a plain value".to_string())),
    }
}

/// Removes a date field; an explicit `null` counts as absent
fn take_field(meta: &mut EntryMeta, field: DateField) -> Option<MetaValue> {
    meta.remove(field.key()).filter(|value| !value.is_null())
}

fn invalid_format(ordinal: usize, field: DateField, value: &MetaValue) -> ParseError {
    ParseError::InvalidFieldFormat {
        entry: ordinal,
        field,
        value: value.describe(),
    }
}

fn year_number(ordinal: usize, value: &MetaValue) -> Result<i64, ParseError> {
    match value {
        MetaValue::Integer(n) => Ok(*n),
        MetaValue::String(s) => s
            .trim()
            .parse()
            .map_err(|_| invalid_format(ordinal, DateField::Year, value)),
        _ => Err(invalid_format(ordinal, DateField::Year, value)),
    }
}

/// Reads a day such as `17` or `Mon 17`
fn day_number(ordinal: usize, value: &MetaValue) -> Result<i64, ParseError> {
    match value {
        MetaValue::Integer(n) => Ok(*n),
        // A digit run too long for i64 is still a day, just not a real one
        MetaValue::String(s) => first_number(s)
            .map(|digits| digits.parse().unwrap_or(i64::MAX))
            .ok_or_else(|| invalid_format(ordinal, DateField::Day, value)),
        _ => Err(invalid_format(ordinal, DateField::Day, value)),
    }
}

/// Reads a month such as `7`, `July`, `Jul` or `"07"`
fn month_number(ordinal: usize, value: &MetaValue) -> Result<i64, ParseError> {
    match value {
        MetaValue::Integer(n) => Ok(*n),
        MetaValue::String(s) => month_from_name(s)
            .map(i64::from)
            .or_else(|| s.trim().parse().ok())
            .ok_or_else(|| invalid_format(ordinal, DateField::Month, value)),
        _ => Err(invalid_format(ordinal, DateField::Month, value)),
    }
}
