//! Post assembly
//!
//! Turns parsed journal entries into posts: each gets a title such as
//! `Vienna - Day 2 - Tue, 18 Jul` and a Jekyll file name such as
//! `2017-07-18-vienna.md`.

use chrono::NaiveDate;

use super::meta::EntryMeta;
use super::parser::ParsedEntry;

/// Name used when a journal has no more specific one
pub const DEFAULT_NAME: &str = "Journal";

/// Options controlling titles and file names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostOptions {
    /// Journal name, used in titles and file names
    pub name: String,

    /// Append the entry date to each title
    pub include_date: bool,
}

impl Default for PostOptions {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            include_date: true,
        }
    }
}

/// A post ready to be written
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    /// 1-based position within the journal
    pub index: usize,

    /// Number of posts built from the same journal
    pub total: usize,

    pub title: String,
    pub date: NaiveDate,
    pub file_name: String,

    /// Header fields, ending with `date` and `title`
    pub meta: EntryMeta,

    pub content: String,
}

/// Builds a post title
///
/// The generic name `Journal` is left out of titles.
pub fn post_title(name: &str, day_number: usize, date: NaiveDate, include_date: bool) -> String {
    let mut title = String::new();

    if !name.eq_ignore_ascii_case(DEFAULT_NAME) {
        title.push_str(name);
        title.push_str(" - ");
    }

    title.push_str(&format!("Day {}", day_number));

    if include_date {
        title.push_str(&format!(" - {}", date.format("%a, %-d %b")));
    }

    title
}

/// Builds a post file name: `YYYY-MM-DD-name.md`
pub fn post_file_name(date: NaiveDate, name: &str) -> String {
    format!("{}-{}.md", date.format("%Y-%m-%d"), name.to_lowercase())
}

/// Turns parsed entries into titled posts
pub fn assemble(entries: Vec<ParsedEntry>, options: &PostOptions) -> Vec<Post> {
    let total = entries.len();

    entries
        .into_iter()
        .enumerate()
        .map(|(idx, entry)| {
            let index = idx + 1;
            let title = post_title(&options.name, index, entry.date, options.include_date);

            let mut meta = entry.meta;
            meta.insert("title", title.clone());

            Post {
                index,
                total,
                title,
                date: entry.date,
                file_name: post_file_name(entry.date, &options.name),
                meta,
                content: entry.content,
            }
        })
        .collect()
}
