//! journaltxt - Build Jekyll blog posts from Journal.TXT journals
//!
//! Journal.TXT keeps a whole journal in one plain-text file: short YAML
//! headers naming the day, separated from the entry text by `---` lines.
//! This crate parses such a file into dated entries and writes one markdown
//! post per entry.
//!
//! ```
//! let entries = journaltxt::parse("---\nyear: 2017\nmonth: July\nday: Mon 17\n---\nHello.\n")?;
//! assert_eq!(entries[0].date.to_string(), "2017-07-17");
//! assert_eq!(entries[0].content, "Hello.\n");
//! # Ok::<(), journaltxt::ParseError>(())
//! ```

pub mod domain;
pub mod storage;
pub mod cli;
pub mod version;

pub use domain::{parse, EntryMeta, MetaValue, ParseError, ParseErrorKind, ParsedEntry};
