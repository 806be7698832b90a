//! Domain models for Journal.TXT
//!
//! Contains the parser and post assembly without any I/O concerns.

mod date;
mod error;
mod meta;
mod parser;
mod post;

pub use date::{calendar_date, first_number, month_from_name, DateField};
pub use error::{ParseError, ParseErrorKind};
pub use meta::{EntryMeta, MetaValue};
pub use parser::{parse, resolve_entry, split_entries, ParsedEntry, RawEntry};
pub use post::{assemble, post_file_name, post_title, Post, PostOptions, DEFAULT_NAME};
