//! # Storage Layer
//!
//! Filesystem access for journaltxt: reading journals, writing posts and
//! loading configuration.
//!
//! ## Formats
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Journal | Journal.TXT (`---` blocks, YAML headers) | any `.txt` file |
//! | Posts | Markdown + YAML front matter | `{output}/YYYY-MM-DD-{name}.md` |
//! | Config | TOML | `~/.config/journaltxt/config.toml` |
//!
//! ## Concurrency Safety
//!
//! Posts are staged in a uniquely named temp file and renamed into place.
//! Two builds writing the same post each finish with a complete file and the
//! later rename wins. Builds of different journals into one directory should
//! still use distinct names.

mod config;
mod posts;
mod source;

pub use config::{BuildConfig, Config, ConfigError, OutputFormat};
pub use posts::{render_post, PostWriter};
pub use source::{journal_name, read_journal};
