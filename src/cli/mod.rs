//! # Command-Line Interface
//!
//! `journaltxt` (also installed as `jo`) turns one or more Journal.TXT files
//! into Jekyll posts:
//!
//! ```bash
//! journaltxt -o _posts Vienna.txt
//! jo --no-date --name Berlin trip.txt
//! ```
//!
//! ## Output Formats
//!
//! - `text` (default) - one progress line per written post
//! - `json` - a single JSON document listing written posts
//!
//! ## Verbose Mode
//!
//! Use `--verbose` (or `-v`) for debug output on stderr.
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the build.

mod app;
mod build;
mod output;

pub use app::{execute, run, Cli};
pub use build::{build_file, build_text, BuildSettings, WrittenPost};
pub use output::Output;
