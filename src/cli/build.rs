//! Building posts from journal files

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;
use serde::Serialize;

use super::output::Output;
use crate::domain::{assemble, parse, PostOptions};
use crate::storage::{journal_name, read_journal, PostWriter};

/// Effective build settings after merging flags and configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSettings {
    /// Directory receiving posts
    pub output_dir: PathBuf,

    /// Journal name; derived from each file name when unset
    pub name: Option<String>,

    /// Append the entry date to post titles
    pub include_date: bool,
}

/// Summary of one written post, used for JSON output
#[derive(Debug, Clone, Serialize)]
pub struct WrittenPost {
    pub index: usize,
    pub total: usize,
    pub title: String,
    pub date: String,
    pub path: PathBuf,
}

/// Builds posts from one journal file
pub fn build_file(path: &Path, settings: &BuildSettings, output: &Output) -> Result<Vec<WrittenPost>> {
    let text = read_journal(path)?;
    let name = settings
        .name
        .clone()
        .unwrap_or_else(|| journal_name(path));

    output.verbose_ctx("build", &format!("{} -> name '{}'", path.display(), name));

    build_text(&text, &name, settings, output)
        .with_context(|| format!("Failed to build {}", path.display()))
}

/// Builds posts from journal text
///
/// The whole journal is parsed before anything is written, so a bad entry
/// leaves the output directory untouched.
pub fn build_text(
    text: &str,
    name: &str,
    settings: &BuildSettings,
    output: &Output,
) -> Result<Vec<WrittenPost>> {
    let entries = parse(text)?;
    output.verbose_ctx("parse", &format!("Parsed {} entries", entries.len()));

    let options = PostOptions {
        name: name.to_string(),
        include_date: settings.include_date,
    };
    let posts = assemble(entries, &options);

    let writer = PostWriter::new(&settings.output_dir);
    let generated_at = Local::now().format("%Y-%m-%d %H:%M:%S%.6f").to_string();
    let mut written = Vec::with_capacity(posts.len());

    for post in &posts {
        output.line(&format!(
            "Writing entry {}/{} >{}< to {}...",
            post.index,
            post.total,
            post.title,
            writer.post_path(post).display()
        ));

        let path = writer.write(post, &generated_at)?;

        written.push(WrittenPost {
            index: post.index,
            total: post.total,
            title: post.title.clone(),
            date: post.date.format("%Y-%m-%d").to_string(),
            path,
        });
    }

    Ok(written)
}
