//! Markdown output for posts
//!
//! Each post is written as `{output}/{YYYY-MM-DD}-{name}.md` with a YAML
//! front matter header, ready for a Jekyll `_posts` folder.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::domain::Post;
use crate::version::VERSION;

/// Writes posts into an output directory
pub struct PostWriter {
    /// Directory receiving post files
    dir: PathBuf,
}

impl PostWriter {
    /// Creates a writer for the given directory
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the output directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the path a post will be written to
    pub fn post_path(&self, post: &Post) -> PathBuf {
        self.dir.join(&post.file_name)
    }

    /// Writes a post atomically (unique temp file + rename)
    ///
    /// Each call stages into its own temp file; the last rename wins.
    /// `generated_at` is stamped into the header comment.
    pub fn write(&self, post: &Post, generated_at: &str) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create directory: {}", self.dir.display()))?;

        let path = self.post_path(post);
        let content = render_post(post, generated_at)?;

        let mut temp = tempfile::Builder::new()
            .prefix(&format!(".{}.", post.file_name))
            .suffix(".tmp")
            .tempfile_in(&self.dir)
            .with_context(|| format!("Failed to create temp file in {}", self.dir.display()))?;

        temp.write_all(content.as_bytes())
            .with_context(|| format!("Failed to write temp file: {}", temp.path().display()))?;

        temp.persist(&path)
            .map_err(|e| e.error)
            .with_context(|| format!("Failed to move post into place: {}", path.display()))?;

        Ok(path)
    }
}

/// Renders a post as markdown with YAML front matter
pub fn render_post(post: &Post, generated_at: &str) -> Result<String> {
    let yaml = serde_yaml::to_string(&post.meta).context("Failed to serialize front matter")?;

    let mut content = String::new();
    content.push_str("---\n");
    content.push_str(&format!(
        "# Journal.TXT entry {}/{} - auto-built on {} by journaltxt/{}\n",
        post.index, post.total, generated_at, VERSION
    ));
    content.push_str(&yaml);
    content.push_str("---\n\n");
    content.push_str(&post.content);

    Ok(content)
}
