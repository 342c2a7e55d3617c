//! Documents under validation.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::ValidationError;
use crate::markdown::MarkdownDocument;
use crate::rules::Problem;

/// Splits content on `\n` or `\r\n` line endings.
pub fn split_lines(content: &str) -> Vec<String> {
    content
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect()
}

/// A file under validation. Markdown files get the full structural model;
/// everything else is kept as raw lines.
#[derive(Debug, Clone, Serialize)]
pub enum Document {
    Plain(PlainDocument),
    Markdown(MarkdownDocument),
}

/// A non-Markdown file: raw content and lines only.
#[derive(Debug, Clone, Serialize)]
pub struct PlainDocument {
    pub file_path: PathBuf,
    pub content: String,
    pub lines: Vec<String>,
    pub problems: Vec<Problem>,
}

impl PlainDocument {
    pub fn from_content(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        let content = content.into();
        let lines = split_lines(&content);
        Self {
            file_path: path.into(),
            content,
            lines,
            problems: Vec::new(),
        }
    }

    pub async fn load(path: &Path) -> Result<Self, ValidationError> {
        let content =
            tokio::fs::read_to_string(path)
                .await
                .map_err(|source| ValidationError::Io {
                    path: path.to_path_buf(),
                    source,
                })?;
        Ok(Self::from_content(path, content))
    }
}

impl Document {
    pub fn file_path(&self) -> &Path {
        match self {
            Document::Plain(d) => &d.file_path,
            Document::Markdown(d) => &d.file_path,
        }
    }

    pub fn content(&self) -> &str {
        match self {
            Document::Plain(d) => &d.content,
            Document::Markdown(d) => &d.content,
        }
    }

    pub fn lines(&self) -> &[String] {
        match self {
            Document::Plain(d) => &d.lines,
            Document::Markdown(d) => &d.lines,
        }
    }

    pub fn problems(&self) -> &[Problem] {
        match self {
            Document::Plain(d) => &d.problems,
            Document::Markdown(d) => &d.problems,
        }
    }

    pub fn as_markdown(&self) -> Option<&MarkdownDocument> {
        match self {
            Document::Markdown(d) => Some(d),
            _ => None,
        }
    }

    /// Attaches the accumulated findings after all rules have run.
    pub fn attach_problems(&mut self, problems: Vec<Problem>) {
        match self {
            Document::Plain(d) => d.problems = problems,
            Document::Markdown(d) => d.problems = problems,
        }
    }
}
