//! Typed Markdown constructs produced by the structural parser.
//!
//! Every part carries the 1-based source line where it starts. Multi-line
//! parts also record how many source lines they consumed, so the ordered
//! part sequence tiles the parsed line range (blank lines between parts
//! belong to no part).

use serde::{Deserialize, Serialize};

/// One recognized Markdown construct.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Part {
    Heading(Heading),
    TabbedSection(TabbedSection),
    Table(Table),
    CodeBlock(CodeBlock),
    HtmlComment(HtmlComment),
    Paragraph(Paragraph),
    Include(Include),
    Namespace(Namespace),
}

impl Part {
    /// 1-based source line where this part starts.
    pub fn line(&self) -> usize {
        match self {
            Part::Heading(p) => p.line,
            Part::TabbedSection(p) => p.line,
            Part::Table(p) => p.line,
            Part::CodeBlock(p) => p.line,
            Part::HtmlComment(p) => p.line,
            Part::Paragraph(p) => p.line,
            Part::Include(p) => p.line,
            Part::Namespace(p) => p.line,
        }
    }

    /// Number of source lines this part consumed.
    pub fn line_count(&self) -> usize {
        match self {
            Part::Heading(_) | Part::Include(_) | Part::Namespace(_) => 1,
            Part::TabbedSection(p) => p.line_count,
            Part::Table(p) => p.line_count,
            Part::CodeBlock(p) => p.lines.len(),
            Part::HtmlComment(p) => p.lines.len(),
            Part::Paragraph(p) => p.lines.len(),
        }
    }

    pub fn as_heading(&self) -> Option<&Heading> {
        match self {
            Part::Heading(h) => Some(h),
            _ => None,
        }
    }

    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Part::Table(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_code_block(&self) -> Option<&CodeBlock> {
        match self {
            Part::CodeBlock(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_tabbed_section(&self) -> Option<&TabbedSection> {
        match self {
            Part::TabbedSection(t) => Some(t),
            _ => None,
        }
    }
}

/// An ATX heading. The title never starts with `[`; heading-with-link lines
/// open tabbed sections instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heading {
    pub level: usize,
    pub title: String,
    pub line: usize,
}

/// A pipe-delimited table with a `|---|` divider row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub line: usize,
    pub line_count: usize,
}

/// A triple-backtick fenced code block, fences included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeBlock {
    pub language: Option<String>,
    pub lines: Vec<String>,
    pub line: usize,
}

/// An HTML comment, possibly carrying a JSON metadata payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HtmlComment {
    pub lines: Vec<String>,
    pub metadata: Option<BlockMetadata>,
    pub trailing_text: Option<String>,
    pub line: usize,
}

/// Structured metadata carried by request/response/resource comments.
///
/// A comment payload only qualifies as metadata when it is a JSON object
/// with a string `blockType`; anything else stays a plain comment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockMetadata {
    #[serde(rename = "blockType")]
    pub block_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub truncated: Option<bool>,
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(rename = "keyProperty", skip_serializing_if = "Option::is_none")]
    pub key_property: Option<String>,
    #[serde(rename = "openType", skip_serializing_if = "Option::is_none")]
    pub open_type: Option<bool>,
    /// A string or an array of strings in the wild.
    #[serde(rename = "sampleKeys", skip_serializing_if = "Option::is_none")]
    pub sample_keys: Option<serde_json::Value>,
}

/// One tab descriptor inside a tabbed section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tab {
    pub title: String,
    pub anchor: String,
    pub line: usize,
}

/// A chain of `# [Title](#anchor)` tab headings terminated by a `---` line.
///
/// The interior parts of all tabs are parsed recursively and concatenated
/// here; they are nested content, not siblings of this part.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TabbedSection {
    pub tabs: Vec<Tab>,
    pub parts: Vec<Part>,
    pub line: usize,
    pub line_count: usize,
}

/// Plain text lines that matched no other construct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Paragraph {
    pub lines: Vec<String>,
    pub line: usize,
}

/// A `[!INCLUDE [label](path)]` directive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Include {
    pub label: String,
    pub target: String,
    pub line: usize,
}

/// A `Namespace: microsoft.graph...` declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Namespace {
    pub namespace: String,
    pub line: usize,
}
