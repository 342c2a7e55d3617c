//! The parsed Markdown document model.
//!
//! A `MarkdownDocument` is fully parsed at construction: front matter is
//! classified, the body is run through the structural parser, parts are
//! grouped into heading-delimited sections, and resource topics get their
//! key elements located. Rules only ever read the finished model.

pub mod part;
pub mod parser;

use std::path::{Path, PathBuf};

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::document::split_lines;
use crate::error::ValidationError;
use crate::rules::Problem;

use part::Part;

lazy_static! {
    static ref RESOURCE_TITLE_RE: Regex = Regex::new(r"(\S+)\s+resource\s+type").unwrap();
}

/// Editorial topic classification, derived from front matter `doc_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TopicType {
    Api,
    Concept,
    Resource,
    Unknown,
}

/// The YAML front matter fields the validator cares about. Unknown fields
/// are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub description: Option<String>,
    pub author: Option<String>,
    pub doc_type: Option<String>,
}

/// A heading-delimited span of the part sequence. Indices are inclusive.
/// Content before the first heading gets an empty title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocSection {
    pub title: String,
    pub start_index: usize,
    pub end_index: usize,
}

/// Part-sequence indices of the structural elements a resource topic is
/// expected to carry. Any of them may be absent; rules skip silently.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResourceElements {
    pub resource_name: Option<String>,
    pub methods_table_index: Option<usize>,
    pub properties_table_index: Option<usize>,
    pub relationships_table_index: Option<usize>,
    pub json_representation_index: Option<usize>,
}

/// A Markdown file parsed into the structural model the rules consume.
#[derive(Debug, Clone, Serialize)]
pub struct MarkdownDocument {
    pub file_path: PathBuf,
    pub content: String,
    pub lines: Vec<String>,
    pub topic_type: TopicType,
    pub front_matter: Option<FrontMatter>,
    pub parts: Vec<Part>,
    pub sections: Vec<DocSection>,
    pub resource_elements: Option<ResourceElements>,
    pub problems: Vec<Problem>,
}

impl MarkdownDocument {
    /// Parses in-memory content, for callers that hold the text already
    /// (editor buffers, tests).
    pub fn from_content(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        let content = content.into();
        let lines = split_lines(&content);

        let mut doc = Self {
            file_path: path.into(),
            content,
            lines,
            topic_type: TopicType::Unknown,
            front_matter: None,
            parts: Vec::new(),
            sections: Vec::new(),
            resource_elements: None,
            problems: Vec::new(),
        };

        let body_start = doc.parse_front_matter();
        doc.parse_body(body_start);
        doc
    }

    /// Reads and parses a Markdown file.
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

    /// Recognizes a `---`-delimited YAML header at line 0 and classifies
    /// the topic from its `doc_type`. Returns the 0-based line index where
    /// structural parsing starts. Malformed YAML is treated as no header.
    fn parse_front_matter(&mut self) -> usize {
        let Some(first) = self.lines.first() else {
            return 0;
        };
        if first.trim_end() != "---" {
            return 0;
        }

        let Some(close_offset) = self.lines[1..]
            .iter()
            .position(|line| line.trim_end() == "---")
        else {
            return 0;
        };
        let close_index = close_offset + 1;

        let yaml = self.lines[1..close_index].join("\n");
        self.front_matter = serde_yaml::from_str::<FrontMatter>(&yaml).ok();

        let doc_type = self
            .front_matter
            .as_ref()
            .and_then(|fm| fm.doc_type.as_deref())
            .map(str::to_lowercase);
        self.topic_type = match doc_type.as_deref() {
            Some("apipagetype") => TopicType::Api,
            Some("conceptualpagetype") => TopicType::Concept,
            Some("resourcepagetype") => TopicType::Resource,
            _ => TopicType::Unknown,
        };

        close_index + 1
    }

    fn parse_body(&mut self, start_index: usize) {
        self.parts = parser::parse_parts(
            &self.lines,
            start_index,
            self.lines.len().saturating_sub(1),
        );
        self.sections = build_sections(&self.parts);

        if self.topic_type == TopicType::Resource {
            self.resource_elements = Some(self.analyze_resource_elements());
        }
    }

    fn analyze_resource_elements(&self) -> ResourceElements {
        let mut elements = ResourceElements::default();

        let title = self
            .parts
            .iter()
            .find_map(|part| part.as_heading().filter(|h| h.level == 1));
        if let Some(heading) = title {
            if let Some(caps) = RESOURCE_TITLE_RE.captures(&heading.title) {
                elements.resource_name = Some(caps[1].to_string());
            }
        }

        elements.methods_table_index = self.find_section_table("methods", "method");
        elements.properties_table_index = self.find_section_table("properties", "property");
        elements.relationships_table_index =
            self.find_section_table("relationships", "relationship");
        elements.json_representation_index = self.find_section_code_block("json representation");

        elements
    }

    /// Finds a section by case-insensitive exact title.
    pub fn find_section(&self, title: &str) -> Option<&DocSection> {
        self.sections
            .iter()
            .find(|section| section.title.to_lowercase() == title)
    }

    /// Index of the first table in the named section whose first header
    /// matches the expected label, case-insensitively.
    fn find_section_table(&self, section_title: &str, first_header: &str) -> Option<usize> {
        let section = self.find_section(section_title)?;
        (section.start_index + 1..=section.end_index).find(|&i| {
            self.parts[i]
                .as_table()
                .and_then(|table| table.headers.first())
                .is_some_and(|header| header.to_lowercase() == first_header)
        })
    }

    /// Index of the first `json`-tagged code block in the named section.
    fn find_section_code_block(&self, section_title: &str) -> Option<usize> {
        let section = self.find_section(section_title)?;
        (section.start_index + 1..=section.end_index).find(|&i| {
            self.parts[i]
                .as_code_block()
                .and_then(|block| block.language.as_deref())
                .is_some_and(|language| language.to_lowercase() == "json")
        })
    }
}

/// Groups the flat part sequence into heading-delimited sections. A new
/// section opens at every heading; parts before the first heading form an
/// initial section with an empty title.
fn build_sections(parts: &[Part]) -> Vec<DocSection> {
    let mut sections = Vec::new();
    let mut current = DocSection {
        title: String::new(),
        start_index: 0,
        end_index: 0,
    };
    let mut current_open = false;

    for (index, part) in parts.iter().enumerate() {
        if let Some(heading) = part.as_heading() {
            if current_open {
                current.end_index = index - 1;
                sections.push(current.clone());
            }
            current = DocSection {
                title: heading.title.clone(),
                start_index: index,
                end_index: index,
            };
            current_open = true;
        } else if !current_open {
            // Pre-heading content opens an untitled section
            current.start_index = index;
            current_open = true;
        }
    }

    if current_open {
        current.end_index = parts.len() - 1;
        sections.push(current);
    }

    sections
}
