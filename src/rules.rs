//! The validation rule set.
//!
//! Rules are pure and stateless: they read a fully-built document model and
//! report findings without mutating anything. The registry order is stable;
//! findings for a document are concatenated in registration order.

pub mod disclaimer;
pub mod domains;
pub mod header;
pub mod ordering;
pub mod tabs;
pub mod urls;

use serde::Serialize;

use crate::document::Document;
use crate::markdown::part::{Heading, Part, TabbedSection};
use crate::markdown::MarkdownDocument;
use crate::utils::char_len;

/// Where a finding sits in the source: 1-based line, 0-based character
/// column, character length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    pub line: usize,
    pub column: usize,
    pub length: usize,
}

/// One finding reported by a rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Problem {
    pub id: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

impl Problem {
    pub fn new(id: &str, description: impl Into<String>) -> Self {
        Self {
            id: id.to_string(),
            description: description.into(),
            location: None,
        }
    }

    pub fn at(id: &str, description: impl Into<String>, location: Location) -> Self {
        Self {
            id: id.to_string(),
            description: description.into(),
            location: Some(location),
        }
    }
}

/// A single validation rule.
pub trait Rule: Send + Sync {
    /// Stable identifier, `MGD001` through `MGD010`.
    fn id(&self) -> &'static str;
    /// Human-friendly alias, usable wherever the id is.
    fn alias(&self) -> &'static str;
    /// File extensions this rule applies to.
    fn file_types(&self) -> &'static [&'static str] {
        &[".md"]
    }
    fn validate(&self, document: &Document) -> Vec<Problem>;
}

/// The full registry in registration order.
pub fn all_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(header::YamlHeaderPresent),
        Box::new(disclaimer::BetaDisclaimer),
        Box::new(ordering::PropertiesAlphabetical),
        Box::new(ordering::MethodsInOrder),
        Box::new(urls::CorrectVersionInUrl),
        Box::new(urls::RelativeUrlHttpRequest),
        Box::new(tabs::SnippetTabsAlphabetical),
        Box::new(tabs::LanguageTabsCorrect),
        Box::new(tabs::TabsConsistent),
        Box::new(domains::NoOnmicrosoftDomains),
    ]
}

/// Character length of a 1-based source line, for findings that span the
/// whole line.
pub(crate) fn line_length(doc: &MarkdownDocument, line: usize) -> usize {
    doc.lines.get(line - 1).map_or(0, |l| char_len(l))
}

/// First heading whose title matches one of the given exact titles.
pub(crate) fn find_heading<'a>(
    doc: &'a MarkdownDocument,
    titles: &[&str],
) -> Option<&'a Heading> {
    doc.parts
        .iter()
        .find_map(|part| part.as_heading().filter(|h| titles.contains(&h.title.as_str())))
}

/// First heading of the same level after the given one, the section's
/// natural stopping point.
pub(crate) fn next_peer_heading<'a>(
    doc: &'a MarkdownDocument,
    heading: &Heading,
) -> Option<&'a Heading> {
    doc.parts.iter().find_map(|part| {
        part.as_heading()
            .filter(|h| h.level == heading.level && h.line > heading.line)
    })
}

/// All tabbed sections in the document, in order.
pub(crate) fn tabbed_sections(doc: &MarkdownDocument) -> Vec<&TabbedSection> {
    doc.parts
        .iter()
        .filter_map(Part::as_tabbed_section)
        .collect()
}
