//! API URL rules.
//!
//! MGD005 `correct-version-in-url`: example requests in versioned reference
//! folders must target the endpoint version the folder implies.
//!
//! MGD006 `relative-url-http-request`: request lines in the `HTTP request`
//! section stay relative, with no version segment or host prefix.

use lazy_static::lazy_static;
use regex::Regex;

use crate::document::Document;
use crate::markdown::part::{CodeBlock, Part};
use crate::markdown::{MarkdownDocument, TopicType};
use crate::rules::{find_heading, next_peer_heading, Location, Problem, Rule};
use crate::utils::{char_column, char_len};

lazy_static! {
    static ref BETA_PATH_RE: Regex = Regex::new(r"[/\\]api-reference[/\\]beta[/\\]").unwrap();
    static ref V1_PATH_RE: Regex = Regex::new(r"[/\\]api-reference[/\\]v1\.0[/\\]").unwrap();
    static ref VERSION_FROM_FULL_URL: Regex =
        Regex::new(r"https://graph\.microsoft\.com/(?P<version>[^/]*)").unwrap();
    static ref VERSION_FROM_RELATIVE_URL: Regex =
        Regex::new(r"(?:GET|POST|PUT|PATCH|DELETE)\s+/(?P<version>[^/]*)").unwrap();
    static ref URL_FROM_REQUEST_LINE: Regex =
        Regex::new(r"(?:GET|POST|PUT|PATCH|DELETE)\s+(?P<url>\S*)").unwrap();
}

const GRAPH_HOST: &str = "https://graph.microsoft.com";
const BETA_SEGMENT: &str = "/beta";
const V1_SEGMENT: &str = "/v1.0";

pub struct CorrectVersionInUrl;

impl Rule for CorrectVersionInUrl {
    fn id(&self) -> &'static str {
        "MGD005"
    }

    fn alias(&self) -> &'static str {
        "correct-version-in-url"
    }

    fn validate(&self, document: &Document) -> Vec<Problem> {
        let Some(markdown) = document.as_markdown() else {
            return Vec::new();
        };

        let path = markdown.file_path.to_string_lossy().replace('\\', "/");
        let expected = if BETA_PATH_RE.is_match(&path) {
            "beta"
        } else if V1_PATH_RE.is_match(&path) {
            "v1.0"
        } else {
            return Vec::new();
        };

        let mut problems = Vec::new();
        for block in example_code_blocks(markdown) {
            if !matches!(
                block.language.as_deref(),
                None | Some("http") | Some("msgraph-interactive")
            ) {
                continue;
            }
            for (index, line) in block.lines.iter().enumerate() {
                if let Some(problem) = self.check_line(line, block.line + index, expected) {
                    problems.push(problem);
                }
            }
        }
        problems
    }
}

impl CorrectVersionInUrl {
    /// A wrong fully-qualified URL wins the line; otherwise the request
    /// line's relative URL is checked, even when a correct full URL is
    /// present. Only one finding per line.
    fn check_line(&self, line: &str, line_number: usize, expected: &str) -> Option<Problem> {
        if let Some(caps) = VERSION_FROM_FULL_URL.captures(line) {
            let version = caps.name("version").unwrap();
            if version.as_str() != expected {
                return Some(self.version_problem(line, line_number, version));
            }
        }

        let caps = VERSION_FROM_RELATIVE_URL.captures(line)?;
        let version = caps.name("version").unwrap();
        if version.as_str() != expected {
            return Some(self.version_problem(line, line_number, version));
        }
        None
    }

    fn version_problem(
        &self,
        line: &str,
        line_number: usize,
        version: regex::Match<'_>,
    ) -> Problem {
        Problem::at(
            self.id(),
            format!("Incorrect version '{}' in API URL", version.as_str()),
            Location {
                line: line_number,
                column: char_column(line, version.start()),
                length: char_len(version.as_str()),
            },
        )
    }
}

/// Code blocks under the `Examples` (or `Example`) heading, up to the next
/// heading of the same level, including blocks nested in tabbed sections.
fn example_code_blocks(markdown: &MarkdownDocument) -> Vec<&CodeBlock> {
    let Some(heading) = find_heading(markdown, &["Examples", "Example"]) else {
        return Vec::new();
    };
    let end_line = next_peer_heading(markdown, heading).map(|h| h.line);

    let mut blocks = Vec::new();
    for part in &markdown.parts {
        if part.line() <= heading.line || end_line.is_some_and(|end| part.line() >= end) {
            continue;
        }
        match part {
            Part::CodeBlock(block) => blocks.push(block),
            Part::TabbedSection(section) => {
                blocks.extend(section.parts.iter().filter_map(Part::as_code_block));
            }
            _ => {}
        }
    }
    blocks
}

pub struct RelativeUrlHttpRequest;

impl Rule for RelativeUrlHttpRequest {
    fn id(&self) -> &'static str {
        "MGD006"
    }

    fn alias(&self) -> &'static str {
        "relative-url-http-request"
    }

    fn validate(&self, document: &Document) -> Vec<Problem> {
        let Some(markdown) = document.as_markdown() else {
            return Vec::new();
        };
        if markdown.topic_type != TopicType::Api {
            return Vec::new();
        }
        let Some(heading) = find_heading(markdown, &["HTTP request"]) else {
            return Vec::new();
        };
        // Without a peer heading the section runs to the line count; a
        // block starting exactly on the last line falls outside it
        let end_line = next_peer_heading(markdown, heading)
            .map(|h| h.line)
            .unwrap_or(markdown.lines.len());

        let mut problems = Vec::new();
        for part in &markdown.parts {
            let Some(block) = part.as_code_block() else {
                continue;
            };
            if block.line <= heading.line || block.line >= end_line {
                continue;
            }
            if !matches!(block.language.as_deref(), None | Some("http")) {
                continue;
            }

            for (index, line) in block.lines.iter().enumerate() {
                let Some(caps) = URL_FROM_REQUEST_LINE.captures(line) else {
                    continue;
                };
                let url = caps.name("url").unwrap().as_str();

                let bad_prefix = [
                    BETA_SEGMENT.to_string(),
                    V1_SEGMENT.to_string(),
                    format!("{GRAPH_HOST}{BETA_SEGMENT}"),
                    format!("{GRAPH_HOST}{V1_SEGMENT}"),
                ]
                .into_iter()
                .find(|prefix| url.starts_with(prefix.as_str()));

                if let Some(prefix) = bad_prefix {
                    let offset = line.find(&prefix).unwrap_or(0);
                    problems.push(Problem::at(
                        self.id(),
                        "API URLs in HTTP request section should be relative and not contain version",
                        Location {
                            line: block.line + index,
                            column: char_column(line, offset),
                            length: char_len(&prefix),
                        },
                    ));
                }
            }
        }
        problems
    }
}
