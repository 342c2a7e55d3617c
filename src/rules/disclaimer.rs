//! MGD002 `beta-disclaimer`: beta reference topics carry exactly one beta
//! disclaimer include, v1.0 reference topics carry none, and no topic
//! repeats it.

use lazy_static::lazy_static;
use regex::Regex;

use crate::document::Document;
use crate::markdown::part::{Include, Part};
use crate::rules::{line_length, Location, Problem, Rule};

lazy_static! {
    static ref BETA_PATH_RE: Regex = Regex::new(r"[/\\]api-reference[/\\]beta[/\\]").unwrap();
    static ref V1_PATH_RE: Regex = Regex::new(r"[/\\]api-reference[/\\]v1\.0[/\\]").unwrap();
}

pub struct BetaDisclaimer;

impl Rule for BetaDisclaimer {
    fn id(&self) -> &'static str {
        "MGD002"
    }

    fn alias(&self) -> &'static str {
        "beta-disclaimer"
    }

    fn validate(&self, document: &Document) -> Vec<Problem> {
        let Some(markdown) = document.as_markdown() else {
            return Vec::new();
        };

        let disclaimers: Vec<&Include> = markdown
            .parts
            .iter()
            .filter_map(|part| match part {
                Part::Include(include) if include.target.ends_with("beta-disclaimer.md") => {
                    Some(include)
                }
                _ => None,
            })
            .collect();

        let path = markdown.file_path.to_string_lossy().replace('\\', "/");
        let at_include = |include: &Include, description: &str| {
            Problem::at(
                self.id(),
                description,
                Location {
                    line: include.line,
                    column: 0,
                    length: line_length(markdown, include.line),
                },
            )
        };

        if BETA_PATH_RE.is_match(&path) {
            if disclaimers.is_empty() {
                return vec![Problem::new(self.id(), "Missing required beta disclaimer")];
            }
            disclaimers[1..]
                .iter()
                .map(|&d| at_include(d, "Beta disclaimer appears more than once"))
                .collect()
        } else if V1_PATH_RE.is_match(&path) {
            disclaimers
                .iter()
                .map(|&d| {
                    at_include(d, "Beta disclaimer should not be included in non-beta topics")
                })
                .collect()
        } else if disclaimers.len() > 1 {
            disclaimers[1..]
                .iter()
                .map(|&d| at_include(d, "Beta disclaimer appears more than once"))
                .collect()
        } else {
            Vec::new()
        }
    }
}
