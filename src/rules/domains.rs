//! MGD010 `no-onmicrosoft-domains`: example tenant domains must come from
//! the approved fictitious set, never `onmicrosoft.com`.

use lazy_static::lazy_static;
use regex::Regex;

use crate::document::Document;
use crate::rules::{Location, Problem, Rule};
use crate::utils::{char_column, char_len};

lazy_static! {
    static ref DOMAIN_NAME_RE: Regex = Regex::new(r#"[^\s"'/]*onmicrosoft\.com"#).unwrap();
}

pub struct NoOnmicrosoftDomains;

impl Rule for NoOnmicrosoftDomains {
    fn id(&self) -> &'static str {
        "MGD010"
    }

    fn alias(&self) -> &'static str {
        "no-onmicrosoft-domains"
    }

    fn validate(&self, document: &Document) -> Vec<Problem> {
        let Some(markdown) = document.as_markdown() else {
            return Vec::new();
        };

        markdown
            .lines
            .iter()
            .enumerate()
            .filter_map(|(index, line)| {
                // First match per line
                let found = DOMAIN_NAME_RE.find(line)?;
                Some(Problem::at(
                    self.id(),
                    format!(
                        "\"{}\" uses an unapproved \"onmicrosoft.com\" domain name. Please see https://aka.ms/fictitious for guidance on approved fictitious domains.",
                        found.as_str()
                    ),
                    Location {
                        line: index + 1,
                        column: char_column(line, found.start()),
                        length: char_len(found.as_str()),
                    },
                ))
            })
            .collect()
    }
}
