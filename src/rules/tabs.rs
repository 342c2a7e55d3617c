//! Tabbed-section rules.
//!
//! MGD007 `snippet-tabs-alphabetical`: snippet tab groups lead with HTTP,
//! then list the language tabs alphabetically.
//!
//! MGD008 `language-tabs-correct`: language tabs use the canonical title
//! and anchor casing.
//!
//! MGD009 `tabs-consistent`: every tab group in a document repeats the
//! first group's tabs, in order.

use crate::document::Document;
use crate::markdown::part::Tab;
use crate::rules::{find_heading, line_length, tabbed_sections, Location, Problem, Rule};
use crate::utils::locale_cmp;

pub struct SnippetTabsAlphabetical;

impl Rule for SnippetTabsAlphabetical {
    fn id(&self) -> &'static str {
        "MGD007"
    }

    fn alias(&self) -> &'static str {
        "snippet-tabs-alphabetical"
    }

    fn validate(&self, document: &Document) -> Vec<Problem> {
        let Some(markdown) = document.as_markdown() else {
            return Vec::new();
        };
        if markdown.topic_type != crate::markdown::TopicType::Api {
            return Vec::new();
        }
        let Some(heading) = find_heading(markdown, &["Examples", "Example"]) else {
            return Vec::new();
        };

        let full_line = |tab: &Tab| Location {
            line: tab.line,
            column: 0,
            length: line_length(markdown, tab.line),
        };

        let mut problems = Vec::new();
        for section in tabbed_sections(markdown) {
            if section.line <= heading.line {
                continue;
            }
            // Only snippet groups, recognizable by their HTTP tab
            if !section.tabs.iter().any(|tab| tab.title == "HTTP") {
                continue;
            }

            for (index, tab) in section.tabs.iter().enumerate() {
                if index == 0 && tab.title != "HTTP" {
                    problems.push(Problem::at(
                        self.id(),
                        format!(
                            "Tabbed section {} is first in list of tabs, HTTP must be first",
                            tab.title
                        ),
                        full_line(tab),
                    ));
                } else if index > 0 && tab.title == "HTTP" {
                    problems.push(Problem::at(
                        self.id(),
                        "HTTP tab must be first in the list of tabs",
                        full_line(tab),
                    ));
                } else if index > 1
                    && locale_cmp(&tab.title, &section.tabs[index - 1].title)
                        != std::cmp::Ordering::Greater
                {
                    problems.push(Problem::at(
                        self.id(),
                        format!("Tabbed section {} is out of alphabetical order", tab.title),
                        full_line(tab),
                    ));
                }
            }
        }
        problems
    }
}

pub struct LanguageTabsCorrect;

// Canonical tab titles and anchors for language snippets.
const LANGUAGE_TABS: [(&str, &str); 10] = [
    ("HTTP", "tab/http"),
    ("C#", "tab/csharp"),
    ("CLI", "tab/cli"),
    ("Go", "tab/go"),
    ("Java", "tab/java"),
    ("JavaScript", "tab/javascript"),
    ("PHP", "tab/php"),
    ("PowerShell", "tab/powershell"),
    ("Python", "tab/python"),
    ("TypeScript", "tab/typescript"),
];

impl Rule for LanguageTabsCorrect {
    fn id(&self) -> &'static str {
        "MGD008"
    }

    fn alias(&self) -> &'static str {
        "language-tabs-correct"
    }

    fn validate(&self, document: &Document) -> Vec<Problem> {
        let Some(markdown) = document.as_markdown() else {
            return Vec::new();
        };

        let mut problems = Vec::new();
        for section in tabbed_sections(markdown) {
            for tab in &section.tabs {
                let known = LANGUAGE_TABS.iter().find(|(title, anchor)| {
                    title.eq_ignore_ascii_case(&tab.title)
                        || anchor.eq_ignore_ascii_case(&tab.anchor)
                });
                let Some((title, anchor)) = known else {
                    continue;
                };
                if *title != tab.title || *anchor != tab.anchor {
                    problems.push(Problem::at(
                        self.id(),
                        format!(
                            "Correct section anchor for this language is '[{title}](#{anchor})' (case-sensitive)"
                        ),
                        Location {
                            line: tab.line,
                            column: 0,
                            length: line_length(markdown, tab.line),
                        },
                    ));
                }
            }
        }
        problems
    }
}

pub struct TabsConsistent;

impl Rule for TabsConsistent {
    fn id(&self) -> &'static str {
        "MGD009"
    }

    fn alias(&self) -> &'static str {
        "tabs-consistent"
    }

    fn validate(&self, document: &Document) -> Vec<Problem> {
        let Some(markdown) = document.as_markdown() else {
            return Vec::new();
        };
        let sections = tabbed_sections(markdown);
        let Some((reference, rest)) = sections.split_first() else {
            return Vec::new();
        };

        let mut problems = Vec::new();
        for section in rest {
            for (index, tab) in section.tabs.iter().enumerate() {
                let matches_reference = reference
                    .tabs
                    .get(index)
                    .is_some_and(|r| r.title == tab.title && r.anchor == tab.anchor);
                if !matches_reference {
                    problems.push(Problem::at(
                        self.id(),
                        format!(
                            "Tab is not consistent with tabs in first tabbed section that starts at line {}",
                            reference.line
                        ),
                        Location {
                            line: tab.line,
                            column: 0,
                            length: line_length(markdown, tab.line),
                        },
                    ));
                }
            }
        }
        problems
    }
}
