//! Alphabetical and CRUD ordering rules for resource topics.
//!
//! MGD003 `properties-alphabetical`: properties and relationships tables,
//! and the JSON representation, list entries in alphabetical order. A row
//! that is not strictly greater than its predecessor is flagged, so
//! duplicates count as violations too.
//!
//! MGD004 `methods-in-order`: the methods table lists CRUD operations as
//! List, Create, Get, Update, Delete, with non-CRUD methods after them.

use lazy_static::lazy_static;
use regex::Regex;

use crate::document::Document;
use crate::markdown::part::{CodeBlock, Table};
use crate::markdown::{MarkdownDocument, TopicType};
use crate::rules::{line_length, Location, Problem, Rule};
use crate::utils::{char_column, char_len, locale_cmp, pluralize};

lazy_static! {
    static ref JSON_PROPERTY_RE: Regex =
        Regex::new(r#"^(\s+)"([^"]+)"\s*:\s*"?([^",\n]+)"?,?$"#).unwrap();
    static ref METHOD_NAME_RE: Regex = Regex::new(r"^\[([^\]]+)\]").unwrap();
}

pub struct PropertiesAlphabetical;

struct OrderFinding {
    value: String,
    line: usize,
    column: usize,
}

impl Rule for PropertiesAlphabetical {
    fn id(&self) -> &'static str {
        "MGD003"
    }

    fn alias(&self) -> &'static str {
        "properties-alphabetical"
    }

    fn validate(&self, document: &Document) -> Vec<Problem> {
        let Some(markdown) = document.as_markdown() else {
            return Vec::new();
        };
        if markdown.topic_type != TopicType::Resource {
            return Vec::new();
        }
        let Some(elements) = markdown.resource_elements.as_ref() else {
            return Vec::new();
        };

        let mut problems = Vec::new();

        if let Some(table) = elements
            .properties_table_index
            .and_then(|i| markdown.parts[i].as_table())
        {
            for finding in rows_out_of_order(table, &markdown.lines) {
                problems.push(self.order_problem(
                    format!(
                        "Properties table row '{}' is out of alphabetical order",
                        finding.value
                    ),
                    &finding,
                ));
            }
        }

        if let Some(table) = elements
            .relationships_table_index
            .and_then(|i| markdown.parts[i].as_table())
        {
            for finding in rows_out_of_order(table, &markdown.lines) {
                problems.push(self.order_problem(
                    format!(
                        "Relationships table row '{}' is out of alphabetical order",
                        finding.value
                    ),
                    &finding,
                ));
            }
        }

        if let Some(block) = elements
            .json_representation_index
            .and_then(|i| markdown.parts[i].as_code_block())
        {
            for finding in json_properties_out_of_order(block) {
                problems.push(self.order_problem(
                    format!(
                        "Property in JSON representation '{}' is out of alphabetical order",
                        finding.value
                    ),
                    &finding,
                ));
            }
        }

        problems
    }
}

impl PropertiesAlphabetical {
    fn order_problem(&self, description: String, finding: &OrderFinding) -> Problem {
        Problem::at(
            self.id(),
            description,
            Location {
                line: finding.line,
                column: finding.column,
                length: char_len(&finding.value),
            },
        )
    }
}

fn rows_out_of_order(table: &Table, lines: &[String]) -> Vec<OrderFinding> {
    let mut findings = Vec::new();

    for (index, row) in table.rows.iter().enumerate().skip(1) {
        // A bare `|` line parses as a row with no cells
        let value = row.first().map(String::as_str).unwrap_or("");
        let previous = table.rows[index - 1]
            .first()
            .map(String::as_str)
            .unwrap_or("");
        if locale_cmp(value, previous) != std::cmp::Ordering::Greater {
            // Row `index` sits two lines past the header (divider between)
            let line = table.line + 2 + index;
            let column = lines
                .get(table.line + 1 + index)
                .and_then(|l| l.find(value).map(|offset| char_column(l, offset)))
                .unwrap_or(0);
            findings.push(OrderFinding {
                value: value.to_string(),
                line,
                column,
            });
        }
    }

    findings
}

/// Scans a JSON code block for top-level keys out of order. Indentation of
/// the first key fixes the nesting level under inspection; the previous-key
/// register still advances on nested keys, matching how the documentation
/// tooling has always behaved.
fn json_properties_out_of_order(block: &CodeBlock) -> Vec<OrderFinding> {
    let mut findings = Vec::new();

    if !block
        .language
        .as_deref()
        .is_some_and(|l| l.to_lowercase() == "json")
    {
        return findings;
    }

    let mut previous = String::new();
    let mut indent_size = 0;
    for (index, line) in block.lines.iter().enumerate() {
        let Some(caps) = JSON_PROPERTY_RE.captures(line) else {
            continue;
        };
        let indent = caps[1].len();
        let key = caps[2].to_string();
        if indent_size == 0 {
            indent_size = indent;
        }

        if indent == indent_size && locale_cmp(&key, &previous) != std::cmp::Ordering::Greater {
            let offset = caps.get(2).unwrap().start();
            findings.push(OrderFinding {
                value: key.clone(),
                line: block.line + index,
                column: char_column(line, offset),
            });
        }
        previous = key;
    }

    findings
}

pub struct MethodsInOrder;

// Canonical CRUD order; any non-CRUD method must come after all of them.
const LIST: usize = 0;
const CREATE: usize = 1;
const GET: usize = 2;
const UPDATE: usize = 3;
const DELETE: usize = 4;
const FIRST_NON_CRUD: usize = 5;

impl Rule for MethodsInOrder {
    fn id(&self) -> &'static str {
        "MGD004"
    }

    fn alias(&self) -> &'static str {
        "methods-in-order"
    }

    fn validate(&self, document: &Document) -> Vec<Problem> {
        let Some(markdown) = document.as_markdown() else {
            return Vec::new();
        };
        if markdown.topic_type != TopicType::Resource {
            return Vec::new();
        }
        let Some(table) = markdown
            .resource_elements
            .as_ref()
            .and_then(|e| e.methods_table_index)
            .and_then(|i| markdown.parts[i].as_table())
        else {
            return Vec::new();
        };

        let resource_name = markdown
            .resource_elements
            .as_ref()
            .and_then(|e| e.resource_name.as_deref())
            .map(str::to_lowercase);

        let slots = assign_method_slots(table, resource_name.as_deref());

        let mut problems = Vec::new();
        for (slot, &row_index) in slots.iter().enumerate() {
            let Some(row_index) = row_index else {
                continue;
            };
            // A slot is misplaced when any later slot's row precedes it
            let misplaced = slots[slot..]
                .iter()
                .any(|&later| later.is_some_and(|later| row_index > later));
            if misplaced {
                let method_name = table.rows[row_index]
                    .first()
                    .and_then(|cell| method_name(cell))
                    .unwrap_or_default();
                problems.push(self.order_problem(markdown, table, row_index, &method_name));
            }
        }

        problems
    }
}

impl MethodsInOrder {
    fn order_problem(
        &self,
        markdown: &MarkdownDocument,
        table: &Table,
        row_index: usize,
        method_name: &str,
    ) -> Problem {
        let line = table.line + 2 + row_index;
        Problem::at(
            self.id(),
            format!(
                "Methods table row \"{method_name}\" is not in the required order for CRUD operations"
            ),
            Location {
                line,
                column: 0,
                length: line_length(markdown, line),
            },
        )
    }
}

/// Maps each canonical slot to the table row holding that operation.
/// Labels match either the bare operation name or the resource-qualified
/// form; `list` takes the pluralized resource name.
fn assign_method_slots(table: &Table, resource_name: Option<&str>) -> [Option<usize>; 6] {
    let qualified = |verb: &str| resource_name.map(|name| format!("{verb} {name}"));
    let list_label = resource_name.map(|name| format!("list {}", pluralize(name)));

    let mut slots: [Option<usize>; 6] = [None; 6];
    for (index, row) in table.rows.iter().enumerate() {
        // Cell-less rows (a bare `|` line) count as non-CRUD entries
        let Some(name) = row.first().and_then(|cell| method_name(cell)) else {
            if slots[FIRST_NON_CRUD].is_none() {
                slots[FIRST_NON_CRUD] = Some(index);
            }
            continue;
        };
        let name = name.trim().to_lowercase();

        if name == "list" || list_label.as_deref() == Some(name.as_str()) {
            slots[LIST] = Some(index);
        } else if name == "create" || qualified("create").as_deref() == Some(name.as_str()) {
            slots[CREATE] = Some(index);
        } else if name == "get" || qualified("get").as_deref() == Some(name.as_str()) {
            slots[GET] = Some(index);
        } else if name == "update" || qualified("update").as_deref() == Some(name.as_str()) {
            slots[UPDATE] = Some(index);
        } else if name == "delete" || qualified("delete").as_deref() == Some(name.as_str()) {
            slots[DELETE] = Some(index);
        } else if slots[FIRST_NON_CRUD].is_none() {
            slots[FIRST_NON_CRUD] = Some(index);
        }
    }
    slots
}

/// Extracts the link text from a `[Name](target.md)` method cell.
fn method_name(cell: &str) -> Option<String> {
    METHOD_NAME_RE
        .captures(cell)
        .map(|caps| caps[1].to_string())
}
