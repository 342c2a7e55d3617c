//! Line-oriented structural parser for the documentation Markdown dialect.
//!
//! This is deliberately not a CommonMark parser. It recognizes only the
//! narrow, regex-anchored constructs the documentation corpus uses, in a
//! single forward pass with fixed precedence. Each recognizer reports how
//! many lines it consumed so the cursor advances exactly that far, and
//! tabbed sections re-enter the same parser over an explicit line-range
//! window.

use lazy_static::lazy_static;
use regex::Regex;

use super::part::{
    BlockMetadata, CodeBlock, Heading, HtmlComment, Include, Namespace, Paragraph, Part, Tab,
    Table, TabbedSection,
};

lazy_static! {
    // Title text must not start with `[`; heading-with-link lines are
    // tabbed-section openers, not headings.
    static ref HEADING_RE: Regex = Regex::new(r"^\s*(#+)\s+([^\[\n\r]+)").unwrap();
    static ref INCLUDE_RE: Regex = Regex::new(r"^\[!INCLUDE\s+\[([^\]\[]*)\]\((.+)\)\]").unwrap();
    static ref NAMESPACE_RE: Regex = Regex::new(r"^Namespace:\s+(microsoft\.graph\.?.*)").unwrap();
    static ref TAB_HEADING_RE: Regex = Regex::new(r"^#+\s+\[([^\[\]]*)\]\(#([^()]*)\)").unwrap();
    static ref TABLE_DIVIDER_RE: Regex = Regex::new(r"^\|\s*[-:]+").unwrap();
    static ref TABLE_CELL_RE: Regex = Regex::new(r"\|([^|\r\n]+)").unwrap();
    static ref SINGLE_LINE_COMMENT_RE: Regex =
        Regex::new(r"^<!--\s*(\{.*\})\s*-->(.*)$").unwrap();
    static ref COMMENT_CLOSE_RE: Regex = Regex::new(r"^(.*)-->(.*)$").unwrap();
    static ref CODE_FENCE_LANG_RE: Regex = Regex::new(r"^\s*```\s*([^`\s]+)$").unwrap();
    static ref CODE_FENCE_RE: Regex = Regex::new(r"^\s*```$").unwrap();
}

/// Parses the inclusive line range `[start_index, end_index]` into an
/// ordered part sequence. Indices are 0-based; reported part lines are
/// 1-based.
pub fn parse_parts(lines: &[String], start_index: usize, end_index: usize) -> Vec<Part> {
    let mut parts: Vec<Part> = Vec::new();
    let mut paragraph = ParagraphBuffer::new();
    let mut index = start_index;

    while index < lines.len() && index <= end_index {
        let current = lines[index].trim_end();

        // Blank lines terminate any in-progress paragraph
        if current.is_empty() {
            paragraph.flush(&mut parts);
            index += 1;
            continue;
        }

        if let Some(heading) = parse_heading(current, index) {
            paragraph.flush(&mut parts);
            parts.push(Part::Heading(heading));
            index += 1;
            continue;
        }

        if let Some(include) = parse_include(current, index) {
            paragraph.flush(&mut parts);
            parts.push(Part::Include(include));
            index += 1;
            continue;
        }

        if let Some(namespace) = parse_namespace(current, index) {
            paragraph.flush(&mut parts);
            parts.push(Part::Namespace(namespace));
            index += 1;
            continue;
        }

        if let Some(section) = parse_tabbed_section(lines, index) {
            paragraph.flush(&mut parts);
            index += section.line_count;
            parts.push(Part::TabbedSection(section));
            continue;
        }

        if let Some(table) = parse_table(lines, index) {
            paragraph.flush(&mut parts);
            index += table.line_count;
            parts.push(Part::Table(table));
            continue;
        }

        if let Some(comment) = parse_html_comment(lines, index) {
            paragraph.flush(&mut parts);
            index += comment.lines.len();
            parts.push(Part::HtmlComment(comment));
            continue;
        }

        if let Some(block) = parse_code_block(lines, index) {
            paragraph.flush(&mut parts);
            index += block.lines.len();
            parts.push(Part::CodeBlock(block));
            continue;
        }

        paragraph.push(current, index);
        index += 1;
    }

    paragraph.flush(&mut parts);
    parts
}

struct ParagraphBuffer {
    lines: Vec<String>,
    line: usize,
}

impl ParagraphBuffer {
    fn new() -> Self {
        Self {
            lines: Vec::new(),
            line: 0,
        }
    }

    fn push(&mut self, line: &str, index: usize) {
        if self.lines.is_empty() {
            self.line = index + 1;
        }
        self.lines.push(line.to_string());
    }

    fn flush(&mut self, parts: &mut Vec<Part>) {
        if !self.lines.is_empty() {
            parts.push(Part::Paragraph(Paragraph {
                lines: std::mem::take(&mut self.lines),
                line: self.line,
            }));
        }
    }
}

fn parse_heading(line: &str, index: usize) -> Option<Heading> {
    let caps = HEADING_RE.captures(line)?;
    Some(Heading {
        level: caps[1].len(),
        title: caps[2].to_string(),
        line: index + 1,
    })
}

fn parse_include(line: &str, index: usize) -> Option<Include> {
    let caps = INCLUDE_RE.captures(line)?;
    Some(Include {
        label: caps[1].to_string(),
        target: caps[2].to_string(),
        line: index + 1,
    })
}

fn parse_namespace(line: &str, index: usize) -> Option<Namespace> {
    let caps = NAMESPACE_RE.captures(line)?;
    Some(Namespace {
        namespace: caps[1].to_string(),
        line: index + 1,
    })
}

/// Parses a `# [Title](#anchor)` chain through its `---` terminator.
///
/// A terminator missing at end of input is still counted as a consumed
/// line, so the cursor lands past the range either way.
fn parse_tabbed_section(lines: &[String], index: usize) -> Option<TabbedSection> {
    let caps = TAB_HEADING_RE.captures(lines[index].trim_end())?;
    let mut tabs = vec![Tab {
        title: caps[1].to_string(),
        anchor: caps[2].to_string(),
        line: index + 1,
    }];

    let mut line_count = 1;
    let mut cursor = index + 1;
    while cursor < lines.len() {
        let current = lines[cursor].trim_end();
        if current.starts_with("---") {
            break;
        }
        if let Some(caps) = TAB_HEADING_RE.captures(current) {
            tabs.push(Tab {
                title: caps[1].to_string(),
                anchor: caps[2].to_string(),
                line: cursor + 1,
            });
        }
        cursor += 1;
        line_count += 1;
    }
    // Closing `---` line
    line_count += 1;

    // Re-parse each tab's span; `cursor` sits on the terminator (or one
    // past the end). The last tab runs to the line before the terminator.
    let mut parts = Vec::new();
    for (i, tab) in tabs.iter().enumerate() {
        let sub_start = tab.line;
        let sub_end = match tabs.get(i + 1) {
            Some(next) => next.line - 2,
            None => cursor.saturating_sub(1),
        };
        parts.extend(parse_parts(lines, sub_start, sub_end));
    }

    Some(TabbedSection {
        tabs,
        parts,
        line: index + 1,
        line_count,
    })
}

fn parse_table(lines: &[String], index: usize) -> Option<Table> {
    if !lines[index].starts_with('|') {
        return None;
    }
    let divider = lines.get(index + 1)?;
    if !TABLE_DIVIDER_RE.is_match(divider) {
        return None;
    }

    let headers = extract_row_values(&lines[index]);
    let mut rows = Vec::new();
    let mut line_count = 2;
    let mut cursor = index + 2;
    while cursor < lines.len() && lines[cursor].starts_with('|') {
        rows.push(extract_row_values(&lines[cursor]));
        cursor += 1;
        line_count += 1;
    }

    Some(Table {
        headers,
        rows,
        line: index + 1,
        line_count,
    })
}

fn extract_row_values(row: &str) -> Vec<String> {
    TABLE_CELL_RE
        .captures_iter(row)
        .map(|caps| caps[1].trim().to_string())
        .collect()
}

/// Parses a `<!-- {json} -->` metadata comment or a multi-line comment.
///
/// A single-line comment without a JSON payload is not recognized here and
/// falls through to paragraph handling.
fn parse_html_comment(lines: &[String], index: usize) -> Option<HtmlComment> {
    let opening = lines[index].trim();
    let mut comment_lines: Vec<String> = Vec::new();
    let mut trailing_text: Option<String> = None;
    let mut json_text = String::new();

    if let Some(caps) = SINGLE_LINE_COMMENT_RE.captures(opening) {
        comment_lines.push(opening.to_string());
        json_text = caps[1].to_string();
        if !caps[2].is_empty() {
            trailing_text = Some(caps[2].trim_end().to_string());
        }
    } else if opening.starts_with("<!--") && !opening.contains("-->") {
        comment_lines.push(opening.to_string());
        let mut json_lines: Vec<String> = Vec::new();
        let mut cursor = index;
        let mut current = Some(opening[4..].trim().to_string());

        while let Some(line) = &current {
            if line.contains("-->") {
                break;
            }
            if !line.is_empty() {
                json_lines.push(line.clone());
            }
            cursor += 1;
            current = lines.get(cursor).map(|l| l.trim().to_string());
            if let Some(line) = &current {
                comment_lines.push(line.clone());
            }
        }

        // `current` holds the closing line, or None when unterminated
        if let Some(line) = &current {
            if let Some(caps) = COMMENT_CLOSE_RE.captures(line) {
                if !caps[1].is_empty() {
                    json_lines.push(caps[1].to_string());
                }
                if !caps[2].is_empty() {
                    trailing_text = Some(caps[2].trim_end().to_string());
                }
            }
        }

        json_text = json_lines.join(" ");
    }

    if comment_lines.is_empty() {
        return None;
    }

    let metadata: Option<BlockMetadata> = if json_text.is_empty() {
        None
    } else {
        serde_json::from_str(&json_text).ok()
    };

    Some(HtmlComment {
        lines: comment_lines,
        metadata,
        trailing_text,
        line: index + 1,
    })
}

fn parse_code_block(lines: &[String], index: usize) -> Option<CodeBlock> {
    let opening = lines[index].trim_end();
    let language = CODE_FENCE_LANG_RE
        .captures(opening)
        .map(|caps| caps[1].to_string());
    if language.is_none() && !CODE_FENCE_RE.is_match(opening) {
        return None;
    }

    let mut block_lines = vec![opening.to_string()];
    let mut cursor = index + 1;
    while cursor < lines.len() {
        let line = lines[cursor].trim_end();
        block_lines.push(line.to_string());
        if CODE_FENCE_RE.is_match(line) {
            break;
        }
        cursor += 1;
    }

    Some(CodeBlock {
        language,
        lines: block_lines,
        line: index + 1,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_lines(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|l| l.to_string()).collect()
    }

    fn parse_all(lines: &[&str]) -> Vec<Part> {
        let lines = to_lines(lines);
        parse_parts(&lines, 0, lines.len().saturating_sub(1))
    }

    /// Checks that the top-level parts tile the input: spans in order,
    /// no overlaps, and every uncovered line is blank.
    fn assert_partition(lines: &[&str], parts: &[Part]) {
        let mut covered = vec![false; lines.len()];
        let mut previous_end = 0;
        for part in parts {
            let start = part.line() - 1;
            assert!(start >= previous_end, "parts overlap at line {}", start + 1);
            for index in start..(start + part.line_count()).min(lines.len()) {
                covered[index] = true;
            }
            previous_end = start + part.line_count();
        }
        for (index, line) in lines.iter().enumerate() {
            if !covered[index] {
                assert!(
                    line.trim().is_empty(),
                    "line {} dropped by the parser: {line:?}",
                    index + 1
                );
            }
        }
    }

    #[test]
    fn heading_then_paragraph() {
        let parts = parse_all(&["## Properties", "", "These are the properties"]);
        assert_eq!(parts.len(), 2);
        assert_eq!(
            parts[0],
            Part::Heading(Heading {
                level: 2,
                title: "Properties".to_string(),
                line: 1,
            })
        );
        assert_eq!(
            parts[1],
            Part::Paragraph(Paragraph {
                lines: vec!["These are the properties".to_string()],
                line: 3,
            })
        );
    }

    #[test]
    fn heading_with_leading_whitespace() {
        let parts = parse_all(&[
            " #  secureScoreControlStateUpdate resource type",
            "Contains the history of the control states.",
        ]);
        let heading = parts[0].as_heading().unwrap();
        assert_eq!(heading.level, 1);
        assert_eq!(heading.title, "secureScoreControlStateUpdate resource type");
    }

    #[test]
    fn heading_with_link_is_not_a_heading() {
        let parts = parse_all(&["# [HTTP](#tab/http)", "---"]);
        assert!(matches!(parts[0], Part::TabbedSection(_)));
    }

    #[test]
    fn include_with_and_without_label() {
        let parts = parse_all(&[
            "[!INCLUDE [beta-disclaimer](../../includes/beta-disclaimer.md)]",
            "",
            "[!INCLUDE [](../../includes/beta-disclaimer.md)]",
        ]);
        assert_eq!(
            parts[0],
            Part::Include(Include {
                label: "beta-disclaimer".to_string(),
                target: "../../includes/beta-disclaimer.md".to_string(),
                line: 1,
            })
        );
        assert_eq!(
            parts[1],
            Part::Include(Include {
                label: String::new(),
                target: "../../includes/beta-disclaimer.md".to_string(),
                line: 3,
            })
        );
    }

    #[test]
    fn namespace_declarations() {
        let parts = parse_all(&["Namespace: microsoft.graph", "", "Some text"]);
        assert_eq!(
            parts[0],
            Part::Namespace(Namespace {
                namespace: "microsoft.graph".to_string(),
                line: 1,
            })
        );

        let parts = parse_all(&["Namespace: microsoft.graph.lorem.ipsum"]);
        assert_eq!(
            parts[0],
            Part::Namespace(Namespace {
                namespace: "microsoft.graph.lorem.ipsum".to_string(),
                line: 1,
            })
        );
    }

    #[test]
    fn table_extracts_headers_and_rows() {
        let parts = parse_all(&[
            "|Name|Description|",
            "|:---|:---|",
            "|Authorization|Bearer {token}. Required.|",
        ]);
        assert_eq!(parts.len(), 1);
        let table = parts[0].as_table().unwrap();
        assert_eq!(table.headers, vec!["Name", "Description"]);
        assert_eq!(
            table.rows,
            vec![vec![
                "Authorization".to_string(),
                "Bearer {token}. Required.".to_string()
            ]]
        );
        assert_eq!(table.line, 1);
        assert_eq!(table.line_count, 3);
    }

    #[test]
    fn table_cells_are_trimmed() {
        let parts = parse_all(&[
            "| Name | Description |",
            "| :--- | :--- |",
            "| Authorization | Bearer {token}. Required. |",
        ]);
        let table = parts[0].as_table().unwrap();
        assert_eq!(table.headers, vec!["Name", "Description"]);
        assert_eq!(table.rows[0][0], "Authorization");
    }

    #[test]
    fn table_stops_at_first_non_pipe_line() {
        let parts = parse_all(&[
            "|Method|Returns|",
            "|:---|:---|",
            "|[List](list.md)|collection|",
            "Trailing text",
        ]);
        let table = parts[0].as_table().unwrap();
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.line_count, 3);
        assert!(matches!(parts[1], Part::Paragraph(_)));
    }

    #[test]
    fn pipe_line_without_divider_is_a_paragraph() {
        let parts = parse_all(&["|Name|Description|", "no divider here"]);
        assert!(matches!(parts[0], Part::Paragraph(_)));
    }

    #[test]
    fn code_block_with_language() {
        let parts = parse_all(&["``` json", "{", "  \"id\": \"String\"", "}", "```"]);
        assert_eq!(parts.len(), 1);
        let block = parts[0].as_code_block().unwrap();
        assert_eq!(block.language.as_deref(), Some("json"));
        assert_eq!(block.lines.len(), 5);
        assert_eq!(block.lines[0], "``` json");
        assert_eq!(block.lines[4], "```");
    }

    #[test]
    fn code_block_without_language() {
        let parts = parse_all(&["```", "GET /users", "```"]);
        let block = parts[0].as_code_block().unwrap();
        assert_eq!(block.language, None);
        assert_eq!(block.lines.len(), 3);
    }

    #[test]
    fn unterminated_code_block_runs_to_end_of_range() {
        let parts = parse_all(&["```http", "GET /users", "GET /groups"]);
        assert_eq!(parts.len(), 1);
        let block = parts[0].as_code_block().unwrap();
        assert_eq!(block.language.as_deref(), Some("http"));
        assert_eq!(block.lines.len(), 3);
    }

    #[test]
    fn single_line_metadata_comment() {
        let parts = parse_all(&[
            r#"<!-- { "blockType": "request", "name": "update_access_package" } -->"#,
        ]);
        let Part::HtmlComment(comment) = &parts[0] else {
            panic!("expected an HTML comment, got {:?}", parts[0]);
        };
        let metadata = comment.metadata.as_ref().unwrap();
        assert_eq!(metadata.block_type, "request");
        assert_eq!(metadata.name.as_deref(), Some("update_access_package"));
        assert_eq!(comment.trailing_text, None);
    }

    #[test]
    fn single_line_metadata_with_trailing_text() {
        let parts = parse_all(&[
            r#"<!-- { "blockType": "request", "name": "update_access_package" } -->s"#,
        ]);
        let Part::HtmlComment(comment) = &parts[0] else {
            panic!("expected an HTML comment");
        };
        assert!(comment.metadata.is_some());
        assert_eq!(comment.trailing_text.as_deref(), Some("s"));
    }

    #[test]
    fn multi_line_metadata_comment() {
        let parts = parse_all(&[
            "<!-- {",
            "  \"blockType\": \"resource\",",
            "  \"keyProperty\": \"id\",",
            "  \"@odata.type\": \"microsoft.graph.accessPackage\",",
            "  \"openType\": false",
            "}",
            "-->",
        ]);
        let Part::HtmlComment(comment) = &parts[0] else {
            panic!("expected an HTML comment");
        };
        assert_eq!(comment.lines.len(), 7);
        let metadata = comment.metadata.as_ref().unwrap();
        assert_eq!(metadata.block_type, "resource");
        assert_eq!(metadata.key_property.as_deref(), Some("id"));
        assert_eq!(
            metadata.odata_type.as_deref(),
            Some("microsoft.graph.accessPackage")
        );
        assert_eq!(metadata.open_type, Some(false));
    }

    #[test]
    fn multi_line_metadata_with_brace_on_second_line() {
        let parts = parse_all(&[
            "<!--",
            "{",
            "  \"blockType\": \"response\",",
            "  \"truncated\": true,",
            "  \"@odata.type\": \"Collection(microsoft.graph.accessPackageAssignment)\"",
            "}",
            "-->",
        ]);
        let Part::HtmlComment(comment) = &parts[0] else {
            panic!("expected an HTML comment");
        };
        let metadata = comment.metadata.as_ref().unwrap();
        assert_eq!(metadata.block_type, "response");
        assert_eq!(metadata.truncated, Some(true));
    }

    #[test]
    fn comment_without_block_type_is_not_metadata() {
        let parts = parse_all(&[
            "<!--",
            "  \"blockType\": \"request\",",
            "  \"name\": \"update_access_package\"",
            "-->",
        ]);
        let Part::HtmlComment(comment) = &parts[0] else {
            panic!("expected an HTML comment");
        };
        // Payload is not a JSON object, so it stays a plain comment
        assert!(comment.metadata.is_none());
        assert_eq!(comment.lines.len(), 4);
    }

    #[test]
    fn comment_with_page_annotation_is_not_metadata() {
        let parts = parse_all(&[
            "<!-- {",
            "  \"type\": \"#page.annotation\",",
            "  \"description\": \"onlineMeetingInfo resource\",",
            "  \"keywords\": \"\",",
            "  \"section\": \"documentation\",",
            "  \"tocPath\": \"\"",
            "}-->s",
        ]);
        let Part::HtmlComment(comment) = &parts[0] else {
            panic!("expected an HTML comment");
        };
        assert!(comment.metadata.is_none());
        assert_eq!(comment.trailing_text.as_deref(), Some("s"));
    }

    #[test]
    fn unterminated_comment_runs_to_end_of_range() {
        let lines = [
            "<!--",
            "Future: add links to related articles.",
            ">",
            "Hello world",
        ];
        let parts = parse_all(&lines);
        assert_eq!(parts.len(), 1);
        let Part::HtmlComment(comment) = &parts[0] else {
            panic!("expected an HTML comment");
        };
        assert_eq!(comment.lines.len(), 4);
        assert!(comment.metadata.is_none());
        assert_partition(&lines, &parts);
    }

    #[test]
    fn plain_single_line_comment_falls_through_to_paragraph() {
        let parts = parse_all(&["<!-- just a note -->"]);
        assert!(matches!(parts[0], Part::Paragraph(_)));
    }

    #[test]
    fn tabbed_section_collects_tabs_and_nested_parts() {
        let lines = [
            "# [HTTP](#tab/http)",
            "```http",
            "GET https://graph.microsoft.com/v1.0/users",
            "```",
            "",
            "# [C#](#tab/csharp)",
            "[!INCLUDE [sample-code](../includes/snippets/csharp/get-user-csharp-snippets.md)]",
            "",
            "# [JavaScript](#tab/javascript)",
            "[!INCLUDE [sample-code](../includes/snippets/javascript/get-user-javascript-snippets.md)]",
            "",
            "---",
        ];
        let parts = parse_all(&lines);
        assert_eq!(parts.len(), 1);
        let section = parts[0].as_tabbed_section().unwrap();
        assert_eq!(section.line, 1);
        assert_eq!(section.line_count, 12);
        assert_eq!(
            section
                .tabs
                .iter()
                .map(|t| t.title.as_str())
                .collect::<Vec<_>>(),
            vec!["HTTP", "C#", "JavaScript"]
        );
        assert_eq!(section.tabs[0].anchor, "tab/http");
        assert_eq!(section.tabs[1].line, 6);

        // Interior parts from all tabs, concatenated
        assert!(section
            .parts
            .iter()
            .any(|p| p.as_code_block().is_some_and(|c| c.language.as_deref() == Some("http"))));
        let includes: Vec<_> = section
            .parts
            .iter()
            .filter(|p| matches!(p, Part::Include(_)))
            .collect();
        assert_eq!(includes.len(), 2);
    }

    #[test]
    fn tabbed_section_without_terminator_consumes_rest() {
        let lines = ["# [HTTP](#tab/http)", "```http", "GET /users", "```"];
        let parts = parse_all(&lines);
        assert_eq!(parts.len(), 1);
        let section = parts[0].as_tabbed_section().unwrap();
        assert_eq!(section.tabs.len(), 1);
        // The phantom terminator is still counted
        assert_eq!(section.line_count, 5);
    }

    #[test]
    fn paragraph_collects_consecutive_lines() {
        let lines = ["Hello world", "Lorem ipsum", "", "This is # Not a heading"];
        let parts = parse_all(&lines);
        assert_eq!(parts.len(), 2);
        assert_eq!(
            parts[0],
            Part::Paragraph(Paragraph {
                lines: vec!["Hello world".to_string(), "Lorem ipsum".to_string()],
                line: 1,
            })
        );
        assert_eq!(
            parts[1],
            Part::Paragraph(Paragraph {
                lines: vec!["This is # Not a heading".to_string()],
                line: 4,
            })
        );
        assert_partition(&lines, &parts);
    }

    #[test]
    fn trailing_paragraph_is_flushed_at_range_end() {
        let parts = parse_all(&["## Heading", "", "trailing text"]);
        assert_eq!(parts.len(), 2);
        assert!(matches!(parts[1], Part::Paragraph(_)));
    }

    #[test]
    fn parts_tile_a_mixed_document() {
        let lines = [
            "# accessPackage resource type",
            "",
            "Namespace: microsoft.graph",
            "",
            "[!INCLUDE [beta-disclaimer](../../includes/beta-disclaimer.md)]",
            "",
            "Represents an access package.",
            "",
            "## Properties",
            "",
            "|Property|Type|",
            "|:---|:---|",
            "|displayName|String|",
            "|id|String|",
            "",
            "## JSON representation",
            "",
            "<!-- {",
            "  \"blockType\": \"resource\",",
            "  \"@odata.type\": \"microsoft.graph.accessPackage\"",
            "} -->",
            "``` json",
            "{",
            "  \"displayName\": \"String\"",
            "}",
            "```",
        ];
        let parts = parse_all(&lines);
        assert_partition(&lines, &parts);
        assert!(matches!(parts[0], Part::Heading(_)));
        assert!(matches!(parts[1], Part::Namespace(_)));
        assert!(matches!(parts[2], Part::Include(_)));
        assert!(matches!(parts[3], Part::Paragraph(_)));
    }

    #[test]
    fn respects_the_range_window() {
        let lines = to_lines(&["one", "two", "three", "four"]);
        let parts = parse_parts(&lines, 1, 2);
        assert_eq!(parts.len(), 1);
        assert_eq!(
            parts[0],
            Part::Paragraph(Paragraph {
                lines: vec!["two".to_string(), "three".to_string()],
                line: 2,
            })
        );
    }

    #[test]
    fn fence_with_trailing_text_is_not_a_code_block() {
        let parts = parse_all(&["```json extra words"]);
        assert!(matches!(parts[0], Part::Paragraph(_)));
    }
}
