//! MGD001 `yaml-header-present`: every topic needs a YAML header carrying
//! `title`, `description`, `author`, and `doc_type`.

use crate::document::Document;
use crate::rules::{Problem, Rule};
use crate::utils::is_blank;

pub struct YamlHeaderPresent;

const REQUIRED_ATTRIBUTES: [&str; 4] = ["title", "description", "author", "doc_type"];

impl Rule for YamlHeaderPresent {
    fn id(&self) -> &'static str {
        "MGD001"
    }

    fn alias(&self) -> &'static str {
        "yaml-header-present"
    }

    fn validate(&self, document: &Document) -> Vec<Problem> {
        let Some(markdown) = document.as_markdown() else {
            return Vec::new();
        };

        let opens_with_marker = markdown
            .lines
            .first()
            .is_some_and(|line| line.trim() == "---");

        let Some(front_matter) = markdown.front_matter.as_ref().filter(|_| opens_with_marker)
        else {
            return vec![Problem::new(self.id(), "YAML header missing")];
        };

        let values = [
            front_matter.title.as_deref(),
            front_matter.description.as_deref(),
            front_matter.author.as_deref(),
            front_matter.doc_type.as_deref(),
        ];

        REQUIRED_ATTRIBUTES
            .iter()
            .zip(values)
            .filter(|(_, value)| is_blank(*value))
            .map(|(name, _)| {
                Problem::new(
                    self.id(),
                    format!("YAML header missing required attribute \"{name}\""),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::MarkdownDocument;

    fn validate(content: &str) -> Vec<Problem> {
        let doc = Document::Markdown(MarkdownDocument::from_content("test.md", content));
        YamlHeaderPresent.validate(&doc)
    }

    #[test]
    fn complete_header_passes() {
        let problems = validate(
            "---\ntitle: T\ndescription: D\nauthor: A\ndoc_type: apiPageType\n---\n\n# Body\n",
        );
        assert!(problems.is_empty());
    }

    #[test]
    fn missing_header_is_one_problem() {
        let problems = validate("# Body only\n");
        assert_eq!(problems.len(), 1);
        assert_eq!(problems[0].description, "YAML header missing");
        assert_eq!(problems[0].location, None);
    }

    #[test]
    fn malformed_header_counts_as_missing() {
        let problems = validate("---\ntitle: [broken\n---\n\n# Body\n");
        assert_eq!(problems.len(), 1);
        assert_eq!(problems[0].description, "YAML header missing");
    }

    #[test]
    fn each_blank_attribute_is_reported() {
        let problems = validate("---\ntitle: T\nauthor: '  '\ndoc_type: apiPageType\n---\n");
        let descriptions: Vec<&str> =
            problems.iter().map(|p| p.description.as_str()).collect();
        assert_eq!(
            descriptions,
            vec![
                "YAML header missing required attribute \"description\"",
                "YAML header missing required attribute \"author\"",
            ]
        );
    }

    #[test]
    fn plain_documents_are_skipped() {
        use crate::document::PlainDocument;
        let doc = Document::Plain(PlainDocument::from_content("notes.txt", "no header"));
        assert!(YamlHeaderPresent.validate(&doc).is_empty());
    }
}
