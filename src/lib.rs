//! Graph Docs Validation
//!
//! Structural parsing and editorial validation for Microsoft Graph Markdown
//! documentation. Documents are parsed into a typed part model, then a fixed
//! set of lint rules (MGD001 through MGD010) reports problems with precise
//! source locations.

pub mod config;
pub mod document;
pub mod error;
pub mod markdown;
pub mod matching;
pub mod rules;
pub mod utils;
pub mod validator;

pub use config::ValidationOptions;
pub use document::{Document, PlainDocument};
pub use error::ValidationError;
pub use markdown::{
    part::{
        BlockMetadata, CodeBlock, Heading, HtmlComment, Include, Namespace, Paragraph, Part, Tab,
        TabbedSection, Table,
    },
    DocSection, FrontMatter, MarkdownDocument, ResourceElements, TopicType,
};
pub use matching::{get_matching_files, pattern_match};
pub use rules::{all_rules, Location, Problem, Rule};
pub use validator::Validator;
