//! The validation engine.
//!
//! Runs in two stages: documents load strictly one at a time (loading a
//! large set concurrently exhausts file handles), then validation fans out
//! across documents and rules. Rules read an immutable model, so the
//! fan-out needs no locking; findings are concatenated in registration
//! order before being attached.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use log::info;
use rayon::prelude::*;

use crate::config::ValidationOptions;
use crate::document::{Document, PlainDocument};
use crate::error::ValidationError;
use crate::markdown::MarkdownDocument;
use crate::matching::get_matching_files;
use crate::rules::{all_rules, Rule};

pub struct Validator {
    enabled_rules: Vec<Box<dyn Rule>>,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator {
    pub fn new() -> Self {
        Self {
            enabled_rules: all_rules(),
        }
    }

    /// Validates every matching file under `root` and returns the loaded
    /// documents with their findings attached.
    pub async fn validate_document_set(
        &mut self,
        root: &Path,
        options: &ValidationOptions,
    ) -> Result<Vec<Document>> {
        self.enabled_rules = filter_rules(&options.disabled_rules);
        if self.enabled_rules.is_empty() {
            info!("All validation rules are disabled, aborting.");
            return Ok(Vec::new());
        }

        let load_start = Instant::now();
        let files =
            get_matching_files(root, &options.include_patterns, &options.ignore_patterns)
                .with_context(|| format!("discovering files under {}", root.display()))?;

        let mut documents = Vec::with_capacity(files.len());
        for file in &files {
            let document = self
                .load_document(file)
                .await
                .with_context(|| format!("loading {}", file.display()))?;
            documents.push(document);
        }
        info!(
            "Loaded {} documents in {} milliseconds",
            documents.len(),
            load_start.elapsed().as_millis()
        );

        let validation_start = Instant::now();
        documents
            .par_iter_mut()
            .for_each(|document| self.validate_document(document));
        info!(
            "Ran {} validations in {} milliseconds",
            self.enabled_rules.len(),
            validation_start.elapsed().as_millis()
        );

        Ok(documents)
    }

    /// Loads one file, dispatching on its extension.
    pub async fn load_document(&self, path: &Path) -> Result<Document, ValidationError> {
        let is_markdown = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("md"));
        if is_markdown {
            Ok(Document::Markdown(MarkdownDocument::load(path).await?))
        } else {
            Ok(Document::Plain(PlainDocument::load(path).await?))
        }
    }

    /// Runs every enabled rule against one document and attaches the
    /// flattened findings.
    pub fn validate_document(&self, document: &mut Document) {
        let target: &Document = document;
        let problems: Vec<_> = self
            .enabled_rules
            .par_iter()
            .map(|rule| rule.validate(target))
            .collect::<Vec<_>>()
            .into_iter()
            .flatten()
            .collect();
        document.attach_problems(problems);
    }
}

/// The registry minus the disabled rules, matched by id or alias without
/// regard to case.
fn filter_rules(disabled: &[String]) -> Vec<Box<dyn Rule>> {
    if disabled.is_empty() {
        return all_rules();
    }
    info!("Disabling the following rules: {}", disabled.join(","));

    let disabled: Vec<String> = disabled.iter().map(|r| r.to_uppercase()).collect();
    all_rules()
        .into_iter()
        .filter(|rule| {
            !disabled.contains(&rule.id().to_uppercase())
                && !disabled.contains(&rule.alias().to_uppercase())
        })
        .collect()
}
