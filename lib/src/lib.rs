//! Generates strongly-named constant bindings (`Properties`, `Classes`) from
//! an OWL ontology document, as a coupled pair of declaration and definition
//! artifacts for the downstream runtime library.

pub mod config;
pub mod consts;
pub mod emit;
pub mod errors;
pub mod options;
pub mod reader;
pub mod term;
pub mod text;

use crate::config::Config;
use crate::emit::{BindingSet, GeneratedArtifacts};
use crate::reader::OntologyDocument;
use crate::term::TermCategory;
use anyhow::Result;
use std::path::Path;

/// Drives one generation run: extracts the per-category term lists from a
/// parsed document and renders the coupled artifact pair. Stateless between
/// runs; each invocation is pure given the document and configuration.
pub struct BindingGenerator {
    config: Config,
}

impl BindingGenerator {
    pub fn new(config: Config) -> Self {
        BindingGenerator { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Extracts the ordered bindings from the document: object properties,
    /// datatype properties and classes, plus the fixed root class.
    pub fn bindings(&self, document: &OntologyDocument) -> BindingSet {
        let policy = self.config.dropped_terms;
        let width = self.config.wrap_width;
        BindingSet::from_terms(
            document.terms(TermCategory::ObjectProperty, policy, width),
            document.terms(TermCategory::DatatypeProperty, policy, width),
            document.terms(TermCategory::Class, policy, width),
        )
    }

    /// Renders the artifact pair from an extracted binding set. Rendering
    /// itself cannot fail; only parsing can.
    pub fn render(&self, bindings: &BindingSet) -> GeneratedArtifacts {
        GeneratedArtifacts {
            header: emit::render_header(&bindings.declaration_fragments(), &self.config),
            source: emit::render_source(&bindings.definition_fragments(), &self.config),
        }
    }

    pub fn generate(&self, document: &OntologyDocument) -> GeneratedArtifacts {
        self.render(&self.bindings(document))
    }

    pub fn generate_from_file(&self, path: &Path) -> Result<GeneratedArtifacts> {
        let document = OntologyDocument::from_file(path)?;
        Ok(self.generate(&document))
    }
}
