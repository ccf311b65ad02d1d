//! Defines the core data structures for representing extracted ontology terms:
//! `OntologyTerm`, its `TermCategory`, and the identifier extraction rules.

use crate::consts::{CLASS, DATATYPE_PROPERTY, OBJECT_PROPERTY, ROOT_FRAGMENT};
use oxigraph::model::NamedNodeRef;
use serde::{Deserialize, Serialize};

/// The kind of ontology element a term was extracted from. Determines which
/// generated symbol table the term belongs to and which declared type
/// (`Class` or `Property`) is used in the emitted code.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum TermCategory {
    Class,
    ObjectProperty,
    DatatypeProperty,
}

impl TermCategory {
    /// The IRI an element must be typed with to fall into this category.
    pub fn type_iri(&self) -> NamedNodeRef<'static> {
        match self {
            TermCategory::Class => CLASS,
            TermCategory::ObjectProperty => OBJECT_PROPERTY,
            TermCategory::DatatypeProperty => DATATYPE_PROPERTY,
        }
    }

    /// The runtime type the generated constant is declared as.
    pub fn declared_type(&self) -> &'static str {
        match self {
            TermCategory::Class => "Class",
            TermCategory::ObjectProperty | TermCategory::DatatypeProperty => "Property",
        }
    }
}

impl std::fmt::Display for TermCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TermCategory::Class => write!(f, "class"),
            TermCategory::ObjectProperty => write!(f, "object property"),
            TermCategory::DatatypeProperty => write!(f, "datatype property"),
        }
    }
}

/// A single term extracted from the ontology document. Immutable after
/// creation; the identifier is already normalized and non-empty.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct OntologyTerm {
    pub identifier: String,
    pub category: TermCategory,
    pub description: Option<String>,
}

impl OntologyTerm {
    pub fn new(identifier: String, category: TermCategory, description: Option<String>) -> Self {
        OntologyTerm {
            identifier,
            category,
            description,
        }
    }
}

/// Extracts the ontology-local identifier from a term IRI: the fragment after
/// the last `#`, normalized for use as a generated symbol name. Returns `None`
/// for IRIs without a fragment, with an empty fragment, or denoting the
/// ontology root.
pub fn local_identifier(iri: &str) -> Option<String> {
    let (_, fragment) = iri.rsplit_once('#')?;
    if fragment.is_empty() || fragment == ROOT_FRAGMENT {
        return None;
    }
    Some(normalize_identifier(fragment))
}

/// Replaces every hyphen with an underscore. Ontology identifiers may contain
/// hyphens, which are not valid in generated symbol names.
pub fn normalize_identifier(fragment: &str) -> String {
    fragment.replace('-', "_")
}
