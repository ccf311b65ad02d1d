//! Parses an ontology document into an immutable, document-ordered triple
//! sequence and extracts typed terms from it.

use crate::consts::{COMMENT, TYPE};
use crate::errors::MalformedOntologyError;
use crate::options::DroppedTermPolicy;
use crate::term::{local_identifier, OntologyTerm, TermCategory};
use crate::text;
use anyhow::Result;
use log::{debug, warn};
use oxigraph::io::{RdfFormat, RdfParser};
use oxigraph::model::{Subject, TermRef, Triple};
use std::collections::HashSet;
use std::io::{BufReader, Read};
use std::path::Path;

/// An ontology document parsed once per generation run. The triple sequence
/// keeps the order the triples were parsed in, so term extraction can
/// preserve document order.
pub struct OntologyDocument {
    triples: Vec<Triple>,
    origin: String,
}

impl OntologyDocument {
    /// Reads and parses an ontology file, choosing the RDF format from the
    /// file extension and defaulting to RDF/XML.
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Reading ontology file: {}", path.display());
        let file = std::fs::File::open(path)?;
        let content: BufReader<_> = BufReader::new(file);
        let format = path.extension().and_then(|ext| ext.to_str());
        let format = format.and_then(|ext| match ext {
            "owl" => Some(RdfFormat::RdfXml),
            "xml" => Some(RdfFormat::RdfXml),
            "rdf" => Some(RdfFormat::RdfXml),
            "ttl" => Some(RdfFormat::Turtle),
            "n3" => Some(RdfFormat::Turtle),
            "nt" => Some(RdfFormat::NTriples),
            _ => None,
        });
        Self::from_reader(
            content,
            format.unwrap_or(RdfFormat::RdfXml),
            &path.display().to_string(),
        )
    }

    /// Parses an ontology document from a reader. `origin` names the source
    /// in errors and serves as the base IRI for relative references unless
    /// the document declares its own base.
    pub fn from_reader<R: Read>(reader: R, format: RdfFormat, origin: &str) -> Result<Self> {
        let parser = match RdfParser::from_format(format).with_base_iri(format!("file://{}", origin))
        {
            Ok(parser) => parser,
            Err(_) => RdfParser::from_format(format),
        };
        let mut triples = Vec::new();
        for quad in parser.for_reader(reader) {
            let quad = quad.map_err(|e| MalformedOntologyError {
                file: origin.to_string(),
                reason: e.to_string(),
            })?;
            triples.push(Triple::new(quad.subject, quad.predicate, quad.object));
        }
        debug!("Parsed {} triples from {}", triples.len(), origin);
        Ok(OntologyDocument {
            triples,
            origin: origin.to_string(),
        })
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn len(&self) -> usize {
        self.triples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Extracts the terms of one category in document order. Elements that
    /// yield no usable identifier (the root sentinel, anonymous terms) are
    /// excluded entirely, subject to the dropped-term policy.
    pub fn terms(
        &self,
        category: TermCategory,
        policy: DroppedTermPolicy,
        width: usize,
    ) -> Vec<OntologyTerm> {
        let mut seen: HashSet<&Subject> = HashSet::new();
        let mut terms = Vec::new();
        for triple in &self.triples {
            if triple.predicate.as_ref() != TYPE {
                continue;
            }
            match triple.object.as_ref() {
                TermRef::NamedNode(node) if node == category.type_iri() => {}
                _ => continue,
            }
            if !seen.insert(&triple.subject) {
                continue;
            }
            let identifier = match &triple.subject {
                Subject::NamedNode(node) => local_identifier(node.as_str()),
                // anonymous term (blank node)
                _ => None,
            };
            match identifier {
                Some(identifier) => {
                    let description = self
                        .first_comment(&triple.subject)
                        .map(|comment| text::reflow_comment(&comment, width));
                    terms.push(OntologyTerm::new(identifier, category, description));
                }
                None => {
                    if policy.is_warn() {
                        warn!(
                            "Dropping {} without a usable identifier: {}",
                            category, triple.subject
                        );
                    }
                }
            }
        }
        terms
    }

    /// The first rdfs:comment attached to the subject, in document order.
    fn first_comment(&self, subject: &Subject) -> Option<String> {
        self.triples
            .iter()
            .filter(|t| t.subject == *subject && t.predicate.as_ref() == COMMENT)
            .find_map(|t| match t.object.as_ref() {
                TermRef::Literal(lit) => Some(lit.value().to_string()),
                _ => None,
            })
    }
}
