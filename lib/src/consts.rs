//! Defines constant NamedNodeRefs for the RDF/OWL terms the generator consumes,
//! plus the fixed parameters of the generated artifacts.

use oxigraph::model::NamedNodeRef;

pub const TYPE: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("http://www.w3.org/1999/02/22-rdf-syntax-ns#type");
pub const COMMENT: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("http://www.w3.org/2000/01/rdf-schema#comment");

// term categories
pub const CLASS: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#Class");
pub const OBJECT_PROPERTY: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#ObjectProperty");
pub const DATATYPE_PROPERTY: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#DatatypeProperty");

pub const THING: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#Thing");

/// Fragment identifier that marks the ontology root in any namespace.
pub const ROOT_FRAGMENT: &str = "Thing";
/// Symbol under which the root class is always declared.
pub const ROOT_SYMBOL: &str = "Thing";
/// Reference string the root class binding is constructed from. Never goes
/// through identifier normalization.
pub const ROOT_REFERENCE: &str = "owl:Thing";
/// Documentation attached to the root class declaration.
pub const ROOT_DOC: &str = "The most generic concept available.";

/// Column at which extracted descriptions are reflowed.
pub const DEFAULT_WRAP_WIDTH: usize = 70;
/// Left margin prepended to every continuation line of a reflowed description.
pub const COMMENT_CONTINUATION: &str = "\t\t* ";
