//! Renders extracted term lists into the two coupled artifacts: a
//! declarations header and a definitions source file. Declarations and
//! definitions are produced by separate passes over the same bindings, so
//! their symbol sequences must never diverge.

use crate::config::Config;
use crate::consts::{ROOT_DOC, ROOT_REFERENCE, ROOT_SYMBOL};
use crate::term::{OntologyTerm, TermCategory};
use anyhow::Result;
use std::path::Path;

/// Enclosing construct a generated symbol is declared under.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum SymbolTable {
    Properties,
    Classes,
}

impl SymbolTable {
    pub fn name(&self) -> &'static str {
        match self {
            SymbolTable::Properties => "Properties",
            SymbolTable::Classes => "Classes",
        }
    }
}

impl std::fmt::Display for SymbolTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl From<TermCategory> for SymbolTable {
    fn from(category: TermCategory) -> Self {
        match category {
            TermCategory::Class => SymbolTable::Classes,
            TermCategory::ObjectProperty | TermCategory::DatatypeProperty => {
                SymbolTable::Properties
            }
        }
    }
}

/// A generated symbol: its name, the ontology reference string its runtime
/// value is constructed from, and its optional documentation.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Binding {
    pub symbol: String,
    pub reference: String,
    pub doc: Option<String>,
    pub category: TermCategory,
}

impl Binding {
    fn from_term(term: OntologyTerm) -> Self {
        Binding {
            symbol: term.identifier.clone(),
            reference: term.identifier,
            doc: term.description,
            category: term.category,
        }
    }

    /// The hand-specified ontology root. Its reference string is the raw
    /// root IRI abbreviation, untouched by identifier normalization.
    fn root() -> Self {
        Binding {
            symbol: ROOT_SYMBOL.to_string(),
            reference: ROOT_REFERENCE.to_string(),
            doc: Some(ROOT_DOC.to_string()),
            category: TermCategory::Class,
        }
    }
}

/// The complete, ordered set of bindings for one generation run: object
/// properties, then datatype properties, then the root class followed by the
/// extracted classes in document order.
#[derive(Debug, Clone)]
pub struct BindingSet {
    object_properties: Vec<Binding>,
    datatype_properties: Vec<Binding>,
    classes: Vec<Binding>,
}

impl BindingSet {
    pub fn from_terms(
        object_properties: Vec<OntologyTerm>,
        datatype_properties: Vec<OntologyTerm>,
        classes: Vec<OntologyTerm>,
    ) -> Self {
        let mut all_classes = Vec::with_capacity(classes.len() + 1);
        all_classes.push(Binding::root());
        all_classes.extend(classes.into_iter().map(Binding::from_term));
        BindingSet {
            object_properties: object_properties
                .into_iter()
                .map(Binding::from_term)
                .collect(),
            datatype_properties: datatype_properties
                .into_iter()
                .map(Binding::from_term)
                .collect(),
            classes: all_classes,
        }
    }

    pub fn object_properties(&self) -> &[Binding] {
        &self.object_properties
    }

    pub fn datatype_properties(&self) -> &[Binding] {
        &self.datatype_properties
    }

    /// All class bindings, the root first.
    pub fn classes(&self) -> &[Binding] {
        &self.classes
    }

    fn ordered(&self) -> impl Iterator<Item = &Binding> {
        self.object_properties
            .iter()
            .chain(self.datatype_properties.iter())
            .chain(self.classes.iter())
    }

    /// One declaration per binding, in emission order.
    pub fn declaration_fragments(&self) -> Vec<DeclarationFragment> {
        self.ordered()
            .map(|binding| DeclarationFragment {
                table: binding.category.into(),
                category: binding.category,
                symbol: binding.symbol.clone(),
                text: declaration_text(binding),
            })
            .collect()
    }

    /// One definition per declared symbol, in the same order as the
    /// declarations.
    pub fn definition_fragments(&self) -> Vec<DefinitionFragment> {
        self.ordered()
            .map(|binding| {
                let table = SymbolTable::from(binding.category);
                let ty = binding.category.declared_type();
                DefinitionFragment {
                    table,
                    symbol: binding.symbol.clone(),
                    text: format!(
                        "const {} {}::{} = {}(\"{}\");",
                        ty,
                        table.name(),
                        binding.symbol,
                        ty,
                        binding.reference
                    ),
                }
            })
            .collect()
    }
}

/// A rendered declaration: the optional documentation block plus the
/// constant declaration itself.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct DeclarationFragment {
    pub table: SymbolTable,
    pub category: TermCategory,
    pub symbol: String,
    pub text: String,
}

/// A rendered definition binding a declared symbol to its runtime value.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct DefinitionFragment {
    pub table: SymbolTable,
    pub symbol: String,
    pub text: String,
}

fn declaration_text(binding: &Binding) -> String {
    let ty = binding.category.declared_type();
    match &binding.doc {
        Some(doc) => format!(
            "\t\t/**\n\t\t* {}\n\t\t*/\n\t\tstatic const {} {};",
            doc, ty, binding.symbol
        ),
        None => format!("\t\tstatic const {} {};", ty, binding.symbol),
    }
}

/// Renders the declarations header from the declaration fragments.
pub fn render_header(fragments: &[DeclarationFragment], config: &Config) -> String {
    let guard = config.guard_macro();
    let mut out = String::new();
    out.push_str(&format!(
        "/** \\file\n \
         * This header defines a \"library\" of properties and classes (or concepts) matching the ones defined in the {} ontology.\n \
         * It has been automatically generated from {} by ontobind. Do not edit it by hand:\n \
         * regenerate it from the ontology instead.\n \
         */\n",
        config.ontology_label, config.ontology_label
    ));
    out.push_str(&format!("#ifndef {}\n#define {}\n\n", guard, guard));
    out.push_str(&format!("#include \"{}\"\n\n", config.runtime_include));
    out.push_str(&format!("namespace {} {{\n\n", config.namespace));

    out.push_str(&format!(
        "/** This class lists all the OWL properties defined in the {} ontology.\n \
         * It provides handy shortcuts when asserting new facts on concepts.\n \
         */\n",
        config.ontology_label
    ));
    out.push_str("class Properties {\n\tpublic:\n");
    out.push_str("\n// Object properties\n");
    push_declarations(&mut out, fragments, TermCategory::ObjectProperty);
    out.push_str("\n// Datatype properties\n");
    push_declarations(&mut out, fragments, TermCategory::DatatypeProperty);
    out.push_str("};\n\n");

    out.push_str(&format!(
        "/** This class lists all the OWL classes (or concepts) defined in the {} ontology.\n \
         * It provides handy shortcuts when asserting the class of a concept.\n \
         */\n",
        config.ontology_label
    ));
    out.push_str("class Classes {\n\tpublic:\n");
    push_declarations(&mut out, fragments, TermCategory::Class);
    out.push_str("};\n\n");

    out.push_str("}\n\n");
    out.push_str(&format!("#endif /* {} */\n", guard));
    out
}

fn push_declarations(out: &mut String, fragments: &[DeclarationFragment], category: TermCategory) {
    for fragment in fragments.iter().filter(|f| f.category == category) {
        out.push('\n');
        out.push_str(&fragment.text);
        out.push('\n');
    }
}

/// Renders the definitions source file from the definition fragments.
pub fn render_source(fragments: &[DefinitionFragment], config: &Config) -> String {
    let mut out = String::new();
    out.push_str(&format!("#include \"{}\"\n\n", config.header_filename));
    out.push_str(&format!("namespace {} {{\n\n", config.namespace));
    for table in [SymbolTable::Properties, SymbolTable::Classes] {
        for fragment in fragments.iter().filter(|f| f.table == table) {
            out.push_str(&fragment.text);
            out.push('\n');
        }
        out.push('\n');
    }
    out.push_str("}\n");
    out
}

/// The rendered artifact pair, fully built in memory before anything is
/// written out.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct GeneratedArtifacts {
    pub header: String,
    pub source: String,
}

impl GeneratedArtifacts {
    pub fn write(&self, header: &Path, source: &Path) -> Result<()> {
        std::fs::write(header, &self.header)?;
        std::fs::write(source, &self.source)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_set() -> BindingSet {
        BindingSet::from_terms(
            vec![OntologyTerm::new(
                "has_Part".to_string(),
                TermCategory::ObjectProperty,
                Some("A part of the robot.".to_string()),
            )],
            vec![OntologyTerm::new(
                "weight".to_string(),
                TermCategory::DatatypeProperty,
                None,
            )],
            vec![OntologyTerm::new(
                "Robot".to_string(),
                TermCategory::Class,
                None,
            )],
        )
    }

    #[test]
    fn test_root_class_is_first() {
        let set = sample_set();
        let classes = set.classes();
        assert_eq!(classes[0].symbol, "Thing");
        assert_eq!(classes[0].reference, "owl:Thing");
        assert_eq!(classes[1].symbol, "Robot");
    }

    #[test]
    fn test_declarations_and_definitions_stay_in_lockstep() {
        let set = sample_set();
        let declarations = set.declaration_fragments();
        let definitions = set.definition_fragments();
        assert_eq!(declarations.len(), definitions.len());
        for table in [SymbolTable::Properties, SymbolTable::Classes] {
            let declared: Vec<&str> = declarations
                .iter()
                .filter(|f| f.table == table)
                .map(|f| f.symbol.as_str())
                .collect();
            let defined: Vec<&str> = definitions
                .iter()
                .filter(|f| f.table == table)
                .map(|f| f.symbol.as_str())
                .collect();
            assert_eq!(declared, defined);
        }
    }

    #[test]
    fn test_declaration_text() {
        let set = sample_set();
        let declarations = set.declaration_fragments();
        let has_part = &declarations[0];
        assert_eq!(
            has_part.text,
            "\t\t/**\n\t\t* A part of the robot.\n\t\t*/\n\t\tstatic const Property has_Part;"
        );
        let weight = &declarations[1];
        assert_eq!(weight.text, "\t\tstatic const Property weight;");
    }

    #[test]
    fn test_definition_text() {
        let set = sample_set();
        let definitions = set.definition_fragments();
        let texts: Vec<&str> = definitions.iter().map(|f| f.text.as_str()).collect();
        assert_eq!(
            texts,
            vec![
                "const Property Properties::has_Part = Property(\"has_Part\");",
                "const Property Properties::weight = Property(\"weight\");",
                "const Class Classes::Thing = Class(\"owl:Thing\");",
                "const Class Classes::Robot = Class(\"Robot\");",
            ]
        );
    }

    #[test]
    fn test_render_header_structure() {
        let set = sample_set();
        let header = render_header(&set.declaration_fragments(), &Config::default());
        assert!(header.starts_with("/** \\file"));
        assert!(header.contains("#ifndef ONTOLOGY_BINDINGS_H_"));
        assert!(header.contains("#include \"oro.h\""));
        assert!(header.contains("namespace oro {"));
        assert!(header.contains("// Object properties"));
        assert!(header.contains("// Datatype properties"));
        assert!(header.contains("static const Property has_Part;"));
        assert!(header.contains("static const Class Thing;"));
        assert!(header.contains("static const Class Robot;"));
        assert!(header.ends_with("#endif /* ONTOLOGY_BINDINGS_H_ */\n"));
        // the properties table comes before the classes table
        let properties = header.find("class Properties {").unwrap();
        let classes = header.find("class Classes {").unwrap();
        assert!(properties < classes);
    }

    #[test]
    fn test_render_source_structure() {
        let set = sample_set();
        let source = render_source(&set.definition_fragments(), &Config::default());
        assert!(source.starts_with("#include \"ontology_bindings.h\""));
        assert!(source.contains("namespace oro {"));
        assert!(source.contains("const Class Classes::Thing = Class(\"owl:Thing\");"));
        assert!(source.trim_end().ends_with('}'));
    }
}
