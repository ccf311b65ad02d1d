//! Defines the configuration for a generation run: the shape of the emitted
//! artifacts and the extraction knobs.

use crate::consts::DEFAULT_WRAP_WIDTH;
use crate::options::DroppedTermPolicy;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::{BufReader, Write};
use std::path::Path;

fn default_wrap_width() -> usize {
    DEFAULT_WRAP_WIDTH
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
    /// Namespace the generated symbol tables are declared in.
    pub namespace: String,
    /// Header of the runtime library that defines the `Class` and `Property`
    /// types the generated constants are built from.
    pub runtime_include: String,
    /// Filename of the generated declarations header. Also used for the
    /// definitions artifact's `#include` and to derive the guard macro.
    pub header_filename: String,
    /// Name of the source ontology, used in the generated banner comments.
    pub ontology_label: String,
    // column at which descriptions are reflowed
    #[serde(default = "default_wrap_width")]
    pub wrap_width: usize,
    // what to do with elements that yield no usable identifier
    #[serde(default)]
    pub dropped_terms: DroppedTermPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            namespace: "oro".to_string(),
            runtime_include: "oro.h".to_string(),
            header_filename: "ontology_bindings.h".to_string(),
            ontology_label: "ontology".to_string(),
            wrap_width: DEFAULT_WRAP_WIDTH,
            dropped_terms: DroppedTermPolicy::default(),
        }
    }
}

impl Config {
    /// The include-guard macro derived from the header filename, e.g.
    /// `ontology_bindings.h` becomes `ONTOLOGY_BINDINGS_H_`.
    pub fn guard_macro(&self) -> String {
        let mut guard: String = self
            .header_filename
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() {
                    c.to_ascii_uppercase()
                } else {
                    '_'
                }
            })
            .collect();
        guard.push('_');
        guard
    }

    pub fn save_to_file(&self, file: &Path) -> Result<()> {
        let config_str = serde_json::to_string_pretty(&self)?;
        let mut file = std::fs::File::create(file)?;
        file.write_all(config_str.as_bytes())?;
        Ok(())
    }

    pub fn from_file(file: &Path) -> Result<Self> {
        let file = std::fs::File::open(file)?;
        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)?;
        Ok(config)
    }

    /// Prints out the current Config in a clear and readable way for command
    /// line output.
    pub fn print(&self) {
        println!("Configuration:");
        println!("  Namespace: {}", self.namespace);
        println!("  Runtime Include: {}", self.runtime_include);
        println!("  Header Filename: {}", self.header_filename);
        println!("  Ontology Label: {}", self.ontology_label);
        println!("  Wrap Width: {}", self.wrap_width);
        println!("  Dropped Terms: {:?}", self.dropped_terms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_macro() {
        let config = Config::default();
        assert_eq!(config.guard_macro(), "ONTOLOGY_BINDINGS_H_");

        let config = Config {
            header_filename: "oro_library.h".to_string(),
            ..Config::default()
        };
        assert_eq!(config.guard_macro(), "ORO_LIBRARY_H_");
    }

    #[test]
    fn test_config_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let config = Config {
            namespace: "robots".to_string(),
            wrap_width: 60,
            ..Config::default()
        };
        config.save_to_file(&path).unwrap();
        let loaded = Config::from_file(&path).unwrap();
        assert_eq!(config, loaded);
    }
}
