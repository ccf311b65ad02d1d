use std::fs;
use std::path::PathBuf;
use std::process::Command;

fn ontobind_bin() -> PathBuf {
    let mut p = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("target")
        .join("debug")
        .join(if cfg!(windows) {
            "ontobind.exe"
        } else {
            "ontobind"
        });
    if !p.exists() {
        p = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("target")
            .join("release")
            .join(if cfg!(windows) {
                "ontobind.exe"
            } else {
                "ontobind"
            });
    }
    assert!(p.exists(), "ontobind binary not found at {:?}", p);
    p
}

fn tmp_dir(name: &str) -> PathBuf {
    let mut base = std::env::temp_dir();
    base.push(format!("ontobind-cli-{}-{}", name, std::process::id()));
    if base.exists() {
        let _ = fs::remove_dir_all(&base);
    }
    fs::create_dir_all(&base).unwrap();
    base
}

fn write_owl(path: &PathBuf) {
    let content = r##"<?xml version="1.0"?>
<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
         xmlns:rdfs="http://www.w3.org/2000/01/rdf-schema#"
         xmlns:owl="http://www.w3.org/2002/07/owl#"
         xml:base="http://example.org/robots.owl">
  <owl:Class rdf:about="#Robot"/>
  <owl:ObjectProperty rdf:about="#has-Part">
    <rdfs:comment>A part of the robot.</rdfs:comment>
  </owl:ObjectProperty>
</rdf:RDF>
"##;
    fs::write(path, content).expect("write owl");
}

#[test]
fn test_generate_writes_both_artifacts() {
    let dir = tmp_dir("generate");
    let ontology = dir.join("robots.owl");
    write_owl(&ontology);
    let out = dir.join("generated");

    let status = Command::new(ontobind_bin())
        .arg(&ontology)
        .arg("--output-dir")
        .arg(&out)
        .status()
        .expect("run ontobind");
    assert!(status.success());

    let header = fs::read_to_string(out.join("ontology_bindings.h")).unwrap();
    let source = fs::read_to_string(out.join("ontology_bindings.cpp")).unwrap();
    assert!(header.contains("static const Class Robot;"));
    assert!(header.contains("static const Property has_Part;"));
    assert!(source.contains("const Class Classes::Thing = Class(\"owl:Thing\");"));
    assert!(source.contains("const Property Properties::has_Part = Property(\"has_Part\");"));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_malformed_ontology_produces_no_output() {
    let dir = tmp_dir("malformed");
    let ontology = dir.join("broken.owl");
    fs::write(&ontology, "<rdf:RDF><owl:Class").unwrap();
    let out = dir.join("generated");

    let status = Command::new(ontobind_bin())
        .arg(&ontology)
        .arg("--output-dir")
        .arg(&out)
        .status()
        .expect("run ontobind");
    assert!(!status.success());
    assert!(!out.join("ontology_bindings.h").exists());
    assert!(!out.join("ontology_bindings.cpp").exists());

    let _ = fs::remove_dir_all(&dir);
}
