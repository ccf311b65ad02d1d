use anyhow::Result;
use clap::Parser;
use log::info;
use ontobind::config::Config;
use ontobind::options::DroppedTermPolicy;
use ontobind::reader::OntologyDocument;
use ontobind::BindingGenerator;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "ontobind")]
#[command(about = "Generates typed constant bindings from an OWL ontology")]
#[command(arg_required_else_help = true)]
struct Cli {
    /// Path to the ontology document to generate bindings from
    ontology: PathBuf,
    /// Directory the generated artifacts are written to, defaults to the current directory
    #[clap(long, short, default_value = ".")]
    output_dir: PathBuf,
    /// Filename of the generated declarations header
    #[clap(long, default_value = "ontology_bindings.h")]
    header_name: String,
    /// Filename of the generated definitions source
    #[clap(long, default_value = "ontology_bindings.cpp")]
    source_name: String,
    /// Namespace the generated symbol tables are declared in
    #[clap(long, short, default_value = "oro")]
    namespace: String,
    /// Header of the runtime library defining the Class and Property types
    #[clap(long, default_value = "oro.h")]
    runtime_include: String,
    /// Label naming the ontology in the generated banners, defaults to the input filename
    #[clap(long, short)]
    label: Option<String>,
    /// Column at which term descriptions are reflowed
    #[clap(long, short, default_value = "70")]
    width: usize,
    /// Drop terms without a usable identifier silently instead of logging a warning
    #[clap(long, action, default_value = "false")]
    silent_dropped: bool,
    /// Read the generator configuration from a JSON file instead of the flags above
    #[clap(long, short)]
    config: Option<PathBuf>,
    /// Verbose mode - sets the RUST_LOG level to info, defaults to warning level
    #[clap(long, short, action, default_value = "false")]
    verbose: bool,
    /// Debug mode - sets the RUST_LOG level to debug, defaults to warning level
    #[clap(long, action, default_value = "false")]
    debug: bool,
}

fn main() -> Result<()> {
    let cmd = Cli::parse();

    let log_level = if cmd.verbose { "info" } else { "warn" };
    let log_level = if cmd.debug { "debug" } else { log_level };
    std::env::set_var("RUST_LOG", log_level);
    env_logger::init();

    let config = match &cmd.config {
        Some(path) => Config::from_file(path)?,
        None => {
            let label = cmd.label.clone().unwrap_or_else(|| {
                cmd.ontology
                    .file_name()
                    .and_then(|name| name.to_str())
                    .unwrap_or("ontology")
                    .to_string()
            });
            Config {
                namespace: cmd.namespace.clone(),
                runtime_include: cmd.runtime_include.clone(),
                header_filename: cmd.header_name.clone(),
                ontology_label: label,
                wrap_width: cmd.width,
                dropped_terms: DroppedTermPolicy::from(cmd.silent_dropped),
            }
        }
    };

    if cmd.verbose || cmd.debug {
        config.print();
    }

    let document = OntologyDocument::from_file(&cmd.ontology)?;
    info!(
        "Parsed {} triples from {}",
        document.len(),
        cmd.ontology.display()
    );

    let generator = BindingGenerator::new(config);
    let bindings = generator.bindings(&document);
    // render both artifacts fully before touching the filesystem so a
    // failure cannot leave a partial pair behind
    let artifacts = generator.render(&bindings);

    std::fs::create_dir_all(&cmd.output_dir)?;
    let header_path = cmd.output_dir.join(&generator.config().header_filename);
    let source_path = cmd.output_dir.join(&cmd.source_name);
    artifacts.write(&header_path, &source_path)?;

    println!(
        "Generated bindings for {} object properties, {} datatype properties and {} classes",
        bindings.object_properties().len(),
        bindings.datatype_properties().len(),
        bindings.classes().len()
    );
    println!("  {}", header_path.display());
    println!("  {}", source_path.display());

    Ok(())
}
