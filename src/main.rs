//! implgen command line
//!
//! Generates, compiles and packages default implementations of interfaces.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::process;

use anyhow::Context;
use implgen::backend::Javac;
use implgen::driver::report::{to_json, ErrorReport};
use implgen::frontend::{ManifestIntrospector, DEFAULT_MANIFEST};
use implgen::{Error, Implementor, SourceOutcome};

/// implgen
#[derive(Parser, Debug)]
#[command(name = "implgen")]
#[command(author = "Z1529")]
#[command(version = "0.1.0")]
#[command(about = "Generate default implementations of Java interfaces")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Type manifest to load (repeatable, defaults to ./implgen.json)
    #[arg(short, long = "manifest", value_name = "FILE", global = true)]
    manifests: Vec<PathBuf>,

    /// Output format for reports
    #[arg(long, value_enum, default_value = "text", global = true)]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write the implementation source under a root directory
    Source {
        /// Canonical interface name, e.g. geo.Shape
        #[arg(value_name = "TYPE")]
        type_name: String,

        /// Output root; the package becomes subdirectories
        #[arg(short, long, value_name = "DIR", default_value = ".")]
        output: PathBuf,
    },
    /// Compile the implementation and package it into a jar
    Jar {
        /// Canonical interface name
        #[arg(value_name = "TYPE")]
        type_name: String,

        /// Jar file to create
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,

        /// Compiler binary (defaults to $IMPLGEN_JAVAC, then javac)
        #[arg(long, value_name = "PATH")]
        javac: Option<PathBuf>,
    },
    /// List the abstract methods that would be implemented
    Methods {
        /// Canonical interface name
        #[arg(value_name = "TYPE")]
        type_name: String,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        match (cli.format, e.downcast_ref::<Error>()) {
            (OutputFormat::Json, Some(error)) => println!("{}", to_json(&ErrorReport::from(error))),
            _ => {
                eprintln!("Error: {:#}", e);
                if let Some(diagnostics) = e.downcast_ref::<Error>().and_then(Error::diagnostics) {
                    eprintln!("{}", diagnostics);
                }
            }
        }
        process::exit(1);
    }
}

fn load_manifests(paths: &[PathBuf]) -> anyhow::Result<ManifestIntrospector> {
    let defaults = [PathBuf::from(DEFAULT_MANIFEST)];
    let paths = if paths.is_empty() { &defaults[..] } else { paths };
    let introspector = ManifestIntrospector::from_files(paths)
        .with_context(|| format!("loading {}", display_paths(paths)))?;
    log::debug!("Loaded {} types", introspector.type_count());
    Ok(introspector)
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths.iter().map(|p| p.display().to_string()).collect::<Vec<_>>().join(", ")
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let introspector = load_manifests(&cli.manifests)?;

    match &cli.command {
        Commands::Source { type_name, output } => {
            let implementor = Implementor::new(introspector, Javac::from_env());
            let outcome = implementor.generate_source(type_name, output)?;
            match (cli.format, &outcome) {
                (OutputFormat::Json, _) => println!("{}", to_json(&outcome)),
                (OutputFormat::Text, SourceOutcome::Written { path, method_count, .. }) => {
                    println!("Generated {} ({} methods)", path.display(), method_count);
                }
                (OutputFormat::Text, SourceOutcome::WriteFailed { path, cause }) => {
                    println!("Could not create file {}: {}", path.display(), cause);
                }
            }
        }
        Commands::Jar { type_name, output, javac } => {
            let compiler = javac.as_deref().map(Javac::new).unwrap_or_else(Javac::from_env);
            let implementor = Implementor::new(introspector, compiler);
            let report = implementor.generate_archive(type_name, output)?;
            match cli.format {
                OutputFormat::Json => println!("{}", to_json(&report)),
                OutputFormat::Text => {
                    println!("Packaged {} into {}", report.entry_name, report.artifact.display());
                    for failure in &report.cleanup_failures {
                        println!("  [!] {}", failure);
                    }
                }
            }
        }
        Commands::Methods { type_name } => {
            let implementor = Implementor::new(introspector, Javac::from_env());
            let report = implementor.methods(type_name)?;
            match cli.format {
                OutputFormat::Json => println!("{}", to_json(&report)),
                OutputFormat::Text => {
                    println!("{} ({} abstract methods)", report.interface, report.methods.len());
                    for method in &report.methods {
                        let params: Vec<_> = method
                            .parameters
                            .iter()
                            .map(|p| format!("{} {}", p.ty, p.name))
                            .collect();
                        println!("  {} {}({})", method.return_type, method.name, params.join(", "));
                    }
                }
            }
        }
    }
    Ok(())
}
