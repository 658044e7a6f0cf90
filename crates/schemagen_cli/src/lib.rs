//! Command-line interface for schemagen.
//!
//! # Usage
//!
//! ```bash
//! # Print the schema for a class manifest
//! schemagen generate classes.json
//!
//! # Write it to a file, treating `*Args` classes as input types
//! schemagen generate classes.json -o schema.graphql --input-suffix Args
//!
//! # Only report resolution errors
//! schemagen check classes.json
//! ```
//!
//! A manifest is JSON: the classes, the roots to generate and an optional
//! `config` section.
//!
//! ```json
//! {
//!   "config": { "input_suffix": "Input", "scalars": { "Url": "String" } },
//!   "classes": [
//!     { "name": "User", "members": [ { "name": "id", "type": "i64" } ] }
//!   ],
//!   "roots": ["User"]
//! }
//! ```

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use schemagen_core::{ClassManifest, ManifestError};
use schemagen_resolver::{
    GeneratedSchema, PrintOptions, SchemaConfig, SchemaGenerator, SchemaPrinter, TypeDefinition,
};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "schemagen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// GraphQL SDL
    #[default]
    Sdl,
    /// The definitions as JSON
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a schema from a class manifest
    Generate {
        /// Manifest file path
        manifest: PathBuf,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Name suffix that marks input types
        #[arg(long)]
        input_suffix: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "sdl")]
        format: OutputFormat,

        /// Indentation size
        #[arg(long, default_value = "2")]
        indent: usize,

        /// Use tabs instead of spaces
        #[arg(long)]
        tabs: bool,
    },

    /// Resolve a class manifest and report errors
    Check {
        /// Manifest file path
        manifest: PathBuf,

        /// Name suffix that marks input types
        #[arg(long)]
        input_suffix: Option<String>,
    },

    /// Print version information
    Version,
}

/// A manifest file: classes and roots plus the schema configuration.
#[derive(Debug, Default, Deserialize)]
pub struct ManifestFile {
    #[serde(default)]
    pub config: SchemaConfig,
    #[serde(flatten)]
    pub manifest: ClassManifest,
}

impl ManifestFile {
    /// Parses a manifest file from JSON.
    pub fn from_json(source: &str) -> Result<Self, ManifestError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Overrides the input suffix of the configuration.
    #[must_use]
    pub fn with_input_suffix(mut self, suffix: Option<String>) -> Self {
        if let Some(suffix) = suffix {
            self.config.input_suffix = suffix;
        }
        self
    }

    /// Loads the classes and generates the schema for the roots.
    pub fn generate(&self) -> Result<GeneratedSchema, ManifestError> {
        let loaded = self.manifest.load()?;
        tracing::debug!(
            classes = loaded.registry.len(),
            roots = loaded.roots.len(),
            "loaded manifest"
        );
        Ok(SchemaGenerator::new(&loaded.registry, &self.config).generate(&loaded.roots))
    }
}

/// Renders the definitions of a generated schema.
pub fn render(
    schema: &GeneratedSchema,
    format: OutputFormat,
    options: PrintOptions,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Sdl => {
            Ok(SchemaPrinter::new(options).print_schema(schema.definitions.iter().map(|def| &**def)))
        }
        OutputFormat::Json => {
            let definitions: Vec<&TypeDefinition> =
                schema.definitions.iter().map(|def| &**def).collect();
            let mut json = serde_json::to_string_pretty(&definitions)?;
            json.push('\n');
            Ok(json)
        }
    }
}

pub fn run(cli: Cli) -> Result<i32, Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Generate {
            manifest,
            output,
            input_suffix,
            format,
            indent,
            tabs,
        } => {
            let options = PrintOptions {
                indent_size: indent,
                use_tabs: tabs,
            };
            generate(
                &manifest,
                output.as_deref(),
                input_suffix,
                format,
                options,
                cli.quiet,
            )
        }
        Commands::Check {
            manifest,
            input_suffix,
        } => check(&manifest, input_suffix, cli.verbose, cli.quiet),
        Commands::Version => {
            println!("schemagen {}", env!("CARGO_PKG_VERSION"));
            Ok(0)
        }
    }
}

fn read_manifest(
    path: &Path,
    input_suffix: Option<String>,
) -> Result<ManifestFile, Box<dyn std::error::Error>> {
    let source = std::fs::read_to_string(path)?;
    Ok(ManifestFile::from_json(&source)?.with_input_suffix(input_suffix))
}

fn generate(
    manifest: &Path,
    output: Option<&Path>,
    input_suffix: Option<String>,
    format: OutputFormat,
    options: PrintOptions,
    quiet: bool,
) -> Result<i32, Box<dyn std::error::Error>> {
    let schema = read_manifest(manifest, input_suffix)?.generate()?;
    report_errors(&schema);

    let rendered = render(&schema, format, options)?;
    match output {
        Some(path) => {
            std::fs::write(path, &rendered)?;
            if !quiet {
                println!(
                    "{} {} type(s) to {}",
                    "Generated".green(),
                    schema.definitions.len(),
                    path.display()
                );
            }
        }
        None => print!("{rendered}"),
    }

    Ok(exit_code(&schema))
}

fn check(
    manifest: &Path,
    input_suffix: Option<String>,
    verbose: bool,
    quiet: bool,
) -> Result<i32, Box<dyn std::error::Error>> {
    if verbose {
        println!("{} {}", "Checking".blue(), manifest.display());
    }

    let schema = read_manifest(manifest, input_suffix)?.generate()?;
    report_errors(&schema);

    if verbose {
        for def in &schema.definitions {
            println!("{} {}", "OK".green(), def.name());
        }
    }
    if schema.is_ok() && !quiet {
        println!(
            "{} {} root(s) resolved, {} skipped",
            "Success:".green().bold(),
            schema.resolved.len(),
            schema.skipped.len()
        );
    }

    Ok(exit_code(&schema))
}

fn report_errors(schema: &GeneratedSchema) {
    for root in &schema.errors {
        eprintln!("{} {}", "Error".red().bold(), root);
        eprintln!("{:?}", miette::Report::new(root.error.clone()));
    }
}

fn exit_code(schema: &GeneratedSchema) -> i32 {
    i32::from(!schema.is_ok())
}
