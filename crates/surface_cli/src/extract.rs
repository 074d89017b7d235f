//! The extraction command
//!
//! Merges the optional config file with command line overrides, runs the
//! extractor over every input and prints the diagnostics summary.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use surface_docs::{ExtractConfig, ExtractOutput, Extractor};
use tracing::debug;

/// Generate declaration-only API surfaces from module metadata
#[derive(Debug, Parser)]
#[command(name = "extract-surface", version, about)]
pub struct ExtractArgs {
    /// Module documents (*.json) or directories containing them
    #[arg(required = true, value_name = "INPUT")]
    pub inputs: Vec<PathBuf>,

    /// Output directory
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Configuration file (TOML)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Base URL for reference documentation links
    #[arg(long, value_name = "URL")]
    pub doc_url_base: Option<String>,

    /// Additional reference module whose types are foreign (repeatable)
    #[arg(short = 'r', long = "reference", value_name = "MODULE")]
    pub references: Vec<String>,
}

impl ExtractArgs {
    /// Build the effective configuration
    pub fn to_config(&self) -> Result<ExtractConfig> {
        let mut config = match self.config {
            Some(ref path) => ExtractConfig::load(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => ExtractConfig::default(),
        };

        if let Some(ref output) = self.output {
            config = config.with_output_dir(output);
        }
        if let Some(ref base) = self.doc_url_base {
            config = config.with_doc_url_base(base);
        }
        for module in &self.references {
            config = config.with_reference_module(module);
        }

        config.validate()?;
        Ok(config)
    }
}

/// Run the extract command
pub fn run(args: ExtractArgs) -> Result<()> {
    let output = extract(&args)?;

    println!(
        "Generated {} module(s): {} types, {} placeholders -> {}",
        output.modules.len(),
        output.type_count(),
        output.placeholder_count(),
        output.output_dir.display()
    );
    for module in &output.skipped_modules {
        println!("Skipped duplicate module in {}", module);
    }

    Ok(())
}

/// Run the extractor and report diagnostics, success or not
fn extract(args: &ExtractArgs) -> Result<ExtractOutput> {
    let config = args.to_config()?;
    debug!(?config, "extract.config");

    let mut extractor = Extractor::new(config);
    let result = extractor.run(&args.inputs);

    extractor.diagnostics().print();
    extractor.diagnostics().print_summary();

    result.context("surface extraction failed")
}
