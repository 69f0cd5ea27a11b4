//! Minimal CLI: schema file → GBNF file
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use tracing::info;

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// Convert a JSON Schema (JSON or YAML) into a GBNF grammar
#[derive(Parser, Debug)]
#[command(name = "schema-gbnf", version)]
pub struct CommandLineInterface {
    /// input schema file (.json, .yaml or .yml)
    pub input: PathBuf,

    /// output GBNF file; parent directories are created
    pub output: PathBuf,

    /// format output with indentation
    #[arg(long, default_value_t = false)]
    pub pretty: bool,

    /// debug logging (overridden by RUST_LOG)
    #[arg(long, short, default_value_t = false)]
    pub verbose: bool,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }
    pub fn run(&self) -> anyhow::Result<()> {
        // 1) load
        let schema = crate::load::load_schema(&self.input)?;

        // 2) compile
        let mut grammar = crate::gbnf::compile(&schema)
            .context("error processing schema")?;

        // 3) optional cosmetics
        if self.pretty {
            grammar = crate::pretty::prettify(&grammar);
        }

        // 4) persist
        save_grammar(&grammar, &self.output)?;
        info!(input = %self.input.display(), output = %self.output.display(), "conversion complete");
        println!(
            "Successfully converted {} to GBNF format at {}",
            self.input.display(),
            self.output.display(),
        );
        Ok(())
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

/// Plain overwrite; parent directories are created first.
fn save_grammar(grammar: &str, out: &Path) -> anyhow::Result<()> {
    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(out, grammar).with_context(|| format!("failed to write {}", out.display()))
}
