//! `plainmark tree` command implementation.

use std::path::PathBuf;

use clap::Args;
use plainmark_config::{CliSettings, Config};
use plainmark_renderer::{ParseOptions, parse_markdown};

use super::input::{read_source, write_text};
use crate::error::CliError;

/// Arguments for the tree command.
#[derive(Args)]
pub(crate) struct TreeArgs {
    /// Markdown input file (default: stdin).
    file: Option<PathBuf>,

    /// Disable GitHub Flavored Markdown extensions.
    #[arg(long)]
    no_gfm: bool,

    /// Path to configuration file (default: auto-discover plainmark.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl TreeArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let cli_settings = CliSettings {
            gfm: self.no_gfm.then_some(false),
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let source = read_source(self.file.as_deref())?;
        let mut json = tree_json(&source, config.markdown.gfm)?;
        json.push('\n');
        write_text(None, &json)?;
        Ok(())
    }
}

/// Parse markdown and serialize the node tree as pretty-printed JSON.
fn tree_json(source: &str, gfm: bool) -> Result<String, CliError> {
    let nodes = parse_markdown(source, ParseOptions { gfm });
    Ok(serde_json::to_string_pretty(&nodes)?)
}
