//! `plainmark render` command implementation.

use std::path::PathBuf;

use clap::{Args, ValueEnum};
use plainmark_config::{CliSettings, Config, InputFormat};
use plainmark_renderer::{PlainTextRenderer, parse_markdown};

use super::input::{parse_tree, read_source, write_text};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Input file (default: stdin).
    file: Option<PathBuf>,

    /// Output file (default: stdout).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Input format (overrides config).
    #[arg(long, value_enum)]
    format: Option<FormatArg>,

    /// Read a JSON node tree instead of markdown (same as `--format json`).
    #[arg(long, conflicts_with = "format")]
    json: bool,

    /// Disable GitHub Flavored Markdown extensions.
    #[arg(long)]
    no_gfm: bool,

    /// Path to configuration file (default: auto-discover plainmark.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

/// Input format accepted on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum FormatArg {
    /// Markdown source.
    Markdown,
    /// Serialized node tree, as printed by `plainmark tree`.
    Json,
}

impl From<FormatArg> for InputFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Markdown => Self::Markdown,
            FormatArg::Json => Self::Json,
        }
    }
}

impl RenderArgs {
    /// Input format requested by flags, if any.
    fn input_format(&self) -> Option<InputFormat> {
        if self.json {
            Some(InputFormat::Json)
        } else {
            self.format.map(InputFormat::from)
        }
    }

    pub(crate) fn execute(self) -> Result<(), CliError> {
        let cli_settings = CliSettings {
            gfm: self.no_gfm.then_some(false),
            input_format: self.input_format(),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        if let Some(path) = &config.config_path {
            tracing::info!(path = %path.display(), "Loaded configuration");
        }

        let source = read_source(self.file.as_deref())?;
        let text = render_source(&config, &source)?;
        write_text(self.output.as_deref(), &text)?;

        if let Some(path) = &self.output {
            Output::new().success(&format!("Wrote {}", path.display()));
        }
        Ok(())
    }
}

/// Render `source` according to the configured input format.
fn render_source(config: &Config, source: &str) -> Result<String, CliError> {
    let renderer = PlainTextRenderer::new().with_gfm(config.markdown.gfm);
    let nodes = match config.input.format {
        InputFormat::Markdown => parse_markdown(source, renderer.parse_options()),
        InputFormat::Json => parse_tree(source)?,
    };
    tracing::info!(format = ?config.input.format, nodes = nodes.len(), "Rendering document");
    Ok(renderer.render(&nodes)?)
}
