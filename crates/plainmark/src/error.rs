//! CLI error types.

use plainmark_config::ConfigError;
use plainmark_renderer::RenderError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Render(#[from] RenderError),

    #[error("invalid node tree: {0}")]
    Json(#[from] serde_json::Error),
}
