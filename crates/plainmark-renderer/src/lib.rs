//! Plain-text renderer for markdown document trees.
//!
//! This crate turns a tree of [`Node`]s into readable plain text: markup is dropped,
//! link and image targets are discarded, code and raw HTML are escaped, lists become
//! one item per line and tables are linearized into `label: value` lines.
//!
//! # Architecture
//!
//! Each [`NodeKind`] has a default [`Class`] that decides how it renders. The
//! [`PlainTextRenderer`] keeps a handler table seeded from those classes; any entry
//! can be replaced with a custom handler via
//! [`PlainTextRenderer::with_handler`]. Handlers receive a [`RenderContext`] that
//! renders children through the same table and exposes the header labels of the
//! innermost table.
//!
//! Markdown input is parsed with pulldown-cmark and converted into nodes by
//! [`parse_markdown`] or [`from_events`].
//!
//! # Example
//!
//! ```
//! use plainmark_renderer::PlainTextRenderer;
//!
//! let markdown = "# Hello\n\n**Bold** text";
//! let text = PlainTextRenderer::new().render_markdown(markdown).unwrap();
//! assert_eq!(text, "Hello\n\nBold text\n\n");
//! ```

mod builtin;
mod context;
mod error;
mod handler;
mod node;
mod parse;
mod renderer;
mod state;
mod table;
mod util;

pub use context::RenderContext;
pub use error::RenderError;
pub use handler::{Class, HandlerFn, Structural};
pub use node::{Node, NodeKind};
pub use parse::{ParseOptions, from_events, parse_markdown};
pub use renderer::PlainTextRenderer;
pub use util::escape_html;
