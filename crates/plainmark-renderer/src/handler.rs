//! Node kind classification and the handler table.
//!
//! Every [`NodeKind`] is assigned a [`Class`] by an exhaustive match, so adding a
//! kind without deciding how it renders fails to compile. The [`HandlerTable`] is
//! seeded from that classification and then individual entries may be replaced by
//! custom handlers.

use std::fmt;
use std::sync::Arc;

use crate::context::RenderContext;
use crate::error::RenderError;
use crate::node::{Node, NodeKind};

/// Signature of a custom node handler.
///
/// Handlers receive the [`RenderContext`] of the ongoing render, which lets them
/// render child nodes and read the labels of the table being rendered.
pub type HandlerFn =
    dyn Fn(&mut RenderContext<'_>, &Node) -> Result<String, RenderError> + Send + Sync;

/// How a node kind renders by default.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Class {
    /// Renders to an empty string regardless of content.
    Suppressed,
    /// Renders children (or raw text) with no trailing separator.
    Inline,
    /// Renders HTML-escaped raw text followed by a blank line.
    EscapedBlock,
    /// Renders with kind-specific logic.
    Structural(Structural),
    /// Renders children (or raw text) followed by a blank line.
    Block,
}

/// Kinds with bespoke rendering logic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Structural {
    /// Items on their own lines, no markers.
    List,
    /// Trimmed block content on a new line.
    ListItem,
    /// Rows linearized into `label: value` lines.
    Table,
    /// Cells paired with the current header labels.
    TableRow,
    /// Inline content, recorded as a label for header cells.
    TableCell,
    /// Visible label only, target discarded.
    LinkOrImage,
    /// Inline content, collapsing to a leading link or image.
    Paragraph,
}

impl NodeKind {
    /// Default rendering class of the kind.
    #[must_use]
    pub const fn class(self) -> Class {
        match self {
            NodeKind::Space
            | NodeKind::HorizontalRule
            | NodeKind::Checkbox
            | NodeKind::LineBreak => Class::Suppressed,
            NodeKind::Strong
            | NodeKind::Emphasis
            | NodeKind::CodeSpan
            | NodeKind::Strikethrough
            | NodeKind::Text => Class::Inline,
            NodeKind::RawHtml | NodeKind::CodeBlock => Class::EscapedBlock,
            NodeKind::List => Class::Structural(Structural::List),
            NodeKind::ListItem => Class::Structural(Structural::ListItem),
            NodeKind::Table => Class::Structural(Structural::Table),
            NodeKind::TableRow => Class::Structural(Structural::TableRow),
            NodeKind::TableCell => Class::Structural(Structural::TableCell),
            NodeKind::Link | NodeKind::Image => Class::Structural(Structural::LinkOrImage),
            NodeKind::Paragraph => Class::Structural(Structural::Paragraph),
            NodeKind::Heading | NodeKind::Blockquote | NodeKind::Generic => Class::Block,
        }
    }
}

/// Entry of the handler table.
#[derive(Clone)]
pub(crate) enum Handler {
    Builtin(Class),
    Custom(Arc<HandlerFn>),
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Builtin(class) => f.debug_tuple("Builtin").field(class).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// One handler per node kind.
#[derive(Clone, Debug)]
pub(crate) struct HandlerTable {
    entries: [Handler; NodeKind::COUNT],
}

impl HandlerTable {
    /// Build the table with the default handler of every kind.
    pub(crate) fn new() -> Self {
        Self {
            entries: NodeKind::ALL.map(|kind| Handler::Builtin(kind.class())),
        }
    }

    /// Replace the handler for `kind`. Later calls win.
    pub(crate) fn set(&mut self, kind: NodeKind, handler: Arc<HandlerFn>) {
        self.entries[kind.index()] = Handler::Custom(handler);
    }

    /// Handler for `kind`.
    pub(crate) fn get(&self, kind: NodeKind) -> &Handler {
        &self.entries[kind.index()]
    }
}
