//! Default handlers for every rendering class.

use crate::context::RenderContext;
use crate::error::RenderError;
use crate::handler::{Class, Structural};
use crate::node::{Node, NodeKind};
use crate::table;
use crate::util::escape_html;

/// Separator appended after block-level output.
pub(crate) const BLOCK_SEPARATOR: &str = "\n\n";

/// Render `node` with the default handler of `class`.
pub(crate) fn render(
    class: Class,
    cx: &mut RenderContext<'_>,
    node: &Node,
) -> Result<String, RenderError> {
    match class {
        Class::Suppressed => Ok(String::new()),
        Class::Inline => content(cx, node),
        Class::EscapedBlock => {
            let mut out = escape_html(&node.text);
            out.push_str(BLOCK_SEPARATOR);
            Ok(out)
        }
        Class::Block => block(cx, node),
        Class::Structural(kind) => match kind {
            Structural::List => list(cx, node),
            Structural::ListItem => list_item(cx, node),
            Structural::Table => table::table(cx, node),
            Structural::TableRow => table::table_row(cx, node),
            Structural::TableCell => table::table_cell(cx, node),
            Structural::LinkOrImage => link_or_image(cx, node),
            Structural::Paragraph => paragraph(cx, node),
        },
    }
}

/// Children of `node` rendered in order, or its raw text for leaves.
pub(crate) fn content(cx: &mut RenderContext<'_>, node: &Node) -> Result<String, RenderError> {
    if node.children.is_empty() {
        Ok(node.text.clone())
    } else {
        cx.render_children(&node.children)
    }
}

fn block(cx: &mut RenderContext<'_>, node: &Node) -> Result<String, RenderError> {
    let mut out = content(cx, node)?;
    out.push_str(BLOCK_SEPARATOR);
    Ok(out)
}

fn paragraph(cx: &mut RenderContext<'_>, node: &Node) -> Result<String, RenderError> {
    match node.children.first() {
        // A paragraph led by a link or image renders as that node alone; the label
        // already carries the block separator.
        Some(first) if matches!(first.kind, NodeKind::Link | NodeKind::Image) => cx.render(first),
        _ => block(cx, node),
    }
}

fn link_or_image(cx: &mut RenderContext<'_>, node: &Node) -> Result<String, RenderError> {
    if node.href.is_none() {
        return Err(RenderError::missing(node.kind, "href"));
    }
    let mut out = if node.text.is_empty() {
        cx.render_children(&node.children)?
    } else {
        node.text.clone()
    };
    out.push_str(BLOCK_SEPARATOR);
    Ok(out)
}

fn list(cx: &mut RenderContext<'_>, node: &Node) -> Result<String, RenderError> {
    let items = node
        .items
        .as_deref()
        .ok_or_else(|| RenderError::missing(node.kind, "items"))?;

    let mut body = String::new();
    for item in items {
        body.push_str(&cx.render(item)?);
    }
    Ok(format!("\n{}{BLOCK_SEPARATOR}", body.trim()))
}

fn list_item(cx: &mut RenderContext<'_>, node: &Node) -> Result<String, RenderError> {
    let body = content(cx, node)?;
    Ok(format!("\n{}", body.trim()))
}
