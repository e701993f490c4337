//! Table linearization.
//!
//! Plain text has no columns, so each body row becomes a run of `label: value`
//! lines where the labels come from the table's header cells:
//!
//! ```text
//! | Name | Age |        Name: Ann
//! |------|-----|   ->   Age: 30
//! | Ann  | 30  |
//! ```
//!
//! Header labels live in a frame pushed on the [`RenderContext`] for the duration of
//! one table, so a table nested inside a cell uses its own labels and the outer
//! table picks up its own again once the inner one is done.

use crate::builtin::{BLOCK_SEPARATOR, content};
use crate::context::RenderContext;
use crate::error::RenderError;
use crate::node::Node;

pub(crate) fn table(cx: &mut RenderContext<'_>, node: &Node) -> Result<String, RenderError> {
    let header = node
        .header
        .as_deref()
        .ok_or_else(|| RenderError::missing(node.kind, "header"))?;
    let rows = node
        .rows
        .as_deref()
        .ok_or_else(|| RenderError::missing(node.kind, "rows"))?;

    tracing::debug!(
        columns = header.len(),
        rows = rows.len(),
        depth = cx.table_depth(),
        "Rendering table"
    );

    cx.with_header_frame(|cx| {
        // Header cells only record their labels; their text is not emitted.
        for cell in header {
            cx.render(cell)?;
        }

        let mut out = String::new();
        for row in rows {
            out.push_str(&cx.render(row)?);
        }
        Ok(out)
    })
}

pub(crate) fn table_row(cx: &mut RenderContext<'_>, node: &Node) -> Result<String, RenderError> {
    let mut values = Vec::with_capacity(node.children.len());
    for cell in &node.children {
        values.push(cx.render(cell)?);
    }
    Ok(linearize_row(cx.header_labels(), &values))
}

pub(crate) fn table_cell(cx: &mut RenderContext<'_>, node: &Node) -> Result<String, RenderError> {
    let text = content(cx, node)?;
    if node.header_cell {
        cx.record_header_label(text.as_str());
    }
    Ok(text)
}

/// Pair cell values with header labels as `label: value` lines.
///
/// Pairing is positional and stops at the shorter of the two sequences. Empty
/// values are skipped without shifting later cells onto the wrong label. Dropping
/// empty values before pairing would move every later value onto an earlier label.
fn linearize_row(labels: &[String], values: &[String]) -> String {
    // TODO: label cells beyond the header positionally instead of dropping them.
    if values.len() > labels.len() {
        tracing::warn!(
            cells = values.len(),
            columns = labels.len(),
            "Table row has more cells than header columns, extra cells dropped"
        );
    }

    let mut out = labels
        .iter()
        .zip(values)
        .filter(|(_, value)| !value.is_empty())
        .map(|(label, value)| format!("{label}: {value}"))
        .collect::<Vec<_>>()
        .join("\n");
    out.push_str(BLOCK_SEPARATOR);
    out
}
