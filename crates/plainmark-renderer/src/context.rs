//! Render context threaded through every handler call.

use crate::builtin;
use crate::error::RenderError;
use crate::handler::{Class, Handler, HandlerTable};
use crate::node::Node;
use crate::state::HeaderStack;

/// State of one top-level render call.
///
/// A context is created for every call to
/// [`PlainTextRenderer::render`](crate::PlainTextRenderer::render) and handed to each
/// handler by mutable reference. Custom handlers use it to render child nodes through
/// the configured handler table and to inspect the header labels of the innermost
/// table being rendered.
pub struct RenderContext<'r> {
    handlers: &'r HandlerTable,
    headers: HeaderStack,
}

impl<'r> RenderContext<'r> {
    pub(crate) fn new(handlers: &'r HandlerTable) -> Self {
        Self {
            handlers,
            headers: HeaderStack::default(),
        }
    }

    /// Render a single node with the handler registered for its kind.
    pub fn render(&mut self, node: &Node) -> Result<String, RenderError> {
        let handlers = self.handlers;
        match handlers.get(node.kind) {
            Handler::Builtin(class) => builtin::render(*class, self, node),
            Handler::Custom(handler) => handler(self, node),
        }
    }

    /// Render a sequence of sibling nodes and concatenate the results.
    ///
    /// Inline nodes are written straight into the shared buffer without a separator;
    /// every other node goes through its handler and its output is appended as is.
    pub fn render_children(&mut self, children: &[Node]) -> Result<String, RenderError> {
        let mut out = String::new();
        for child in children {
            self.render_into(child, &mut out)?;
        }
        Ok(out)
    }

    /// Label of each column of the innermost table being rendered.
    ///
    /// Empty outside of a table.
    pub fn header_labels(&self) -> &[String] {
        self.headers.labels()
    }

    /// Record a header label for the innermost table being rendered.
    pub fn record_header_label(&mut self, label: impl Into<String>) {
        self.headers.record(label.into());
    }

    /// Number of tables enclosing the node being rendered.
    pub fn table_depth(&self) -> usize {
        self.headers.depth()
    }

    /// Run `f` with a fresh header frame, restoring the enclosing table's labels
    /// afterwards whether or not `f` succeeds.
    pub(crate) fn with_header_frame<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, RenderError>,
    ) -> Result<T, RenderError> {
        self.headers.push();
        let result = f(self);
        self.headers.pop();
        result
    }

    fn render_into(&mut self, node: &Node, out: &mut String) -> Result<(), RenderError> {
        let handlers = self.handlers;
        match handlers.get(node.kind) {
            Handler::Builtin(Class::Inline) => {
                if node.children.is_empty() {
                    out.push_str(&node.text);
                } else {
                    for child in &node.children {
                        self.render_into(child, out)?;
                    }
                }
            }
            _ => out.push_str(&self.render(node)?),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeKind;
    use std::sync::Arc;

    #[test]
    fn test_render_children_concatenates_inline_without_separator() {
        let table = HandlerTable::new();
        let mut cx = RenderContext::new(&table);
        let children = vec![
            Node::strong(vec![Node::text("a")]),
            Node::text("b"),
            Node::emphasis(vec![Node::code_span("c")]),
        ];
        assert_eq!(cx.render_children(&children).unwrap(), "abc");
    }

    #[test]
    fn test_render_children_keeps_block_separators() {
        let table = HandlerTable::new();
        let mut cx = RenderContext::new(&table);
        let children = vec![Node::text("a"), Node::code_block("x < y")];
        assert_eq!(cx.render_children(&children).unwrap(), "ax &lt; y\n\n");
    }

    #[test]
    fn test_inline_override_is_used_inside_children() {
        let mut table = HandlerTable::new();
        table.set(
            NodeKind::CodeSpan,
            Arc::new(
                |_: &mut RenderContext<'_>, node: &Node| -> Result<String, RenderError> {
                    Ok(format!("`{}`", node.text))
                },
            ),
        );
        let mut cx = RenderContext::new(&table);
        let children = vec![Node::text("run "), Node::code_span("ls")];
        assert_eq!(cx.render_children(&children).unwrap(), "run `ls`");
    }

    #[test]
    fn test_header_frame_restored_after_error() {
        let table = HandlerTable::new();
        let mut cx = RenderContext::new(&table);
        cx.with_header_frame(|cx| {
            cx.record_header_label("Outer");
            let inner: Result<(), RenderError> = cx.with_header_frame(|cx| {
                cx.record_header_label("Inner");
                Err(RenderError::Custom("boom".into()))
            });
            assert!(inner.is_err());
            assert_eq!(cx.header_labels(), ["Outer"]);
            Ok(())
        })
        .unwrap();
        assert_eq!(cx.table_depth(), 0);
        assert!(cx.header_labels().is_empty());
    }
}
