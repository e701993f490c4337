//! Plain-text renderer with per-kind handler overrides.

use std::sync::Arc;

use crate::context::RenderContext;
use crate::error::RenderError;
use crate::handler::HandlerTable;
use crate::node::{Node, NodeKind};
use crate::parse::{ParseOptions, parse_markdown};

/// Renders document trees to plain text.
///
/// Every [`NodeKind`] has a default handler. Individual handlers can be replaced with
/// [`with_handler`](Self::with_handler); a custom handler fully replaces the default
/// for its kind, and registering a second handler for the same kind replaces the
/// first.
///
/// The renderer holds no per-render state. Each call to [`render`](Self::render)
/// gets its own [`RenderContext`], so one renderer can be shared across threads.
#[derive(Clone, Debug)]
pub struct PlainTextRenderer {
    handlers: HandlerTable,
    parse_options: ParseOptions,
}

impl PlainTextRenderer {
    /// Create a renderer with the default handlers and GFM enabled.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlers: HandlerTable::new(),
            parse_options: ParseOptions::default(),
        }
    }

    /// Replace the handler for `kind`.
    ///
    /// # Example
    ///
    /// ```
    /// use plainmark_renderer::{Node, NodeKind, PlainTextRenderer};
    ///
    /// let renderer = PlainTextRenderer::new().with_handler(NodeKind::Link, |cx, node| {
    ///     let label = cx.render_children(&node.children)?;
    ///     let href = node.href.as_deref().unwrap_or_default();
    ///     Ok(format!("{label} <{href}>"))
    /// });
    ///
    /// let link = Node::link("https://example.com", vec![Node::text("Example")]);
    /// let text = renderer.render(&[Node::paragraph(vec![Node::text("See "), link])]).unwrap();
    /// assert_eq!(text, "See Example <https://example.com>\n\n");
    /// ```
    #[must_use]
    pub fn with_handler<F>(mut self, kind: NodeKind, handler: F) -> Self
    where
        F: Fn(&mut RenderContext<'_>, &Node) -> Result<String, RenderError>
            + Send
            + Sync
            + 'static,
    {
        self.handlers.set(kind, Arc::new(handler));
        self
    }

    /// Enable or disable GitHub Flavored Markdown for [`render_markdown`](Self::render_markdown).
    ///
    /// GFM is enabled by default. When enabled, the parser supports:
    /// - Tables
    /// - Strikethrough (`~~text~~`)
    /// - Task lists (`- [ ] item`)
    #[must_use]
    pub fn with_gfm(mut self, enabled: bool) -> Self {
        self.parse_options.gfm = enabled;
        self
    }

    /// Get parser options based on GFM configuration.
    #[must_use]
    pub fn parse_options(&self) -> ParseOptions {
        self.parse_options
    }

    /// Render a sequence of top-level nodes.
    pub fn render(&self, nodes: &[Node]) -> Result<String, RenderError> {
        let mut cx = RenderContext::new(&self.handlers);
        let text = cx.render_children(nodes)?;
        tracing::debug!(nodes = nodes.len(), bytes = text.len(), "Rendered plain text");
        Ok(text)
    }

    /// Render a single node.
    pub fn render_node(&self, node: &Node) -> Result<String, RenderError> {
        RenderContext::new(&self.handlers).render(node)
    }

    /// Parse markdown with the configured options and render it.
    pub fn render_markdown(&self, markdown: &str) -> Result<String, RenderError> {
        let nodes = parse_markdown(markdown, self.parse_options);
        self.render(&nodes)
    }
}

impl Default for PlainTextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render_md(markdown: &str) -> String {
        PlainTextRenderer::new().render_markdown(markdown).unwrap()
    }

    #[test]
    fn test_document_tree() {
        let nodes = vec![
            Node::heading(1, vec![Node::text("Title")]),
            Node::paragraph(vec![
                Node::text("Hello "),
                Node::strong(vec![Node::text("world")]),
            ]),
            Node::list(
                false,
                vec![
                    Node::list_item(vec![Node::text("one")]),
                    Node::list_item(vec![Node::text("two")]),
                ],
            ),
        ];
        assert_eq!(
            PlainTextRenderer::new().render(&nodes).unwrap(),
            "Title\n\nHello world\n\n\none\ntwo\n\n"
        );
    }

    #[test]
    fn test_code_is_escaped_once() {
        let text = PlainTextRenderer::new().render(&[Node::code_block("&lt;")]).unwrap();
        assert_eq!(text, "&amp;lt;\n\n");
    }

    #[test]
    fn test_cell_content_with_pipes_stays_in_its_cell() {
        let table = Node::table(
            vec![
                Node::header_cell(vec![Node::text("Expr")]),
                Node::header_cell(vec![Node::text("Kind")]),
            ],
            vec![Node::table_row(vec![
                Node::table_cell(vec![Node::code_span("a | b")]),
                Node::table_cell(vec![Node::text("or")]),
            ])],
        );
        assert_eq!(
            PlainTextRenderer::new().render_node(&table).unwrap(),
            "Expr: a | b\nKind: or\n\n"
        );
    }

    #[test]
    fn test_malformed_node_aborts_render() {
        let mut table = Node::table(Vec::new(), Vec::new());
        table.header = None;
        let err = PlainTextRenderer::new()
            .render(&[Node::paragraph(vec![Node::text("before")]), table])
            .unwrap_err();
        assert_eq!(
            err,
            RenderError::MalformedNode {
                kind: NodeKind::Table,
                field: "header"
            }
        );
    }

    #[test]
    fn test_basic_paragraph() {
        assert_eq!(render_md("Hello, world!"), "Hello, world!\n\n");
    }

    #[test]
    fn test_heading_and_paragraph() {
        assert_eq!(render_md("# Title\n\nHello **world**"), "Title\n\nHello world\n\n");
    }

    #[test]
    fn test_emphasis_and_strikethrough() {
        assert_eq!(render_md("*italic*, **bold** and ~~gone~~"), "italic, bold and gone\n\n");
    }

    #[test]
    fn test_inline_code_is_not_escaped() {
        assert_eq!(render_md("Use `a < b`"), "Use a < b\n\n");
    }

    #[test]
    fn test_code_block_is_escaped() {
        assert_eq!(render_md("```html\n<p>Hi</p>\n```"), "&lt;p&gt;Hi&lt;/p&gt;\n\n\n");
    }

    #[test]
    fn test_html_block_is_one_escaped_block() {
        assert_eq!(render_md("<div>\nhi\n</div>\n"), "&lt;div&gt;\nhi\n&lt;/div&gt;\n\n\n");
    }

    #[test]
    fn test_list() {
        assert_eq!(render_md("- one\n- two"), "\none\ntwo\n\n");
    }

    #[test]
    fn test_task_list_drops_checkbox() {
        assert_eq!(render_md("- [ ] todo\n- [x] done"), "\ntodo\ndone\n\n");
    }

    #[test]
    fn test_table() {
        assert_eq!(
            render_md("| Name | Age |\n|------|-----|\n| Ann  | 30  |"),
            "Name: Ann\nAge: 30\n\n"
        );
    }

    #[test]
    fn test_link_only_paragraph() {
        assert_eq!(render_md("[Click](https://example.com)"), "Click\n\n");
    }

    #[test]
    fn test_link_led_paragraph_is_link_only() {
        assert_eq!(render_md("[Click](https://example.com) here now"), "Click\n\n");
    }

    #[test]
    fn test_image_only_paragraph() {
        assert_eq!(render_md("![A cat](cat.png \"Cat\")"), "A cat\n\n");
    }

    #[test]
    fn test_horizontal_rule_is_dropped() {
        assert_eq!(render_md("a\n\n---\n\nb"), "a\n\nb\n\n");
    }

    #[test]
    fn test_hard_break_is_dropped() {
        assert_eq!(render_md("a\\\nb"), "ab\n\n");
    }

    #[test]
    fn test_soft_break_kept_as_newline() {
        assert_eq!(render_md("a\nb"), "a\nb\n\n");
    }

    #[test]
    fn test_gfm_disabled() {
        let renderer = PlainTextRenderer::new().with_gfm(false);
        assert!(!renderer.parse_options().gfm);
        let text = renderer.render_markdown("~~x~~").unwrap();
        assert_eq!(text, "~~x~~\n\n");
    }

    #[test]
    fn test_custom_handler_replaces_default() {
        let renderer = PlainTextRenderer::new().with_handler(NodeKind::Heading, |cx, node| {
            let text = cx.render_children(&node.children)?;
            Ok(format!("{}\n\n", text.to_uppercase()))
        });
        assert_eq!(renderer.render_markdown("# Title").unwrap(), "TITLE\n\n");
    }

    #[test]
    fn test_last_registered_handler_wins() {
        let renderer = PlainTextRenderer::new()
            .with_handler(NodeKind::Text, |_, _| Ok("first".to_owned()))
            .with_handler(NodeKind::Text, |_, _| Ok("second".to_owned()));
        assert_eq!(renderer.render(&[Node::text("x")]).unwrap(), "second");
    }

    #[test]
    fn test_custom_handler_error_propagates() {
        let renderer = PlainTextRenderer::new().with_handler(NodeKind::CodeBlock, |_, _| {
            Err(RenderError::Custom("code blocks not allowed".to_owned()))
        });
        let err = renderer.render_markdown("```\nx\n```").unwrap_err();
        assert_eq!(err, RenderError::Custom("code blocks not allowed".to_owned()));
    }

    #[test]
    fn test_custom_cell_handler_sees_labels() {
        let renderer = PlainTextRenderer::new().with_handler(NodeKind::TableRow, |cx, node| {
            let mut cells = Vec::new();
            for cell in &node.children {
                cells.push(cx.render(cell)?);
            }
            Ok(format!("{} = {}\n", cx.header_labels().join("|"), cells.join("|")))
        });
        assert_eq!(
            renderer.render_markdown("| A | B |\n|---|---|\n| 1 | 2 |").unwrap(),
            "A|B = 1|2\n"
        );
    }

    #[test]
    fn test_render_is_idempotent() {
        let renderer = PlainTextRenderer::new();
        let markdown = "# T\n\n| A |\n|---|\n| 1 |\n\n- x\n- y";
        let nodes = parse_markdown(markdown, ParseOptions::default());
        let first = renderer.render(&nodes).unwrap();
        let second = renderer.render(&nodes).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_render_node_suppressed() {
        let renderer = PlainTextRenderer::default();
        let rule = Node::leaf(NodeKind::HorizontalRule, "***");
        assert_eq!(renderer.render_node(&rule).unwrap(), "");
    }

    #[test]
    fn test_renderer_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PlainTextRenderer>();
    }
}
