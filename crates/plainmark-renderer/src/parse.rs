//! Build a [`Node`] tree from pulldown-cmark events.
//!
//! The builder keeps a stack of open nodes: `Start` events push, `End` events pop
//! and attach the finished node to its parent. Code and HTML blocks collect their
//! text events into a single node. List items are attached to the
//! list's `items`, header cells to the table's `header`, and body rows to its
//! `rows`; everything else becomes a child.

use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag, TagEnd};

use crate::node::{Node, NodeKind};
use crate::util::heading_level_to_num;

/// Markdown parser configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseOptions {
    /// Enable GitHub Flavored Markdown (tables, strikethrough, task lists).
    pub gfm: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self { gfm: true }
    }
}

impl ParseOptions {
    /// Get pulldown-cmark options for this configuration.
    #[must_use]
    pub fn to_pulldown(self) -> Options {
        if self.gfm {
            Options::ENABLE_TABLES
                | Options::ENABLE_STRIKETHROUGH
                | Options::ENABLE_TASKLISTS
                | Options::ENABLE_GFM
        } else {
            Options::empty()
        }
    }
}

/// Parse markdown text into top-level nodes.
///
/// # Example
///
/// ```
/// use plainmark_renderer::{Node, NodeKind, ParseOptions, parse_markdown};
///
/// let nodes = parse_markdown("# Hi\n\nSome *text*", ParseOptions::default());
/// assert_eq!(nodes.len(), 2);
/// assert_eq!(nodes[0].kind, NodeKind::Heading);
/// assert_eq!(nodes[1].kind, NodeKind::Paragraph);
/// ```
pub fn parse_markdown(markdown: &str, options: ParseOptions) -> Vec<Node> {
    from_events(Parser::new_ext(markdown, options.to_pulldown()))
}

/// Build top-level nodes from an event stream.
///
/// Use this to render events from a pre-configured or filtered parser.
pub fn from_events<'a, I>(events: I) -> Vec<Node>
where
    I: Iterator<Item = Event<'a>>,
{
    let mut builder = TreeBuilder::default();
    for event in events {
        builder.process_event(event);
    }
    builder.finish()
}

/// What to do with a node when its end tag arrives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Slot {
    Child,
    TableHead,
    Discard,
}

#[derive(Default)]
struct TreeBuilder {
    roots: Vec<Node>,
    stack: Vec<(Node, Slot)>,
    in_table_head: bool,
}

impl TreeBuilder {
    fn process_event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start_tag(tag),
            Event::End(tag) => self.end_tag(tag),
            Event::Text(text) => self.text(&text),
            Event::Code(code) | Event::InlineMath(code) => {
                self.attach(Node::code_span(code.into_string()));
            }
            Event::DisplayMath(math) => self.attach(Node::code_block(math.into_string())),
            Event::Html(html) => self.html(&html),
            Event::InlineHtml(html) => self.attach(Node::raw_html(html.into_string())),
            Event::FootnoteReference(label) => self.attach(Node::text(format!("[{label}]"))),
            Event::SoftBreak => self.text("\n"),
            Event::HardBreak => self.attach(Node::new(NodeKind::LineBreak)),
            Event::Rule => self.attach(Node::new(NodeKind::HorizontalRule)),
            Event::TaskListMarker(checked) => self.attach(Node::checkbox(checked)),
        }
    }

    fn start_tag(&mut self, tag: Tag<'_>) {
        let (node, slot) = match tag {
            Tag::Paragraph => (Node::new(NodeKind::Paragraph), Slot::Child),
            Tag::Heading { level, .. } => (
                Node::heading(heading_level_to_num(level), Vec::new()),
                Slot::Child,
            ),
            Tag::BlockQuote(_) => (Node::new(NodeKind::Blockquote), Slot::Child),
            Tag::CodeBlock(kind) => {
                let mut node = Node::new(NodeKind::CodeBlock);
                if let CodeBlockKind::Fenced(info) = kind {
                    // Keep the info string as the title so custom handlers can see the language.
                    if !info.is_empty() {
                        node.title = Some(info.into_string());
                    }
                }
                (node, Slot::Child)
            }
            Tag::HtmlBlock => (Node::new(NodeKind::RawHtml), Slot::Child),
            Tag::List(start) => (Node::list(start.is_some(), Vec::new()), Slot::Child),
            Tag::Item => (Node::new(NodeKind::ListItem), Slot::Child),
            Tag::FootnoteDefinition(_)
            | Tag::DefinitionList
            | Tag::DefinitionListTitle
            | Tag::DefinitionListDefinition => (Node::new(NodeKind::Generic), Slot::Child),
            Tag::MetadataBlock(_) => (Node::new(NodeKind::Generic), Slot::Discard),
            Tag::Table(_) => (Node::table(Vec::new(), Vec::new()), Slot::Child),
            Tag::TableHead => {
                self.in_table_head = true;
                (Node::new(NodeKind::TableRow), Slot::TableHead)
            }
            Tag::TableRow => (Node::new(NodeKind::TableRow), Slot::Child),
            Tag::TableCell => {
                let mut cell = Node::new(NodeKind::TableCell);
                cell.header_cell = self.in_table_head;
                (cell, Slot::Child)
            }
            Tag::Emphasis => (Node::new(NodeKind::Emphasis), Slot::Child),
            Tag::Strong => (Node::new(NodeKind::Strong), Slot::Child),
            Tag::Strikethrough => (Node::new(NodeKind::Strikethrough), Slot::Child),
            // No plain-text distinction for raised or lowered text.
            Tag::Superscript | Tag::Subscript => (Node::new(NodeKind::Text), Slot::Child),
            Tag::Link {
                dest_url, title, ..
            } => (link_node(NodeKind::Link, &dest_url, &title), Slot::Child),
            Tag::Image {
                dest_url, title, ..
            } => (link_node(NodeKind::Image, &dest_url, &title), Slot::Child),
        };
        self.stack.push((node, slot));
    }

    fn end_tag(&mut self, tag: TagEnd) {
        let Some((node, slot)) = self.stack.pop() else {
            tracing::warn!(?tag, "Unbalanced end tag ignored");
            return;
        };
        match slot {
            Slot::Child => self.attach(node),
            Slot::TableHead => {
                self.in_table_head = false;
                if let Some((table, _)) = self.stack.last_mut() {
                    table.header = Some(node.children);
                }
            }
            Slot::Discard => {}
        }
    }

    fn text(&mut self, text: &str) {
        if !self.append_to_open(NodeKind::CodeBlock, text) {
            self.attach(Node::text(text));
        }
    }

    fn html(&mut self, html: &str) {
        if !self.append_to_open(NodeKind::RawHtml, html) {
            self.attach(Node::raw_html(html));
        }
    }

    /// Append raw text to the innermost open node if it is a `kind` block.
    fn append_to_open(&mut self, kind: NodeKind, text: &str) -> bool {
        match self.stack.last_mut() {
            Some((node, _)) if node.kind == kind => {
                node.text.push_str(text);
                true
            }
            _ => false,
        }
    }

    fn attach(&mut self, node: Node) {
        let Some((parent, _)) = self.stack.last_mut() else {
            self.roots.push(node);
            return;
        };
        match (parent.kind, node.kind) {
            (NodeKind::List, NodeKind::ListItem) => {
                parent.items.get_or_insert_with(Vec::new).push(node);
            }
            (NodeKind::Table, NodeKind::TableRow) => {
                parent.rows.get_or_insert_with(Vec::new).push(node);
            }
            _ => parent.children.push(node),
        }
    }

    fn finish(mut self) -> Vec<Node> {
        while let Some((node, slot)) = self.stack.pop() {
            if slot == Slot::Child {
                self.attach(node);
            }
        }
        self.roots
    }
}

fn link_node(kind: NodeKind, dest_url: &str, title: &str) -> Node {
    let mut node = Node::new(kind);
    node.href = Some(dest_url.to_owned());
    if !title.is_empty() {
        node.title = Some(title.to_owned());
    }
    node
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(markdown: &str) -> Vec<Node> {
        parse_markdown(markdown, ParseOptions::default())
    }

    #[test]
    fn test_paragraph_with_inline_children() {
        let nodes = parse("Hello **world**");
        assert_eq!(
            nodes,
            vec![Node::paragraph(vec![
                Node::text("Hello "),
                Node::strong(vec![Node::text("world")]),
            ])]
        );
    }

    #[test]
    fn test_heading_level() {
        let nodes = parse("### Deep");
        assert_eq!(nodes, vec![Node::heading(3, vec![Node::text("Deep")])]);
    }

    #[test]
    fn test_list_items_go_to_items() {
        let nodes = parse("1. one\n2. two");
        assert_eq!(nodes.len(), 1);
        let list = &nodes[0];
        assert_eq!(list.kind, NodeKind::List);
        assert_eq!(list.ordered, Some(true));
        assert!(list.children.is_empty());
        let items = list.items.as_ref().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0], Node::list_item(vec![Node::text("one")]));
    }

    #[test]
    fn test_table_shape() {
        let nodes = parse("| A | B |\n|---|---|\n| 1 | 2 |");
        let table = &nodes[0];
        assert_eq!(table.kind, NodeKind::Table);
        assert_eq!(
            table.header,
            Some(vec![
                Node::header_cell(vec![Node::text("A")]),
                Node::header_cell(vec![Node::text("B")]),
            ])
        );
        assert_eq!(
            table.rows,
            Some(vec![Node::table_row(vec![
                Node::table_cell(vec![Node::text("1")]),
                Node::table_cell(vec![Node::text("2")]),
            ])])
        );
    }

    #[test]
    fn test_gfm_disabled_has_no_table() {
        let nodes = parse_markdown("| A |\n|---|\n| 1 |", ParseOptions { gfm: false });
        assert!(nodes.iter().all(|n| n.kind != NodeKind::Table));
    }

    #[test]
    fn test_code_block_collects_text() {
        let nodes = parse("```rust\nfn main() {}\n```");
        let mut expected = Node::code_block("fn main() {}\n");
        expected.title = Some("rust".to_owned());
        assert_eq!(nodes, vec![expected]);
    }

    #[test]
    fn test_link_and_image() {
        let nodes = parse("[Docs](https://example.com \"Home\") ![Logo](logo.png)");
        let para = &nodes[0];
        assert_eq!(
            para.children[0],
            Node::link("https://example.com", vec![Node::text("Docs")]).with_title("Home")
        );
        assert_eq!(para.children[2].kind, NodeKind::Image);
        assert_eq!(para.children[2].href.as_deref(), Some("logo.png"));
        assert_eq!(para.children[2].children, vec![Node::text("Logo")]);
    }

    #[test]
    fn test_breaks_and_rules() {
        let nodes = parse("a  \nb\nc\n\n---");
        assert_eq!(
            nodes,
            vec![
                Node::paragraph(vec![
                    Node::text("a"),
                    Node::new(NodeKind::LineBreak),
                    Node::text("b"),
                    Node::text("\n"),
                    Node::text("c"),
                ]),
                Node::new(NodeKind::HorizontalRule),
            ]
        );
    }

    #[test]
    fn test_task_list_marker() {
        let nodes = parse("- [x] done");
        let item = &nodes[0].items.as_ref().unwrap()[0];
        assert_eq!(item.children[0], Node::checkbox(true));
    }

    #[test]
    fn test_html_block_is_one_node() {
        let nodes = parse("<div>\nhi\n</div>\n");
        assert_eq!(nodes, vec![Node::raw_html("<div>\nhi\n</div>\n")]);
    }

    #[test]
    fn test_inline_html_stays_in_paragraph() {
        let nodes = parse("a <b>c</b>");
        assert_eq!(
            nodes,
            vec![Node::paragraph(vec![
                Node::text("a "),
                Node::raw_html("<b>"),
                Node::text("c"),
                Node::raw_html("</b>"),
            ])]
        );
    }

    #[test]
    fn test_blockquote_wraps_paragraph() {
        let nodes = parse("> quoted");
        assert_eq!(
            nodes,
            vec![Node::blockquote(vec![Node::paragraph(vec![Node::text("quoted")])])]
        );
    }

    #[test]
    fn test_from_events_accepts_custom_parser() {
        let parser = Parser::new("*x*");
        let nodes = from_events(parser);
        assert_eq!(
            nodes,
            vec![Node::paragraph(vec![Node::emphasis(vec![Node::text("x")])])]
        );
    }
}
