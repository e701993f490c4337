//! Document tree consumed by the renderer.
//!
//! A [`Node`] carries a [`NodeKind`] tag, its raw text, ordered children, and the
//! kind-specific fields a markdown parser attaches (link targets, list items, table
//! header and rows). The renderer only ever borrows nodes.

use std::fmt;

/// Kind of a document node.
///
/// The set is closed: every kind a markdown grammar produces maps to exactly one
/// variant, and anything else is [`NodeKind::Generic`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum NodeKind {
    /// Blank space between blocks.
    Space,
    /// ATX or setext heading.
    Heading,
    /// Paragraph.
    Paragraph,
    /// Plain text run.
    Text,
    /// Strong emphasis (`**text**`).
    Strong,
    /// Emphasis (`*text*`).
    Emphasis,
    /// Strikethrough (`~~text~~`).
    Strikethrough,
    /// Inline code span.
    CodeSpan,
    /// Fenced or indented code block.
    CodeBlock,
    /// Hyperlink.
    Link,
    /// Image.
    Image,
    /// Ordered or unordered list.
    List,
    /// List item.
    ListItem,
    /// Blockquote.
    Blockquote,
    /// Table.
    Table,
    /// Table row.
    TableRow,
    /// Table cell.
    TableCell,
    /// Thematic break (`---`).
    HorizontalRule,
    /// Hard line break.
    LineBreak,
    /// Raw HTML, block or inline.
    RawHtml,
    /// Task list checkbox.
    Checkbox,
    /// Any other node.
    #[default]
    #[cfg_attr(feature = "serde", serde(other))]
    Generic,
}

impl NodeKind {
    /// All kinds in declaration order.
    pub const ALL: [NodeKind; 22] = [
        NodeKind::Space,
        NodeKind::Heading,
        NodeKind::Paragraph,
        NodeKind::Text,
        NodeKind::Strong,
        NodeKind::Emphasis,
        NodeKind::Strikethrough,
        NodeKind::CodeSpan,
        NodeKind::CodeBlock,
        NodeKind::Link,
        NodeKind::Image,
        NodeKind::List,
        NodeKind::ListItem,
        NodeKind::Blockquote,
        NodeKind::Table,
        NodeKind::TableRow,
        NodeKind::TableCell,
        NodeKind::HorizontalRule,
        NodeKind::LineBreak,
        NodeKind::RawHtml,
        NodeKind::Checkbox,
        NodeKind::Generic,
    ];

    /// Number of node kinds.
    pub const COUNT: usize = Self::ALL.len();

    /// Position of this kind in [`NodeKind::ALL`].
    pub(crate) const fn index(self) -> usize {
        self as usize
    }

    /// Whether the kind renders inline, without a block separator.
    #[must_use]
    pub const fn is_inline(self) -> bool {
        matches!(
            self,
            NodeKind::Text
                | NodeKind::Strong
                | NodeKind::Emphasis
                | NodeKind::Strikethrough
                | NodeKind::CodeSpan
        )
    }

    /// Snake-case name of the kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            NodeKind::Space => "space",
            NodeKind::Heading => "heading",
            NodeKind::Paragraph => "paragraph",
            NodeKind::Text => "text",
            NodeKind::Strong => "strong",
            NodeKind::Emphasis => "emphasis",
            NodeKind::Strikethrough => "strikethrough",
            NodeKind::CodeSpan => "code_span",
            NodeKind::CodeBlock => "code_block",
            NodeKind::Link => "link",
            NodeKind::Image => "image",
            NodeKind::List => "list",
            NodeKind::ListItem => "list_item",
            NodeKind::Blockquote => "blockquote",
            NodeKind::Table => "table",
            NodeKind::TableRow => "table_row",
            NodeKind::TableCell => "table_cell",
            NodeKind::HorizontalRule => "horizontal_rule",
            NodeKind::LineBreak => "line_break",
            NodeKind::RawHtml => "raw_html",
            NodeKind::Checkbox => "checkbox",
            NodeKind::Generic => "generic",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A node of a parsed markdown document.
///
/// Kind-specific fields are `None`/`false` for kinds that don't use them. Structural
/// kinds that require a field (`header`/`rows` on tables, `items` on lists, `href` on
/// links and images) fail to render with
/// [`RenderError::MalformedNode`](crate::RenderError::MalformedNode) when it is missing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Node {
    /// Node kind.
    pub kind: NodeKind,
    /// Raw text of the node (may be empty).
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "String::is_empty"))]
    pub text: String,
    /// Child nodes in document order.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Vec::is_empty"))]
    pub children: Vec<Node>,
    /// Whether a table cell belongs to the header row.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "std::ops::Not::not"))]
    pub header_cell: bool,
    /// Link or image target.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub href: Option<String>,
    /// Link or image title, or the info string of a fenced code block.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub title: Option<String>,
    /// Whether a list is ordered.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub ordered: Option<bool>,
    /// List items.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub items: Option<Vec<Node>>,
    /// Table header cells.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub header: Option<Vec<Node>>,
    /// Table body rows.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub rows: Option<Vec<Node>>,
    /// Heading level (1-6).
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub level: Option<u8>,
    /// Checkbox state.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub checked: Option<bool>,
}

impl Node {
    /// Create an empty node of the given kind.
    #[must_use]
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    /// Create a node with raw text and no children.
    #[must_use]
    pub fn leaf(kind: NodeKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            ..Self::default()
        }
    }

    /// Create a node with children.
    #[must_use]
    pub fn parent(kind: NodeKind, children: Vec<Node>) -> Self {
        Self {
            kind,
            children,
            ..Self::default()
        }
    }

    /// Plain text run.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::leaf(NodeKind::Text, text)
    }

    /// Strong emphasis around `children`.
    #[must_use]
    pub fn strong(children: Vec<Node>) -> Self {
        Self::parent(NodeKind::Strong, children)
    }

    /// Emphasis around `children`.
    #[must_use]
    pub fn emphasis(children: Vec<Node>) -> Self {
        Self::parent(NodeKind::Emphasis, children)
    }

    /// Inline code span.
    #[must_use]
    pub fn code_span(code: impl Into<String>) -> Self {
        Self::leaf(NodeKind::CodeSpan, code)
    }

    /// Code block.
    #[must_use]
    pub fn code_block(code: impl Into<String>) -> Self {
        Self::leaf(NodeKind::CodeBlock, code)
    }

    /// Raw HTML.
    #[must_use]
    pub fn raw_html(html: impl Into<String>) -> Self {
        Self::leaf(NodeKind::RawHtml, html)
    }

    /// Heading of the given level.
    #[must_use]
    pub fn heading(level: u8, children: Vec<Node>) -> Self {
        Self {
            level: Some(level),
            ..Self::parent(NodeKind::Heading, children)
        }
    }

    /// Paragraph.
    #[must_use]
    pub fn paragraph(children: Vec<Node>) -> Self {
        Self::parent(NodeKind::Paragraph, children)
    }

    /// Blockquote.
    #[must_use]
    pub fn blockquote(children: Vec<Node>) -> Self {
        Self::parent(NodeKind::Blockquote, children)
    }

    /// Link to `href` labelled by `children`.
    #[must_use]
    pub fn link(href: impl Into<String>, children: Vec<Node>) -> Self {
        Self {
            href: Some(href.into()),
            ..Self::parent(NodeKind::Link, children)
        }
    }

    /// Image at `href` with alt text.
    #[must_use]
    pub fn image(href: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            href: Some(href.into()),
            ..Self::leaf(NodeKind::Image, alt)
        }
    }

    /// List of `items`.
    #[must_use]
    pub fn list(ordered: bool, items: Vec<Node>) -> Self {
        Self {
            ordered: Some(ordered),
            items: Some(items),
            ..Self::new(NodeKind::List)
        }
    }

    /// List item.
    #[must_use]
    pub fn list_item(children: Vec<Node>) -> Self {
        Self::parent(NodeKind::ListItem, children)
    }

    /// Table with header cells and body rows.
    #[must_use]
    pub fn table(header: Vec<Node>, rows: Vec<Node>) -> Self {
        Self {
            header: Some(header),
            rows: Some(rows),
            ..Self::new(NodeKind::Table)
        }
    }

    /// Table row of `cells`.
    #[must_use]
    pub fn table_row(cells: Vec<Node>) -> Self {
        Self::parent(NodeKind::TableRow, cells)
    }

    /// Body cell.
    #[must_use]
    pub fn table_cell(children: Vec<Node>) -> Self {
        Self::parent(NodeKind::TableCell, children)
    }

    /// Header cell.
    #[must_use]
    pub fn header_cell(children: Vec<Node>) -> Self {
        Self {
            header_cell: true,
            ..Self::table_cell(children)
        }
    }

    /// Task list checkbox.
    #[must_use]
    pub fn checkbox(checked: bool) -> Self {
        Self {
            checked: Some(checked),
            ..Self::new(NodeKind::Checkbox)
        }
    }

    /// Set the title attribute.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}
