//! Reading documents and writing results.

use std::io::{self, Read, Write};
use std::path::Path;

use plainmark_renderer::Node;
use serde::Deserialize;

/// Serialized node tree: either a list of top-level nodes or a single root.
#[derive(Deserialize)]
#[serde(untagged)]
enum TreeInput {
    Many(Vec<Node>),
    One(Node),
}

/// Read the document at `path`, or stdin when `path` is `None` or `-`.
pub(super) fn read_source(path: Option<&Path>) -> io::Result<String> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path),
        _ => {
            let mut source = String::new();
            io::stdin().lock().read_to_string(&mut source)?;
            Ok(source)
        }
    }
}

/// Parse a JSON node tree.
pub(super) fn parse_tree(json: &str) -> Result<Vec<Node>, serde_json::Error> {
    Ok(match serde_json::from_str(json)? {
        TreeInput::Many(nodes) => nodes,
        TreeInput::One(node) => vec![node],
    })
}

/// Write `text` to `path`, or stdout when `path` is `None`.
pub(super) fn write_text(path: Option<&Path>, text: &str) -> io::Result<()> {
    match path {
        Some(path) => std::fs::write(path, text),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.flush()
        }
    }
}
