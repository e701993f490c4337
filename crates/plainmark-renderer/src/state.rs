//! Per-render state for table header tracking.

/// Stack of table header label frames.
///
/// Each table render pushes a fresh frame and pops it when done, so a table nested
/// inside a cell records and reads its own labels while the enclosing table's
/// labels stay untouched underneath.
#[derive(Debug, Default)]
pub(crate) struct HeaderStack {
    frames: Vec<Vec<String>>,
}

impl HeaderStack {
    /// Start a new, empty frame for a table.
    pub(crate) fn push(&mut self) {
        self.frames.push(Vec::new());
    }

    /// Drop the innermost frame.
    pub(crate) fn pop(&mut self) -> Option<Vec<String>> {
        self.frames.pop()
    }

    /// Append a label to the innermost frame.
    ///
    /// Labels recorded outside any table are discarded.
    pub(crate) fn record(&mut self, label: String) {
        if let Some(frame) = self.frames.last_mut() {
            frame.push(label);
        } else {
            tracing::debug!(label = %label, "Header cell outside of a table, label discarded");
        }
    }

    /// Labels of the innermost frame.
    pub(crate) fn labels(&self) -> &[String] {
        self.frames.last().map(Vec::as_slice).unwrap_or_default()
    }

    /// Number of tables currently being rendered.
    pub(crate) fn depth(&self) -> usize {
        self.frames.len()
    }
}
