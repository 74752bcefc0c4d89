use crate::shape::ShapeKind;
use crate::tool::Tool;

/// What changed in a document. Exactly one event is emitted per successful mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentEvent {
    /// Sent only to a handler that was just subscribed, so it can initialize
    Attached,
    Undone {
        cursor: usize,
    },
    Redone {
        cursor: usize,
    },
    ShapeAdded {
        index: usize,
    },
    ShapeRemoved {
        index: usize,
    },
    ShapeUpdated {
        index: usize,
    },
    /// Continuous in-place edit; no history entry was created
    ShapeDragged {
        index: usize,
    },
    SelectionChanged {
        selected: Option<usize>,
    },
    ColorSelected {
        index: usize,
    },
    ToolChanged {
        tool: Tool,
        shape_kind: ShapeKind,
    },
}

impl DocumentEvent {
    /// True for events that moved the history cursor or appended a snapshot
    pub fn touches_history(&self) -> bool {
        matches!(
            self,
            DocumentEvent::Undone { .. }
                | DocumentEvent::Redone { .. }
                | DocumentEvent::ShapeAdded { .. }
                | DocumentEvent::ShapeRemoved { .. }
                | DocumentEvent::ShapeUpdated { .. }
        )
    }
}
