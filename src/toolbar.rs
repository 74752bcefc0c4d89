use crate::document::Document;
use crate::error::DocumentError;
use crate::shape::{Shape, ShapeKind};
use crate::tool::Tool;

/// Enablement and highlight state of the toolbar controls, derived from a document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolbarState {
    pub can_undo: bool,
    pub can_redo: bool,
    /// The erase button needs a selected shape
    pub can_erase: bool,
    /// The circle/rect/line buttons are disabled while a shape is selected
    pub can_pick_shape_kind: bool,
    pub tool: Tool,
    pub shape_kind: ShapeKind,
    pub selected_color: usize,
}

impl ToolbarState {
    pub fn from_document(doc: &Document) -> Self {
        Self {
            can_undo: doc.can_undo(),
            can_redo: doc.can_redo(),
            can_erase: doc.selected_index().is_some(),
            can_pick_shape_kind: doc.selected_index().is_none(),
            tool: doc.tool(),
            shape_kind: doc.shape_kind(),
            selected_color: doc.selected_color_index(),
        }
    }
}

/// Removes the selected shape and clears the selection.
/// Returns `Ok(None)` without touching history when nothing is selected.
pub fn erase_selected(doc: &mut Document) -> Result<Option<Shape>, DocumentError> {
    let Some(index) = doc.selected_index() else {
        return Ok(None);
    };
    let shape = doc.remove_shape(index)?;
    doc.set_selection(None);
    Ok(Some(shape))
}

/// Selects a palette color and recolors the selected shape, if any, as one undo step
pub fn pick_color(doc: &mut Document, index: usize) -> Result<(), DocumentError> {
    doc.set_selected_color(index)?;
    if let Some(shape) = doc.selected_shape().copied() {
        let selected = doc.selected_index().unwrap_or_default();
        doc.update_shape(selected, shape.with_color(index))?;
    }
    Ok(())
}
