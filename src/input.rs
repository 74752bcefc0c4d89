use crate::document::Document;
use crate::error::DocumentError;
use crate::shape::{Bound, Point, Shape};
use crate::tool::Tool;

/// Translates pointer presses, drags and releases into document calls.
///
/// Positions are normalized canvas coordinates. Only the press creates history
/// entries; every drag frame goes through [`Document::update_shape_mut`].
#[derive(Debug, Default)]
pub struct PointerController {
    last: Option<Point>,
}

impl PointerController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a press is in progress
    pub fn is_active(&self) -> bool {
        self.last.is_some()
    }

    /// Move tool: selects the topmost shape under `pos` and brings it to the
    /// front, or clears the selection on a miss.
    /// Draw tool: starts a zero-size shape at `pos` and selects it.
    pub fn press(&mut self, doc: &mut Document, pos: Point) -> Result<(), DocumentError> {
        match doc.tool() {
            Tool::Move => match doc.shape_at(pos) {
                Some(index) => {
                    let shape = doc.remove_shape(index)?;
                    let front = doc.add_shape(shape)?;
                    doc.set_selection(Some(front));
                }
                None => {
                    doc.set_selection(None);
                }
            },
            Tool::Draw => {
                let shape = Shape::new(Bound::at(pos), doc.shape_kind(), doc.selected_color_index());
                let index = doc.add_shape(shape)?;
                doc.set_selection(Some(index));
            }
        }
        self.last = Some(pos);
        Ok(())
    }

    /// Moves the selected shape with the pointer, or stretches it while drawing
    pub fn drag(&mut self, doc: &mut Document, pos: Point) -> Result<(), DocumentError> {
        if let Some(shape) = doc.selected_shape().copied() {
            let index = doc.selected_index().unwrap_or_default();
            let bound = match doc.tool() {
                Tool::Move => {
                    let last = self.last.unwrap_or(pos);
                    shape.bound.translate(pos.x - last.x, pos.y - last.y)
                }
                Tool::Draw => shape.bound.with_corner(pos),
            };
            doc.update_shape_mut(index, shape.with_bound(bound))?;
        }
        self.last = Some(pos);
        Ok(())
    }

    /// Ends the gesture. A finished drawing is deselected.
    pub fn release(&mut self, doc: &mut Document) {
        self.last = None;
        if doc.tool() == Tool::Draw {
            doc.set_selection(None);
        }
    }
}
