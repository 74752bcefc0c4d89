//! Conversion between a [`Document`] and its persisted JSON blob.
//!
//! The blob carries the full history, the cursor and the interaction state:
//!
//! ```text
//! {
//!   "states": [ { "shapes": [ { "bound": { "left", "top", "right", "bottom" },
//!                               "kind": "CIRCLE" | "RECT" | "LINE",
//!                               "color": int } ] } ],
//!   "currentStateIndex": int,
//!   "tool": "DRAW" | "MOVE",
//!   "shapeKind": "CIRCLE" | "RECT" | "LINE",
//!   "selectedShapeIndex": int,      // optional, negative means none
//!   "selectedColorIndex": int
//! }
//! ```
//!
//! The palette is not stored. Decoding validates everything up front and
//! either yields a complete document or an error.

use serde::ser::Error as _;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::document::Document;
use crate::error::DecodeError;
use crate::history::{History, Snapshot};
use crate::palette::Palette;
use crate::shape::ShapeKind;
use crate::tool::Tool;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PersistedDocument {
    states: Vec<Snapshot>,
    current_state_index: usize,
    tool: Tool,
    shape_kind: ShapeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    selected_shape_index: Option<i64>,
    selected_color_index: usize,
}

impl PersistedDocument {
    // serde_json writes non-finite floats as `null`, which would never decode
    fn capture(doc: &Document) -> Result<Self, serde_json::Error> {
        if let Some((snapshot, index)) = first_non_finite(doc.snapshots()) {
            return Err(serde_json::Error::custom(format!(
                "shape {} in snapshot {} has a non-finite bound",
                index, snapshot
            )));
        }
        Ok(Self {
            states: doc.snapshots().to_vec(),
            current_state_index: doc.cursor(),
            tool: doc.tool(),
            shape_kind: doc.shape_kind(),
            selected_shape_index: doc.selected_index().map(|index| index as i64),
            selected_color_index: doc.selected_color_index(),
        })
    }

    fn restore(self, palette: Palette) -> Result<Document, DecodeError> {
        let len = self.states.len();
        if len == 0 {
            return Err(DecodeError::EmptyHistory);
        }

        let colors = self
            .states
            .iter()
            .flat_map(|state| state.shapes.iter().map(|shape| shape.color));
        for index in std::iter::once(self.selected_color_index).chain(colors) {
            if !palette.contains_index(index) {
                return Err(DecodeError::ColorIndexOutOfRange {
                    index,
                    len: palette.len(),
                });
            }
        }

        if let Some((snapshot, index)) = first_non_finite(&self.states) {
            return Err(DecodeError::NonFiniteBound { snapshot, index });
        }

        let cursor = self.current_state_index;
        let history = History::from_parts(self.states, cursor)
            .ok_or(DecodeError::CursorOutOfRange { cursor, len })?;

        let selected = self
            .selected_shape_index
            .and_then(|index| usize::try_from(index).ok());

        Ok(Document::from_parts(
            history,
            self.tool,
            self.shape_kind,
            selected,
            self.selected_color_index,
            palette,
        ))
    }
}

fn first_non_finite(states: &[Snapshot]) -> Option<(usize, usize)> {
    states.iter().enumerate().find_map(|(snapshot, state)| {
        state
            .shapes
            .iter()
            .position(|shape| !shape.bound.is_finite())
            .map(|index| (snapshot, index))
    })
}

/// Encodes the document as compact JSON
pub fn encode(doc: &Document) -> Result<String, serde_json::Error> {
    serde_json::to_string(&PersistedDocument::capture(doc)?)
}

pub fn encode_pretty(doc: &Document) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&PersistedDocument::capture(doc)?)
}

pub fn to_value(doc: &Document) -> Result<Value, serde_json::Error> {
    serde_json::to_value(PersistedDocument::capture(doc)?)
}

/// Decodes a blob against the default palette
pub fn decode(blob: &str) -> Result<Document, DecodeError> {
    decode_with_palette(blob, Palette::default())
}

pub fn decode_with_palette(blob: &str, palette: Palette) -> Result<Document, DecodeError> {
    let persisted: PersistedDocument = serde_json::from_str(blob)?;
    persisted.restore(palette)
}

pub fn from_value(value: Value) -> Result<Document, DecodeError> {
    let persisted: PersistedDocument = serde_json::from_value(value)?;
    persisted.restore(Palette::default())
}
