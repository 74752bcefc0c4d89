use serde::{Deserialize, Serialize};

/// Interaction mode of the canvas.
///
/// `Draw` produces shapes of the document's active shape kind; `Move` selects
/// and drags existing shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Tool {
    Draw,
    #[default]
    Move,
}

impl Tool {
    pub fn name(&self) -> &'static str {
        match self {
            Tool::Draw => "draw",
            Tool::Move => "move",
        }
    }
}
