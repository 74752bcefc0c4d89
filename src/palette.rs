/// An ARGB color value, `0xAARRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(pub u32);

impl Color {
    pub fn argb(&self) -> u32 {
        self.0
    }
}

pub const DEFAULT_COLORS: [Color; 6] = [
    Color(0xff000000),
    Color(0xfffc7b03),
    Color(0xff45ba16),
    Color(0xff1b69a6),
    Color(0xffb5bd22),
    Color(0xff6b050a),
];

/// The fixed, ordered set of colors shapes refer to by index.
///
/// Fixed for the lifetime of a document. It is not part of the persisted blob,
/// so a restored document must be decoded against the palette it was saved with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_COLORS.to_vec(),
        }
    }
}

impl Palette {
    /// Returns `None` for an empty color list, since index 0 must always be valid
    pub fn new(colors: Vec<Color>) -> Option<Self> {
        if colors.is_empty() {
            return None;
        }
        Some(Self { colors })
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Color> {
        self.colors.get(index).copied()
    }

    pub fn contains_index(&self, index: usize) -> bool {
        index < self.colors.len()
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }
}
