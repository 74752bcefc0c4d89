use serde::{Deserialize, Serialize};

/// A position in normalized canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned bounds in normalized canvas coordinates.
///
/// The edges are stored as drawn: `left` may be greater than `right` and
/// `top` greater than `bottom` when a shape was dragged up or to the left.
/// Nothing clamps the values to `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bound {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Bound {
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// A zero-size bound anchored at `point`
    pub fn at(point: Point) -> Self {
        Self::new(point.x, point.y, point.x, point.y)
    }

    /// Inclusive containment test that ignores edge ordering
    pub fn contains(&self, point: Point) -> bool {
        let b = self.normalized();
        point.x >= b.left && point.x <= b.right && point.y >= b.top && point.y <= b.bottom
    }

    pub fn translate(&self, dx: f32, dy: f32) -> Self {
        Self::new(
            self.left + dx,
            self.top + dy,
            self.right + dx,
            self.bottom + dy,
        )
    }

    /// Keeps the anchor corner (left, top) and moves the opposite corner to `point`
    pub fn with_corner(&self, point: Point) -> Self {
        Self::new(self.left, self.top, point.x, point.y)
    }

    /// Same area with `left <= right` and `top <= bottom`
    pub fn normalized(&self) -> Self {
        Self::new(
            self.left.min(self.right),
            self.top.min(self.bottom),
            self.left.max(self.right),
            self.top.max(self.bottom),
        )
    }

    /// False if any edge is NaN or infinite
    pub fn is_finite(&self) -> bool {
        [self.left, self.top, self.right, self.bottom]
            .iter()
            .all(|v| v.is_finite())
    }

    /// Maps normalized coordinates onto a drawing surface of the given pixel size
    pub fn to_surface(&self, width: f32, height: f32) -> Self {
        Self::new(
            self.left * width,
            self.top * height,
            self.right * width,
            self.bottom * height,
        )
    }
}

/// The closed set of drawable shape kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShapeKind {
    #[default]
    Circle,
    Rect,
    Line,
}

impl ShapeKind {
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Rect => "rect",
            ShapeKind::Line => "line",
        }
    }
}

/// An immutable drawn shape. Edits replace the whole value.
///
/// `color` is an index into the owning document's palette, not a color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub bound: Bound,
    pub kind: ShapeKind,
    pub color: usize,
}

impl Shape {
    pub fn new(bound: Bound, kind: ShapeKind, color: usize) -> Self {
        Self { bound, kind, color }
    }

    pub fn with_bound(&self, bound: Bound) -> Self {
        Self { bound, ..*self }
    }

    pub fn with_color(&self, color: usize) -> Self {
        Self { color, ..*self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_handles_reversed_edges() {
        let forward = Bound::new(0.2, 0.2, 0.6, 0.8);
        let reversed = Bound::new(0.6, 0.8, 0.2, 0.2);

        for bound in [forward, reversed] {
            assert!(bound.contains(Point::new(0.4, 0.5)));
            assert!(bound.contains(Point::new(0.2, 0.8)));
            assert!(!bound.contains(Point::new(0.1, 0.5)));
            assert!(!bound.contains(Point::new(0.4, 0.9)));
        }
    }

    #[test]
    fn test_zero_size_bound_contains_its_anchor() {
        let bound = Bound::at(Point::new(0.3, 0.3));
        assert!(bound.contains(Point::new(0.3, 0.3)));
        assert!(!bound.contains(Point::new(0.31, 0.3)));
    }

    #[test]
    fn test_translate_is_not_clamped() {
        let bound = Bound::new(0.5, 0.5, 0.75, 0.75).translate(0.5, -1.0);
        assert_eq!(bound, Bound::new(1.0, -0.5, 1.25, -0.25));
    }

    #[test]
    fn test_with_corner_keeps_anchor() {
        let bound = Bound::at(Point::new(0.5, 0.5)).with_corner(Point::new(0.25, 0.75));
        assert_eq!(bound, Bound::new(0.5, 0.5, 0.25, 0.75));
        assert_eq!(bound.normalized(), Bound::new(0.25, 0.5, 0.5, 0.75));
    }

    #[test]
    fn test_is_finite() {
        assert!(Bound::new(-3.0, 0.0, 1e30, 0.5).is_finite());
        assert!(!Bound::new(f32::NAN, 0.0, 0.0, 0.0).is_finite());
        assert!(!Bound::new(0.0, 0.0, 0.0, f32::NEG_INFINITY).is_finite());
    }

    #[test]
    fn test_to_surface_scales_each_axis() {
        let bound = Bound::new(0.25, 0.5, 0.75, 1.0).to_surface(200.0, 100.0);
        assert_eq!(bound, Bound::new(50.0, 50.0, 150.0, 100.0));
    }

    #[test]
    fn test_shape_kind_literals() {
        assert_eq!(serde_json::to_string(&ShapeKind::Circle).unwrap(), "\"CIRCLE\"");
        assert_eq!(serde_json::to_string(&ShapeKind::Rect).unwrap(), "\"RECT\"");
        assert_eq!(serde_json::to_string(&ShapeKind::Line).unwrap(), "\"LINE\"");
        assert!(serde_json::from_str::<ShapeKind>("\"TRIANGLE\"").is_err());
    }

    #[test]
    fn test_shape_requires_integer_color() {
        let json = r#"{"bound":{"left":0,"top":0,"right":1,"bottom":1},"kind":"RECT"}"#;
        assert!(serde_json::from_str::<Shape>(json).is_err());

        let json = r#"{"bound":{"left":0,"top":0,"right":1,"bottom":1},"kind":"RECT","color":"red"}"#;
        assert!(serde_json::from_str::<Shape>(json).is_err());

        let json = r#"{"bound":{"left":0,"top":0,"right":1,"bottom":1},"kind":"RECT","color":3}"#;
        let shape: Shape = serde_json::from_str(json).unwrap();
        assert_eq!(shape, Shape::new(Bound::new(0.0, 0.0, 1.0, 1.0), ShapeKind::Rect, 3));
    }
}
