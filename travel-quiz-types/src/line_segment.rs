/// A line between two endpoints, `(x1, y1)` to `(x2, y2)`.
///
/// Coordinates are not range-checked anywhere.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LineSegment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl LineSegment {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn start(&self) -> (f64, f64) {
        (self.x1, self.y1)
    }

    pub fn end(&self) -> (f64, f64) {
        (self.x2, self.y2)
    }
}

impl From<(f64, f64, f64, f64)> for LineSegment {
    fn from((x1, y1, x2, y2): (f64, f64, f64, f64)) -> Self {
        Self::new(x1, y1, x2, y2)
    }
}
