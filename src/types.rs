//! Plain value types: canvas points and variable names.
use std::fmt;

/// A point on the drawing surface, in pixels.
///
/// The origin is the top-left corner of the canvas, `y` grows downwards.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance between two points.
    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Returns this point shifted by `(dx, dy)`.
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// A boolean input of a truth table, identified by its display name.
///
/// The position of a variable inside [`TruthTable::variables`][crate::table::TruthTable::variables]
/// is significant: it selects the truth table column and the circle drawn for it.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Variable(String);

impl Variable {
    pub fn new(name: impl Into<String>) -> Self {
        Variable(name.into())
    }

    /// Returns the name drawn next to the variable's circle.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Variable {
    fn from(name: &str) -> Self {
        Variable::new(name)
    }
}

impl From<String> for Variable {
    fn from(name: String) -> Self {
        Variable(name)
    }
}
