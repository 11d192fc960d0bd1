//! Map coordinates used as graph nodes.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A location on the campus map, in map pixel coordinates.
///
/// Equality, ordering and hashing compare the bit patterns of the coordinates
/// with `-0.0` folded into `0.0`, which makes `Point` usable as a graph node
/// label.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

impl Point {
    /// Create a point.
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x: unsigned_zero(x),
            y: unsigned_zero(y),
        }
    }

    /// Straight-line distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Point {}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        unsigned_zero(self.x)
            .total_cmp(&unsigned_zero(other.x))
            .then_with(|| unsigned_zero(self.y).total_cmp(&unsigned_zero(other.y)))
    }
}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        unsigned_zero(self.x).to_bits().hash(state);
        unsigned_zero(self.y).to_bits().hash(state);
    }
}

// -0.0 + 0.0 is 0.0; every other value is unchanged.
fn unsigned_zero(value: f64) -> f64 {
    value + 0.0
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}
