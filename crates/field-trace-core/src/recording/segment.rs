use crate::Position;

use serde::{Deserialize, Serialize};

/// One contiguous run of positions between pause boundaries.
///
/// Grows by append only while it is the session's open segment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Segment {
    points: Vec<Position>,
}

impl Segment {
    /// Creates an empty segment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Positions in arrival order.
    pub fn points(&self) -> &[Position] {
        &self.points
    }

    /// Number of recorded positions.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether no position has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// A segment needs at least two points to form a line.
    pub fn contributes_area(&self) -> bool {
        self.points.len() >= 2
    }

    pub(crate) fn push(&mut self, position: Position) {
        self.points.push(position);
    }
}

impl From<Vec<Position>> for Segment {
    fn from(points: Vec<Position>) -> Self {
        Self { points }
    }
}

impl FromIterator<Position> for Segment {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}
