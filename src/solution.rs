use crate::{change::Change, direction::Direction, plate::Plate};

/// The result of a solve: the smallest achievable change in the requested
/// direction and every distinct plate exchange that realises it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    direction: Direction,
    magnitude: Plate,
    changes: Vec<Change>,
}

impl Solution {
    #[must_use]
    pub fn new(direction: Direction, magnitude: Plate, changes: Vec<Change>) -> Self {
        Solution {
            direction,
            magnitude,
            changes,
        }
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn magnitude(&self) -> Plate {
        self.magnitude
    }

    #[must_use]
    pub fn changes(&self) -> &[Change] {
        &self.changes
    }
}
