use crate::error::MissionError;
use glam::IVec2;
use serde::Serialize;
use std::collections::HashSet;

/// The bounded grid rovers drive on.
///
/// Spans `[0, max_x] × [0, max_y]` inclusive and remembers which cells are
/// occupied by parked rovers. It knows nothing about individual rovers, only
/// cells, and occupancy never shrinks.
#[derive(Clone, Debug, Default, Serialize)]
pub struct Plateau {
    /// Inclusive upper-right corner.
    max: IVec2,

    /// Cells holding a parked rover.
    occupied: HashSet<IVec2>,
}

impl Plateau {
    /// Creates an empty plateau of `(max_x + 1) × (max_y + 1)` cells.
    ///
    /// Bounds past `i32::MAX` are clamped; no rover coordinate can reach them.
    pub fn new(max_x: u32, max_y: u32) -> Self {
        let clamp = |v: u32| i32::try_from(v).unwrap_or(i32::MAX);
        Self {
            max: IVec2::new(clamp(max_x), clamp(max_y)),
            occupied: HashSet::new(),
        }
    }

    /// Inclusive upper bound on X.
    pub fn max_x(&self) -> i32 {
        self.max.x
    }

    /// Inclusive upper bound on Y.
    pub fn max_y(&self) -> i32 {
        self.max.y
    }

    /// Returns true if `(x, y)` lies inside the grid, regardless of occupancy.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        (0..=self.max.x).contains(&x) && (0..=self.max.y).contains(&y)
    }

    /// Returns true if a parked rover holds `(x, y)`.
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        self.occupied.contains(&IVec2::new(x, y))
    }

    /// Returns true if a rover may stand on `(x, y)`: inside the grid and not occupied.
    pub fn is_valid_position(&self, x: i32, y: i32) -> bool {
        self.contains(x, y) && !self.is_occupied(x, y)
    }

    /// Marks `(x, y)` occupied. Saving the same cell twice is a no-op.
    pub fn save_rover_pos(&mut self, x: i32, y: i32) -> Result<(), MissionError> {
        if !self.contains(x, y) {
            return Err(MissionError::OffPlateau { x, y });
        }
        self.occupied.insert(IVec2::new(x, y));
        Ok(())
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.occupied.len()
    }
}
