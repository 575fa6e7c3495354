//! Error types for mission scripts and plateau bookkeeping.

use thiserror::Error;

/// Fatal conditions that abort a mission.
///
/// Unknown instruction characters and blocked moves are not errors; they are
/// logged and handled in-band by the rover.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MissionError {
    /// The script has no plateau header line.
    #[error("Wrong input for plateau initialization: header line missing")]
    MissingHeader,

    /// The header is not exactly two non-negative integer literals.
    #[error("Wrong input for plateau initialization: `{0}`")]
    InvalidHeader(String),

    /// A rover placement line is not `<x> <y> <heading>`.
    #[error("line {line}: invalid rover placement `{input}`")]
    InvalidPlacement { line: usize, input: String },

    /// Heading letter outside `N`, `E`, `S`, `W`.
    #[error("unknown heading `{0}`")]
    UnknownHeading(String),

    /// A rover placement names a cell outside the plateau.
    #[error("line {line}: rover starts at ({x}, {y}), outside the plateau")]
    StartOffPlateau { line: usize, x: i32, y: i32 },

    /// A rover placement names a cell an earlier rover already occupies.
    #[error("line {line}: rover starts at ({x}, {y}), which is already occupied")]
    StartOccupied { line: usize, x: i32, y: i32 },

    /// The script ends on a placement line with no instruction line after it.
    #[error("line {line}: rover placement has no instruction line")]
    MissingInstructions { line: usize },

    /// Occupancy write outside the plateau bounds.
    #[error("cell ({x}, {y}) is outside the plateau")]
    OffPlateau { x: i32, y: i32 },
}

impl MissionError {
    /// Creates a placement error for script line `line`.
    pub fn placement(line: usize, input: impl Into<String>) -> Self {
        Self::InvalidPlacement {
            line,
            input: input.into(),
        }
    }
}
