//! Rover state and instruction execution.

use crate::heading::Heading;
use crate::instruction::{InstructionSet, RoverOp};
use crate::plateau::Plateau;
use glam::IVec2;
use serde::Serialize;
use std::fmt;
use tracing::warn;

/// Position and heading of a rover.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RoverState {
    /// Current grid cell.
    pub position: IVec2,

    /// Direction the rover faces; `M` advances along it.
    pub heading: Heading,
}

impl RoverState {
    /// Creates a state at `(x, y)` facing `heading`.
    pub fn new(x: i32, y: i32, heading: Heading) -> Self {
        Self {
            position: IVec2::new(x, y),
            heading,
        }
    }

    /// The cell one step ahead, or `None` if it would leave `i32` range.
    pub fn ahead(&self) -> Option<IVec2> {
        let delta = self.heading.delta();
        Some(IVec2::new(
            self.position.x.checked_add(delta.x)?,
            self.position.y.checked_add(delta.y)?,
        ))
    }

    /// Quarter turn counter-clockwise in place.
    pub fn turn_left(&mut self) {
        self.heading = self.heading.turn_left();
    }

    /// Quarter turn clockwise in place.
    pub fn turn_right(&mut self) {
        self.heading = self.heading.turn_right();
    }
}

impl fmt::Display for RoverState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.position.x, self.position.y, self.heading)
    }
}

/// A rover driving on a borrowed [`Plateau`].
///
/// The plateau is only read while the rover moves; committing the final cell
/// is the caller's job once the rover is done (see [`crate::Mission`]).
#[derive(Clone, Debug)]
pub struct Rover<'a> {
    plateau: &'a Plateau,
    state: RoverState,
}

impl<'a> Rover<'a> {
    /// Places a rover at `(x, y)` facing `heading`.
    ///
    /// The start cell is stored as given. Callers are expected to check it
    /// against [`Plateau::is_valid_position`] first.
    pub fn new(plateau: &'a Plateau, x: i32, y: i32, heading: Heading) -> Self {
        Self {
            plateau,
            state: RoverState::new(x, y, heading),
        }
    }

    /// Current position and heading.
    pub fn state(&self) -> RoverState {
        self.state
    }

    /// Current grid cell.
    pub fn position(&self) -> IVec2 {
        self.state.position
    }

    /// Current heading.
    pub fn heading(&self) -> Heading {
        self.state.heading
    }

    /// Formats the rover as `"<x> <y> <heading>"`, e.g. `"1 3 N"`.
    pub fn report(&self) -> String {
        self.state.to_string()
    }

    /// Runs `instructions` with the standard `L`/`R`/`M` mapping.
    ///
    /// Returns true if the rover halted because a move was blocked by the
    /// plateau edge or an occupied cell.
    pub fn navigate(&mut self, instructions: &str) -> bool {
        self.navigate_with(InstructionSet::shared_standard(), instructions)
    }

    /// Runs `instructions` left to right, resolving each character through `ops`.
    ///
    /// Unrecognized characters are logged and skipped. The first blocked move
    /// stops processing and the remaining characters are discarded; the rover
    /// stays on the last valid cell.
    pub fn navigate_with(&mut self, ops: &InstructionSet, instructions: &str) -> bool {
        for symbol in instructions.chars() {
            let hit = match ops.op(symbol) {
                Some(op) => self.apply(op),
                None => {
                    warn!("Wrong command for the rover, it will be ignored: {symbol:?}");
                    false
                }
            };

            if hit {
                return true;
            }
        }
        false
    }

    /// Performs a single operation. Returns true if it was a blocked move.
    pub fn apply(&mut self, op: RoverOp) -> bool {
        match op {
            RoverOp::TurnLeft => self.state.turn_left(),
            RoverOp::TurnRight => self.state.turn_right(),
            RoverOp::Move => return !self.step_forward(),
            RoverOp::Ignore => {}
        }
        false
    }

    /// Moves one cell ahead if the plateau allows it. Returns whether the rover moved.
    fn step_forward(&mut self) -> bool {
        match self.state.ahead() {
            Some(next) if self.plateau.is_valid_position(next.x, next.y) => {
                self.state.position = next;
                true
            }
            _ => false,
        }
    }
}

impl fmt::Display for Rover<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.state, f)
    }
}
