//! Mission driver that turns a command script into rover reports.
//!
//! The entry point is [`Mission`]. Build it from the raw script, optionally
//! tune it with a [`MissionConfig`], then call [`Mission::start`] and read the
//! result back through [`Mission::output`] or [`Mission::reports`].
//!
//! # Script format
//!
//! ```text
//! 5 5          <- plateau header: "<upper Y bound> <right X bound>"
//! 1 2 N        <- rover placement: "<x> <y> <heading>"
//! LMLMLMLMM    <- that rover's instructions
//! 3 3 E
//! MMRMMRMRRM
//! ```

use crate::error::MissionError;
use crate::heading::Heading;
use crate::instruction::InstructionSet;
use crate::plateau::Plateau;
use crate::rover::Rover;
use glam::IVec2;
use serde::Serialize;
use std::fmt;
use tracing::{debug, info, warn};

/// How to treat a placement line that has no instruction line after it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TrailingRover {
    /// Abort the mission with [`MissionError::MissingInstructions`].
    #[default]
    Reject,
    /// Run the rover with zero instructions.
    Idle,
}

/// Configuration for mission execution.
///
/// The default is stricter than a bare run of the script: a rover whose
/// start cell is off the plateau or already occupied aborts the whole
/// mission. Set `validate_start` to `false` to place such rovers unchecked,
/// so the mission completes unless the header is malformed (an off-plateau
/// rover still fails when its final cell is committed).
#[derive(Clone, Debug)]
pub struct MissionConfig {
    /// Reject rovers placed off the plateau or on an occupied cell.
    pub validate_start: bool,
    /// Policy for a final placement line with no instructions.
    pub trailing_rover: TrailingRover,
    /// Symbol table used to decode instruction lines.
    pub ops: InstructionSet,
}

impl Default for MissionConfig {
    fn default() -> Self {
        Self {
            validate_start: true,
            trailing_rover: TrailingRover::Reject,
            ops: InstructionSet::standard(),
        }
    }
}

/// Final state of one rover after its instructions ran.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RoverReport {
    pub position: IVec2,
    pub heading: Heading,
    /// True if a blocked move cut the instruction line short.
    pub halted: bool,
}

impl fmt::Display for RoverReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.position.x, self.position.y, self.heading)
    }
}

/// A single run of a command script.
#[derive(Clone, Debug)]
pub struct Mission {
    script: String,
    config: MissionConfig,
    plateau: Option<Plateau>,
    reports: Vec<RoverReport>,
    output: String,
}

impl Mission {
    /// Stores the raw script. Nothing is parsed until [`start`](Self::start).
    pub fn new(script: impl Into<String>) -> Self {
        Self {
            script: script.into(),
            config: MissionConfig::default(),
            plateau: None,
            reports: Vec::new(),
            output: String::new(),
        }
    }

    /// Replaces the configuration (builder pattern).
    pub fn with_config(mut self, config: MissionConfig) -> Self {
        self.config = config;
        self
    }

    /// Parses the script and drives every rover in order.
    ///
    /// Each rover runs its whole instruction line (or until it is blocked)
    /// and its final cell is marked occupied before the next rover starts, so
    /// later rovers can be blocked by earlier ones.
    ///
    /// On error nothing is kept: output, reports and plateau stay empty.
    /// Calling `start` again re-runs the script from scratch.
    pub fn start(&mut self) -> Result<(), MissionError> {
        self.plateau = None;
        self.reports.clear();
        self.output.clear();

        let mut lines = self.script.lines().enumerate().map(|(i, l)| (i + 1, l));

        let (_, header) = lines.next().ok_or(MissionError::MissingHeader)?;
        let mut plateau = parse_header(header)?;
        debug!(
            "Plateau initialized: {} x {}",
            i64::from(plateau.max_x()) + 1,
            i64::from(plateau.max_y()) + 1
        );

        let mut reports = Vec::new();
        while let Some((line, placement)) = lines.next() {
            let instructions = match lines.next() {
                Some((_, instructions)) => instructions,
                None => match self.config.trailing_rover {
                    TrailingRover::Reject => {
                        return Err(MissionError::MissingInstructions { line });
                    }
                    TrailingRover::Idle => "",
                },
            };
            reports.push(self.drive(&mut plateau, line, placement, instructions)?);
        }

        info!("Mission complete: {} rover(s) deployed", reports.len());

        self.output = reports.iter().map(|r| format!("{r}\n")).collect();
        self.reports = reports;
        self.plateau = Some(plateau);
        Ok(())
    }

    /// Accumulated `"<x> <y> <heading>\n"` lines, one per rover, in script order.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Per-rover results of the last successful run, in script order.
    pub fn reports(&self) -> &[RoverReport] {
        &self.reports
    }

    /// The plateau after the last successful run.
    pub fn plateau(&self) -> Option<&Plateau> {
        self.plateau.as_ref()
    }

    fn drive(
        &self,
        plateau: &mut Plateau,
        line: usize,
        placement: &str,
        instructions: &str,
    ) -> Result<RoverReport, MissionError> {
        let (x, y, heading) = parse_placement(line, placement)?;

        if self.config.validate_start {
            if !plateau.contains(x, y) {
                return Err(MissionError::StartOffPlateau { line, x, y });
            }
            if plateau.is_occupied(x, y) {
                return Err(MissionError::StartOccupied { line, x, y });
            }
        }

        let mut rover = Rover::new(plateau, x, y, heading);
        debug!("Rover deployed at {rover}, instructions {instructions:?}");
        let halted = rover.navigate_with(&self.config.ops, instructions);
        let state = rover.state();

        plateau.save_rover_pos(state.position.x, state.position.y)?;
        if halted {
            warn!("Limit or obstacle hit, stopping rover at {state}");
        }
        debug!("Rover parked at {state}");

        Ok(RoverReport {
            position: state.position,
            heading: state.heading,
            halted,
        })
    }
}

/// Parses `"<upper> <right>"`. The first number bounds Y, the second bounds X.
fn parse_header(header: &str) -> Result<Plateau, MissionError> {
    let invalid = || MissionError::InvalidHeader(header.to_string());

    let tokens: Vec<&str> = header.split(' ').collect();
    let [upper, right] = tokens.as_slice() else {
        return Err(invalid());
    };

    let parse = |token: &str| -> Result<u32, MissionError> {
        if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        token.parse().map_err(|_| invalid())
    };

    let max_y = parse(*upper)?;
    let max_x = parse(*right)?;
    Ok(Plateau::new(max_x, max_y))
}

fn parse_placement(line: usize, placement: &str) -> Result<(i32, i32, Heading), MissionError> {
    let invalid = || MissionError::placement(line, placement);

    let tokens: Vec<&str> = placement.split(' ').collect();
    let [x, y, heading] = tokens.as_slice() else {
        return Err(invalid());
    };

    let x = x.parse().map_err(|_| invalid())?;
    let y = y.parse().map_err(|_| invalid())?;
    let heading = heading.parse().map_err(|_| invalid())?;
    Ok((x, y, heading))
}
