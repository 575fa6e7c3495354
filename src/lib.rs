//! # rover-mission
//!
//! A deterministic simulation of rovers driving on a bounded rectangular
//! plateau. A textual command script sizes the plateau, then places and
//! drives rovers one after another; each parked rover blocks the cell it
//! stopped on for every rover that follows.
//!
//! The pieces, leaf first: [`Heading`] (compass arithmetic), [`Plateau`]
//! (bounds and occupancy), [`Rover`] (state machine over `L`/`R`/`M`
//! instructions) and [`Mission`] (script parsing and sequencing).

pub mod error;
pub mod heading;
pub mod instruction;
pub mod mission;
pub mod plateau;
pub mod rover;

pub use error::*;
pub use heading::*;
pub use instruction::*;
pub use mission::*;
pub use plateau::*;
pub use rover::*;
