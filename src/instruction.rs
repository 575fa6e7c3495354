//! Rover operations and the symbol table that maps instruction characters to them.

use std::collections::HashMap;
use std::sync::LazyLock;

static STANDARD: LazyLock<InstructionSet> = LazyLock::new(InstructionSet::standard);

/// Operations a rover can perform in a single step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoverOp {
    /// Quarter turn counter-clockwise (`L`).
    TurnLeft,
    /// Quarter turn clockwise (`R`).
    TurnRight,
    /// Advance one cell along the current heading (`M`).
    Move,
    /// No-op. The symbol is known but deliberately has no effect.
    Ignore,
}

/// Maps instruction characters to [`RoverOp`]s.
///
/// Characters with no registered mapping are reported by the rover as
/// unrecognized and skipped. Map a character to [`RoverOp::Ignore`] to skip it
/// silently.
#[derive(Clone, Debug, Default)]
pub struct InstructionSet {
    ops: HashMap<char, RoverOp>,
}

impl InstructionSet {
    /// Creates an empty set. Every character is unrecognized until mapped.
    pub fn new() -> Self {
        Self::default()
    }

    /// The conventional mapping: `L`, `R`, `M`.
    pub fn standard() -> Self {
        let mut set = Self::new();
        set.populate_standard_symbols();
        set
    }

    /// Shared, lazily built copy of [`standard`](Self::standard).
    pub fn shared_standard() -> &'static InstructionSet {
        &STANDARD
    }

    /// Assigns `op` to `symbol`, replacing any previous mapping.
    pub fn set_op(&mut self, symbol: char, op: RoverOp) {
        self.ops.insert(symbol, op);
    }

    /// Builder form of [`set_op`](Self::set_op).
    pub fn with_op(mut self, symbol: char, op: RoverOp) -> Self {
        self.set_op(symbol, op);
        self
    }

    /// Registers `L`, `R` and `M`. Existing mappings for other symbols are kept.
    pub fn populate_standard_symbols(&mut self) {
        let mappings = [
            ('L', RoverOp::TurnLeft),
            ('R', RoverOp::TurnRight),
            ('M', RoverOp::Move),
        ];

        for (symbol, op) in mappings {
            self.set_op(symbol, op);
        }
    }

    /// Looks up the operation for `symbol`, or `None` if it is unrecognized.
    pub fn op(&self, symbol: char) -> Option<RoverOp> {
        self.ops.get(&symbol).copied()
    }
}
