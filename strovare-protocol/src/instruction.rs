//! ## strovare-protocol::instruction
//! **Single-character movement instructions**

use thiserror::Error;

/// Raised when an instruction character is not one of `L`, `R`, `M`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("unknown instruction {0:?}")]
pub struct UnknownInstruction(pub char);

/// One movement instruction for a rover.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// Quarter turn counter-clockwise, in place.
    Left,
    /// Quarter turn clockwise, in place.
    Right,
    /// One cell forward along the current heading.
    Move,
}

impl Instruction {
    /// The character this instruction is written as on the wire.
    pub const fn symbol(self) -> char {
        match self {
            Instruction::Left => 'L',
            Instruction::Right => 'R',
            Instruction::Move => 'M',
        }
    }
}

impl TryFrom<char> for Instruction {
    type Error = UnknownInstruction;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        match symbol {
            'L' => Ok(Instruction::Left),
            'R' => Ok(Instruction::Right),
            'M' => Ok(Instruction::Move),
            other => Err(UnknownInstruction(other)),
        }
    }
}
