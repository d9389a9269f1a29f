//! Egress strategies.

use std::fmt;

use crate::GameError;

/// An agent's exit behaviour.
///
/// The discriminants are the raw codes used at I/O boundaries.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Strategy {
    /// Pushes towards the exit.
    Impatient = 0,
    /// Queues.  Every agent starts out patient.
    #[default]
    Patient = 1,
}

impl Strategy {
    /// Slot of this strategy in a [`StrategySet`]-ordered accumulator.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Strategy {
    type Error = GameError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Strategy::Impatient),
            1 => Ok(Strategy::Patient),
            other => Err(GameError::InvalidStrategy(other)),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Strategy::Impatient => "impatient",
            Strategy::Patient => "patient",
        })
    }
}

/// The ordered choice domain of the egress game.
///
/// Order matters: best-response ties resolve to the earlier member.
#[derive(Copy, Clone, Debug)]
pub struct StrategySet;

impl StrategySet {
    pub const MEMBERS: [Strategy; 2] = [Strategy::Impatient, Strategy::Patient];

    #[inline]
    pub fn as_slice() -> &'static [Strategy] {
        &Self::MEMBERS
    }

    #[inline]
    pub fn contains(s: Strategy) -> bool {
        Self::MEMBERS.contains(&s)
    }
}
