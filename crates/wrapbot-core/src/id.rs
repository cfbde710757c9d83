//! Strongly-typed identifiers.

use std::fmt;

/// Index of a robot within a simulation state.
///
/// The initial robot is `RobotId(0)`; clones are numbered in the order
/// they are spawned.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RobotId(pub u32);

impl RobotId {
    /// Position of this robot in the state's robot list.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for RobotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for RobotId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}
