//! Error types for the simulation and strategy layers.
//!
//! Every variant describes a consistency violation: the strategy layer is
//! expected to propose only legal actions, so callers treat these as fatal
//! and propagate them rather than attempt recovery.

use crate::booster::BoosterType;
use crate::cell::Cell;
use crate::id::RobotId;
use crate::point::Point;
use std::error::Error;
use std::fmt;

/// Errors from applying an action to a simulation state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepError {
    /// No robot with this id exists.
    UnknownRobot {
        /// The requested robot.
        robot: RobotId,
    },
    /// The target cell lies outside the grid.
    OutOfBounds {
        /// Acting robot.
        robot: RobotId,
        /// Cell the robot tried to enter.
        target: Point,
    },
    /// The target cell is an obstacle and cannot be drilled.
    Blocked {
        /// Acting robot.
        robot: RobotId,
        /// Cell the robot tried to enter.
        target: Point,
        /// Kind of the blocking cell.
        cell: Cell,
    },
    /// The action needs a booster the inventory does not hold.
    MissingBooster {
        /// Acting robot.
        robot: RobotId,
        /// The booster that would be spent.
        booster: BoosterType,
    },
    /// The attachment offset is not adjacent to the existing tentacles.
    DetachedAttachment {
        /// Acting robot.
        robot: RobotId,
        /// Requested world-frame offset.
        offset: Point,
    },
    /// Teleport target is not an installed beacon.
    UnknownBeacon {
        /// Acting robot.
        robot: RobotId,
        /// Requested target.
        target: Point,
    },
    /// A beacon cannot be installed here (existing beacon or spawn point).
    BeaconConflict {
        /// Acting robot.
        robot: RobotId,
        /// Current position.
        position: Point,
    },
    /// Cloning requires standing on a spawn point.
    NotOnSpawnPoint {
        /// Acting robot.
        robot: RobotId,
        /// Current position.
        position: Point,
    },
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownRobot { robot } => write!(f, "unknown robot {robot}"),
            Self::OutOfBounds { robot, target } => {
                write!(f, "robot {robot} cannot leave the grid at {target}")
            }
            Self::Blocked {
                robot,
                target,
                cell,
            } => write!(f, "robot {robot} blocked by {cell:?} at {target}"),
            Self::MissingBooster { robot, booster } => {
                write!(f, "robot {robot} needs a {booster} booster")
            }
            Self::DetachedAttachment { robot, offset } => {
                write!(f, "robot {robot} cannot attach a tentacle at {offset}")
            }
            Self::UnknownBeacon { robot, target } => {
                write!(f, "robot {robot} cannot teleport to {target}: no beacon")
            }
            Self::BeaconConflict { robot, position } => {
                write!(f, "robot {robot} cannot install a beacon at {position}")
            }
            Self::NotOnSpawnPoint { robot, position } => {
                write!(f, "robot {robot} at {position} is not on a spawn point")
            }
        }
    }
}

impl Error for StepError {}

/// Errors from running a routing strategy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StrategyError {
    /// A proposed action was rejected by the state.
    Step(StepError),
    /// The robot is expected to stand on a wrapped cell between routes.
    NotOnWrappedCell {
        /// Where the robot stands.
        position: Point,
    },
    /// A route contained no move to walk.
    EmptyPath {
        /// Where the route started.
        from: Point,
    },
    /// Two consecutive route cells are not 4-adjacent.
    BrokenPath {
        /// Where the robot stands.
        from: Point,
        /// The next route cell.
        to: Point,
    },
}

impl fmt::Display for StrategyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Step(e) => write!(f, "step rejected: {e}"),
            Self::NotOnWrappedCell { position } => {
                write!(f, "robot stands on an unwrapped cell at {position}")
            }
            Self::EmptyPath { from } => write!(f, "route from {from} has no moves"),
            Self::BrokenPath { from, to } => {
                write!(f, "route step {from} -> {to} is not a single move")
            }
        }
    }
}

impl Error for StrategyError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Step(e) => Some(e),
            _ => None,
        }
    }
}

impl From<StepError> for StrategyError {
    fn from(e: StepError) -> Self {
        Self::Step(e)
    }
}
