//! Core types for the wrapbot coverage simulator.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by every other crate in the workspace: integer
//! points and orientations, cell kinds, boosters, robot actions, the
//! per-robot [`Solution`] container, the [`ActionSink`] seam, and the
//! error enums raised by the simulation and strategy layers.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod action;
pub mod booster;
pub mod cell;
pub mod error;
pub mod id;
pub mod point;
pub mod sink;
pub mod solution;

pub use action::{Action, Direction, MOVES};
pub use booster::{BoosterType, Inventory};
pub use cell::Cell;
pub use error::{StepError, StrategyError};
pub use id::RobotId;
pub use point::{Orientation, Point, Rotation};
pub use sink::ActionSink;
pub use solution::Solution;
