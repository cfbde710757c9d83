//! Simulation state for the wrapbot coverage robot.
//!
//! [`State`] owns the grid, the robots, and the boosters lying on the
//! board. Every [`apply`](State::apply) returns a [`ReversibleAction`]
//! that [`unapply`](State::unapply) consumes to restore the exact prior
//! state, which is what lets strategies explore and roll back.
//!
//! [`Playback`] layers an undo/redo stack over a private copy of a state
//! and publishes a [`Snapshot`] after every transition for viewers.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod map;
pub mod playback;
pub mod reversible;
pub mod robot;
pub mod snapshot;
pub mod state;

pub use config::{ConfigError, SimConfig};
pub use map::MapSpec;
pub use playback::Playback;
pub use reversible::ReversibleAction;
pub use robot::{Robot, DEFAULT_TENTACLES};
pub use snapshot::{RobotView, Snapshot};
pub use state::State;
