//! Wrapbot: a grid coverage simulator and solver.
//!
//! A robot with a rotatable set of tentacles has to paint ("wrap") every
//! free cell of a rectilinear map. This facade re-exports the public API
//! of the sub-crates; adding `wrapbot` as a single dependency is enough
//! for most users.
//!
//! # Quick start
//!
//! ```rust
//! use wrapbot::prelude::*;
//!
//! // A 3x1 corridor with the robot at the left end.
//! let grid = Grid::new(3, 1, Cell::Free).unwrap();
//! let initial = State::new(grid, Point::ZERO, []).unwrap();
//!
//! let mut state = initial.clone();
//! let mut solution = Solution::new();
//! Portfolio::standard().run(&mut state, &mut solution).unwrap();
//! assert!(state.is_complete());
//!
//! // The rendered solution replays to the same result.
//! let text = wrapbot::replay::render(&solution);
//! let parsed = wrapbot::replay::parse(&text).unwrap();
//! let report = replay_solution(&initial, &parsed).unwrap();
//! assert!(report.complete);
//! assert_eq!(report.hash, state_hash(&state));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `wrapbot-core` | Points, cells, boosters, actions, solutions |
//! | [`space`] | `wrapbot-space` | Grid storage and polygon rasterization |
//! | [`engine`] | `wrapbot-engine` | Simulation state, undo records, playback |
//! | [`strategy`] | `wrapbot-strategy` | Search helpers and coverage strategies |
//! | [`replay`] | `wrapbot-replay` | Solution text format and replay checks |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core value types (`wrapbot-core`).
///
/// Points and orientations, cell states, booster kinds, robot actions and
/// the [`types::Solution`] they accumulate into.
pub use wrapbot_core as types;

/// Grid storage and polygon rasterization (`wrapbot-space`).
pub use wrapbot_space as space;

/// Simulation state (`wrapbot-engine`).
///
/// [`engine::State`] applies and undoes actions;
/// [`engine::Playback`] adds redo and publishes snapshots to a viewer.
pub use wrapbot_engine as engine;

/// Coverage strategies (`wrapbot-strategy`).
///
/// The [`strategy::Strategy`] trait, the greedy and naive strategies, and
/// the [`strategy::Portfolio`] that keeps the shortest of several runs.
pub use wrapbot_strategy as strategy;

/// Solution text format and deterministic replay (`wrapbot-replay`).
pub use wrapbot_replay as replay;

/// Common imports for typical usage.
///
/// ```rust
/// use wrapbot::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use wrapbot_core::{
        Action, ActionSink, BoosterType, Cell, Direction, Inventory, Orientation, Point, RobotId,
        Rotation, Solution,
    };

    // Errors
    pub use wrapbot_core::{StepError, StrategyError};
    pub use wrapbot_engine::ConfigError;
    pub use wrapbot_replay::ReplayError;
    pub use wrapbot_space::SpaceError;

    // Space
    pub use wrapbot_space::{Grid, Polygon};

    // Engine
    pub use wrapbot_engine::{MapSpec, Playback, ReversibleAction, SimConfig, Snapshot, State};

    // Strategy
    pub use wrapbot_strategy::{Follow, Greedy, NaiveIterative, Portfolio, Routing, Strategy};

    // Replay
    pub use wrapbot_replay::{replay_solution, state_hash, verify_replay};
}
