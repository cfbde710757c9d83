//! Solution text and deterministic replay for wrapbot runs.
//!
//! - [`codec`]: render and parse the canonical solution text.
//! - [`hash`]: FNV-1a fingerprint of a simulation state.
//! - [`compare`]: replay a solution onto a fresh state and check it
//!   against a recorded fingerprint.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod codec;
pub mod compare;
pub mod error;
pub mod hash;

pub use codec::{parse, read_solution, render, write_solution};
pub use compare::{cell_divergences, replay_solution, verify_replay, CellDivergence, ReplayReport};
pub use error::ReplayError;
pub use hash::state_hash;
