//! Coverage strategies for the wrapbot simulator.
//!
//! Every strategy drives robot 0 of a [`State`](wrapbot_engine::State):
//! it proposes an action, hands it to an
//! [`ActionSink`](wrapbot_core::ActionSink), then applies it, so the
//! sink observes exactly the committed sequence.
//!
//! - [`Greedy`]: repeatedly walk a BFS route to the nearest wrapable
//!   cell. Routing is [`Routing::Plain`] or [`Routing::FbPartition`];
//!   following is [`Follow::Unordered`] or [`Follow::Turnover`].
//! - [`NaiveIterative`]: depth-first baseline for comparison.
//! - [`Portfolio`]: run several strategies on clones, keep the shortest.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod greedy;
pub mod naive;
pub mod partition;
pub mod portfolio;
pub mod search;
pub mod strategy;

pub use greedy::{Follow, Greedy, Routing};
pub use naive::NaiveIterative;
pub use partition::fb_partition;
pub use portfolio::{Outcome, Portfolio};
pub use search::{bfs, distances_from, DistanceMap};
pub use strategy::Strategy;
