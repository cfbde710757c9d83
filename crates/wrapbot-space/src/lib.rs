//! Spatial storage for wrapbot simulations.
//!
//! - [`Grid`]: dense, coordinate-indexed arena of [`Cell`](wrapbot_core::Cell)s
//!   with per-kind counters.
//! - [`Polygon`]: rectilinear contour with ray-cast containment.
//! - [`project`]: parity-sweep rasterization of polygon interiors into a grid.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;
pub mod polygon;

pub use error::SpaceError;
pub use grid::Grid;
pub use polygon::{project, Polygon};
