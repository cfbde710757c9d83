//! Error types for grid construction and rasterization.

use std::fmt;
use wrapbot_core::Point;

/// Errors arising from grid construction, polygon validation, or
/// out-of-range cell writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpaceError {
    /// A polygon edge is neither horizontal nor vertical.
    DiagonalEdge {
        /// Edge start.
        from: Point,
        /// Edge end.
        to: Point,
    },
    /// A polygon needs at least four corners.
    TooFewVertices {
        /// Number of corners supplied.
        count: usize,
    },
    /// A non-empty polygon set contains no vertical edge to sweep.
    NoVerticalEdges,
    /// Attempted to construct a grid with zero cells.
    EmptyGrid,
    /// A point lies outside the grid.
    OutOfBounds {
        /// The offending point.
        point: Point,
        /// Grid dimension.
        dim: Point,
    },
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DiagonalEdge { from, to } => {
                write!(f, "polygon edge {from}-{to} is not axis-aligned")
            }
            Self::TooFewVertices { count } => {
                write!(f, "polygon has {count} vertices, need at least 4")
            }
            Self::NoVerticalEdges => write!(f, "polygon set has no vertical edges"),
            Self::EmptyGrid => write!(f, "grid must have at least one cell"),
            Self::OutOfBounds { point, dim } => {
                write!(f, "point {point} out of bounds for grid {}x{}", dim.x, dim.y)
            }
        }
    }
}

impl std::error::Error for SpaceError {}
