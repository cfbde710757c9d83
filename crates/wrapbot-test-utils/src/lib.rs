//! Test utilities for wrapbot development.
//!
//! [`fixtures`] turns small ASCII drawings into maps; [`synthetic`]
//! generates larger deterministic maps for property tests and benches.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod synthetic;

pub use fixtures::{parse_ascii, Fixture};
