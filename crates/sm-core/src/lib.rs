//! `sm-core` - Strassen matrix multiplication engine.
//!
//! This crate provides:
//! - A `Matrix` type owning a row-major buffer of `i64` elements
//! - `SubmatrixView` descriptors and borrowed `MatRef`/`MatMut` pairings
//!   for addressing quadrants without copying
//! - The conventional multiply-accumulate kernel used as the base case
//! - A `ScratchPool` that preallocates every intermediate buffer up front
//! - The recursive `Strassen` orchestrator
//! - A `Multiplier` trait for choosing between the two paths

pub mod backend;
pub mod config;
pub mod cpu;
pub mod error;
pub mod matrix;
#[cfg(test)]
mod proptests;
pub mod strassen;
pub mod view;

// Re-export primary types at the crate root for convenience.
pub use backend::{ConventionalMultiplier, Multiplier, StrassenMultiplier};
pub use config::{StrassenConfig, DEFAULT_CUTOFF};
pub use error::{MatrixError, Result};
pub use matrix::{element_count, Element, Matrix, MAX_DISPLAY_DIM};
pub use strassen::pool::{PoolLevel, PreSum, Product, ScratchPool};
pub use strassen::{strassen, Strassen};
pub use view::{MatMut, MatRef, Quadrant, SubmatrixView};
