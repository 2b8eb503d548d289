//! Error taxonomy for the cutting-optimization core.
//!
//! `optimize` itself never fails on bad panel/piece data — per the engine's
//! error model it returns a well-formed, empty [`crate::result::OptimizationResult`]
//! instead (see the module docs on [`crate::driver`]). This enum backs the
//! configuration-validation entry point and the concurrency helper, which do
//! need to report failures to their caller.

use thiserror::Error;

/// Errors surfaced by configuration validation and the batch/concurrency helper.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OptimizationError {
    /// The stock panel has a non-positive width or height.
    #[error("invalid panel size {width}x{height}: both dimensions must be positive")]
    InvalidPanel { width: i64, height: i64 },

    /// A piece type has a non-positive width, height, or quantity.
    #[error("invalid piece type {type_id}: {width}x{height} x{quantity}")]
    InvalidPiece {
        type_id: i64,
        width: i64,
        height: i64,
        quantity: i64,
    },

    /// The concurrency helper was asked to build a thread pool it cannot build.
    #[error("cannot build a thread pool with {max_threads} threads")]
    InvalidThreadCount { max_threads: usize },
}

/// Result alias used throughout the crate's fallible (non-`optimize`) entry points.
pub type Result<T> = std::result::Result<T, OptimizationError>;
