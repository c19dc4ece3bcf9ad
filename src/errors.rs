//! Error Types
//!
//! This module defines the error types used throughout the crate.
//!
//! # Overview
//!
//! The main error type [`SlewError`] covers the few failure modes a motion
//! engine has:
//! - Stale or foreign scene-graph handles
//! - Building a track from no segments
//! - Non-positive speed parameters
//!
//! Degenerate geometry (zero-length directions, zero-duration tracks) is
//! deliberately *not* an error: those inputs are valid and resolved by
//! fallback branches in the math and track modules.
//!
//! # Usage
//!
//! Fallible public APIs return [`Result<T>`] which is an alias for
//! `std::result::Result<T, SlewError>`.
//!
//! ```rust,ignore
//! use slew::errors::{Result, SlewError};
//!
//! fn capture_pose() -> Result<()> {
//!     // Operations that may fail return Result
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// The main error type for the slew motion engine.
#[derive(Error, Debug)]
pub enum SlewError {
    // ========================================================================
    // Scene-graph errors
    // ========================================================================
    /// The node handle is stale or belongs to a different scene graph.
    #[error("Node not found in scene graph: {context}")]
    NodeNotFound {
        /// Description of what was being accessed
        context: &'static str,
    },

    // ========================================================================
    // Motion construction errors
    // ========================================================================
    /// A motion track needs at least one segment.
    #[error("Motion track built from an empty segment list")]
    EmptyTrack,

    /// Speeds divide durations and must be strictly positive.
    #[error("Speed must be > 0, got {value}")]
    InvalidSpeed {
        /// The offending value
        value: f32,
    },
}

/// Alias for `Result<T, SlewError>`.
pub type Result<T> = std::result::Result<T, SlewError>;
