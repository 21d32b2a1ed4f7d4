//! # CurveKit Core
//!
//! Core types and utilities shared by the CurveKit crates.
//! Provides the error taxonomy for malformed paths, editor-wide constants,
//! the shared-state alias used to guard an editor across threads, and the
//! colour and style types used by the canvases and the configuration.

pub mod constants;
pub mod error;
pub mod types;

pub use error::{Error, PathError, Result};

// Re-export type aliases for convenience
pub use types::{thread_safe, CanvasStyle, ParseColorError, Rgba, ThreadSafe};
