//! IDM Core - Core types and definitions for the Insights Data Model
//!
//! This crate provides the fundamental types used across the IDM ecosystem:
//! - Chapter/dimension codes and the fixed assessment taxonomy
//! - Score band and peer comparison band classification
//! - The IDM record types (chapters, dimensions, findings, ...)
//! - Error types

pub mod error;
pub mod score;
pub mod taxonomy;
pub mod types;

// Re-export commonly used types
pub use error::CoreError;
pub use score::{round1, ScoreBand};
pub use taxonomy::Taxonomy;
pub use types::{ChapterCode, DimensionCode, Idm};
