//! Core data structures and algorithms
//!
//! - `core`: Shared utilities (pager wrapper, etc.)
//! - `diff`: The two-level text diff engine and its output model

pub mod core;
pub mod diff;
