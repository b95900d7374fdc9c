//! File access
//!
//! - `workspace`: reads documents from the file system for diffing

pub mod workspace;
