//! User-facing commands
//!
//! - `diff`: the side-by-side rendering of a computed [`TextDiff`]
//!
//! Commands only orchestrate and present; the diff itself is computed by the
//! engine in `artifacts::diff`.

pub mod diff;
