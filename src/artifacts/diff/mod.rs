//! The diff engine
//!
//! Two-level alignment of a pair of documents:
//!
//! - `alignment`: the generic Myers edit-script routine over any `Eq` units
//! - `tokens`: line segmentation and the word/whitespace tokenizer
//! - `text_diff`: the `TextDiff`/`TextChange` output model
//! - `differencer`: line pass, hunk refinement, and span emission
//!
//! The engine is a pure function of its two inputs: no I/O, no state across
//! calls, and a valid result for every pair of strings.

pub mod alignment;
pub mod differencer;
pub mod text_diff;
pub mod tokens;
