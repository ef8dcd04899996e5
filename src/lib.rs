//! # Keyword Buster
//!
//! Look up dictionary words against wildcard patterns such as `C?T`, and line
//! the patterns up around their wildcards so that they can be shown stacked.
//!
//! * [`dictionary`] loads the word list.
//! * [`pattern`] matches words against a single pattern.
//! * [`align`] stacks a batch of patterns into a character grid.
//! * [`lookup`] ties the above together for one batch of patterns.
//! * [`cursor`] is the navigation state machine for interactive front-ends.
//! * [`present`] is the seam through which front-ends consume a lookup.

pub mod align;
pub mod cursor;
pub mod dictionary;
pub mod error;
pub mod lookup;
pub mod pattern;
pub mod present;
