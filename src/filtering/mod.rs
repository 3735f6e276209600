// src/filtering/mod.rs

//! Provides standalone functions for file filtering logic.
//!
//! These are used by the discovery stage and the ignore pass that follows it,
//! and are exposed publicly for use in other contexts.

mod extension;
mod ignore_filter;

pub use extension::matches_extension;
pub use ignore_filter::{apply_ignore_filter, parse_ignore_list, IgnoreMatcher};
