//! Core bubble sort simulation library.
//!
//! Main components:
//! - [`bars`] — the array of bar heights being sorted.
//! - [`sorter`] — the one-comparison-per-call bubble sort state machine.
//! - [`config`] — global configuration for array generation.
//! - [`types`] — shared type aliases.

pub mod bars;
pub mod config;
pub mod sorter;
pub mod types;
