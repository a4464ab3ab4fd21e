//! Foundational data structures, error types, and parser options.

pub mod error;
pub mod models;
pub mod options;
