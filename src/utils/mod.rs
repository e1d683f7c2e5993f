//! Utility modules: save-slot persistence.

pub mod persistence;

pub use persistence::*;
