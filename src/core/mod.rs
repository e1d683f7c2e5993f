//! Engine configuration, pacing, and the game store.

#![allow(unused_imports)]

pub mod config;
pub mod constants;
pub mod error;
pub mod scheduler;
pub mod store;

pub use config::*;
pub use constants::*;
pub use error::*;
pub use scheduler::*;
pub use store::*;
