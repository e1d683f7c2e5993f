//! Combat: opponents, damage rolls, spells and the battle state machine.

#![allow(unused_imports)]

pub mod math;
pub mod session;
pub mod spells;
pub mod types;

pub use math::*;
pub use session::*;
pub use spells::*;
pub use types::*;
