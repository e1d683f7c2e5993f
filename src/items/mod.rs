//! Item system: types, equipment, and the shop catalog.

pub mod catalog;
pub mod equipment;
pub mod types;

pub use catalog::*;
pub use equipment::*;
pub use types::*;
