//! Battle system: units, the turn state machine, and its event stream.

#![allow(unused_imports)]

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
