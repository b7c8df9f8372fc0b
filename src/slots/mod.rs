//! Slot machine: reel outcomes, win classification, spin evaluation.

#![allow(unused_imports)]

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
