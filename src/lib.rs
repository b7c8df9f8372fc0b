//! Reel Brawl - Casino Battle Simulation Core
//!
//! A three-reel slot machine drives a turn-based combat encounter:
//! the player pulls the lever (or throws a plain punch), the spin
//! result is classified into a win pattern, and the resulting effect
//! is applied to the fight. The crate is headless; presentation layers
//! consume the event stream each transition returns.

// Allow dead code in library - some functions are only used by the binary
#![allow(dead_code)]

pub mod battle;
pub mod build_info;
pub mod core;
pub mod simulator;
pub mod slots;
