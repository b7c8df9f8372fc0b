//! Core constants shared across the crate.

#![allow(unused_imports)]

pub mod constants;

pub use constants::*;
