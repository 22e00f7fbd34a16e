//! Common utilities for the Wyvern converter.
//!
//! This crate provides shared infrastructure used by all converter components:
//! - **Warning System** - colored terminal output for skipped or unsupported input

pub mod warning;
