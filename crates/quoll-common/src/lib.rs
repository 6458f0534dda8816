//! Common utilities for the Quoll checker.
//!
//! This crate provides shared infrastructure used by all checker components:
//! - **Warning System** - colored terminal output for degraded checks

pub mod warning;
