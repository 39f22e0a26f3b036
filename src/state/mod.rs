// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Tier 2: mutable search state.
//!
//! The path stack with its visited mask and remaining-room counter, plus
//! the statistics counters. All of it is owned by the running search and
//! restored through strictly nested push/pop on backtrack.

pub mod path;
pub mod statistics;

pub use path::PathState;
pub use statistics::{Counter, Statistics};
