//! State module for tracking scrape progress
//!
//! # Components
//!
//! - `RunState`: the two-state pagination machine (running / done)
//! - `StopReason`: why a run reached its terminal state

mod run_state;

// Re-export main types
pub use run_state::{RunState, StopReason};
