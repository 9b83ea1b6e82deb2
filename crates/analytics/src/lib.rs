//! # Journal Analytics Engine
//!
//! This crate derives performance statistics from a trading journal. It is
//! the "unbiased judge" of the application: the dashboard only renders what
//! this crate computes.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of
//!   storage, HTTP, or rendering. It depends only on `core-types` (Layer 0).
//! - **Stateless Calculation:** The `StatsEngine` is a stateless calculator.
//!   It takes the account's starting balance and the trade list as input on
//!   every call and produces a `Statistics` report as output. Nothing is
//!   cached or incrementally maintained, which makes it trivially reentrant
//!   and easy to test.
//! - **No failure modes:** Every numeric edge case (empty journal, zero
//!   balances, all-losing streaks) is a normal input with a defined fallback
//!   output, so the public functions return plain values, not `Result`s.
//!
//! ## Public API
//!
//! - `StatsEngine`: The struct that contains the calculation logic.
//! - `Statistics`: The standardized report of all performance metrics.
//! - `EquityPoint`: One point of the chartable equity curve.

// Declare the modules that constitute this crate.
pub mod curve;
pub mod engine;
pub mod report;

// Re-export the key components to create a clean, public-facing API.
pub use curve::EquityPoint;
pub use engine::StatsEngine;
pub use report::Statistics;
