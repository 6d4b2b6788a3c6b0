//! Observability
//!
//! Structured logging setup for the ringlist binary and test harnesses.

pub mod telemetry;
