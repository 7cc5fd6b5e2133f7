//! Shared helpers.

pub mod telemetry;
