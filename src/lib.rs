//! lfsr-sentinel - Linear complexity monitoring for bit streams
//!
//! This library estimates the linear complexity of binary sequences with the
//! Berlekamp-Massey algorithm and uses it as a lightweight predictability
//! test: a sliding window whose complexity falls below a configured fraction
//! of its length is flagged as suspicious (replayed or generated traffic
//! rather than genuine entropy).

pub mod analyzer;
pub mod bits;
pub mod cli;
pub mod json_output;
pub mod monitor;
pub mod stats;
pub mod synthesis;
