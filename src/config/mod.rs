//! # Configuration Module
//!
//! Centralizes the tunable constants of the log store. The on-medium format
//! constants and the cache geometry are interdependent (the journal commit
//! granularity *is* the cache block size), so they live together here with
//! their relationships documented and enforced through compile-time
//! assertions.

pub mod constants;
pub use constants::*;
