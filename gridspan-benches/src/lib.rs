//! Benchmark support crate for gridspan.
//!
//! Provides seeded graph sources and parameter types used by the Criterion
//! benchmarks for the spanning tree engines and the planner.

pub mod error;
pub mod params;
pub mod source;
