//! Dedicated environment materialization.

pub mod materializer;

pub use materializer::{EnvironmentBuilder, Materialized, Materializer, VenvBuilder};
