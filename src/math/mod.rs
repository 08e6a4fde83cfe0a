//! Mathematical utilities for the generator

/// Weighted random selection over integer weights
pub mod probability;
