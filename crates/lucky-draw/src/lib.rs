//! Lucky Number — draw context.
//!
//! Responsible for validating requested ranges, drawing values that differ
//! from the previous draw, classifying notable values, and keeping the
//! bounded history of each session.

pub mod application;
pub mod domain;
