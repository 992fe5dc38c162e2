//! Lucky Number Core — shared abstractions.
//!
//! This crate defines the traits and types that the draw context, the
//! session store and the API depend on. Apart from the production RNG and
//! clock it contains no infrastructure code.

pub mod clock;
pub mod command;
pub mod error;
pub mod repository;
pub mod rng;
