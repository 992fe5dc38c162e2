//! Domain model for the draw context.

pub mod aggregates;
pub mod commands;
pub mod generator;
pub mod ledger;
