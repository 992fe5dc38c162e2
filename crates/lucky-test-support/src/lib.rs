//! Shared test doubles for the Lucky Number generator.

mod clock;
mod repository;
mod rng;

pub use clock::FixedClock;
pub use repository::{EmptySnapshotRepository, FailingSnapshotRepository};
pub use rng::{MockRng, SequenceRng};
