//! Trait seam between the computation core and reading providers.

use skycast_types::{Coordinates, PollutantReading, Result};

/// A source of current pollutant readings for a location.
///
/// Actual fetch layers (ground-station network clients, satellite
/// products) live outside this crate; this trait is the seam they plug
/// into, so request handlers and tests can be written against generic
/// code. [`MockStation`](crate::mock::MockStation) is the in-repo
/// implementation.
///
/// Implementations take `&mut self` so stateful sources (call counters,
/// rolling caches) don't need interior mutability.
pub trait ReadingSource {
    /// Produce the latest reading for a location.
    fn current(&mut self, location: Coordinates) -> Result<PollutantReading>;
}
