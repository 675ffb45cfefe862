//! Booking window overlap check
//!
//! Every reservation claims the half-open window `[start, start + duration)`
//! on its table. Two windows conflict iff they intersect.

use chrono::{DateTime, Duration, FixedOffset};

/// Returns true iff `[start_a, start_a + duration)` intersects
/// `[start_b, start_b + duration)`.
///
/// Strict comparisons give half-open semantics: a reservation ending
/// exactly when another begins does not overlap, so back-to-back
/// bookings are allowed. Symmetric in its two start instants.
pub fn overlaps(
    start_a: DateTime<FixedOffset>,
    start_b: DateTime<FixedOffset>,
    duration: Duration,
) -> bool {
    start_a < start_b + duration && start_b < start_a + duration
}
