use crate::domain::LocationSample;
use chrono::{DateTime, Utc};
use std::time::Duration;

/// A sample taken in the future relative to `now` is never stale.
pub fn is_stale(sample: &LocationSample, now: DateTime<Utc>, max_age: Duration) -> bool {
    matches!(sample.age_at(now).to_std(), Ok(age) if age > max_age)
}

/// Strictly more precise than the current best. Ties keep the first sample seen.
pub fn is_better(candidate: &LocationSample, best: Option<&LocationSample>) -> bool {
    best.is_none_or(|best| candidate.horizontal_accuracy < best.horizontal_accuracy)
}

pub fn has_converged(best: &LocationSample, desired_accuracy: f64) -> bool {
    best.horizontal_accuracy <= desired_accuracy
}

/// The reading barely moved away from the best fix while a long time has passed since that fix was taken.
pub fn has_plateaued(sample: &LocationSample, best: &LocationSample, max_distance: f64, min_interval: Duration) -> bool {
    // A NaN distance is never close
    if !(sample.distance_to(best) < max_distance) {
        return false;
    }

    matches!(sample.timestamp.signed_duration_since(best.timestamp).to_std(), Ok(elapsed) if elapsed > min_interval)
}
