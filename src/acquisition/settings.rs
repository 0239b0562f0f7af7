use std::time::Duration;

/// Tunables of an acquisition session.
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    /// Accuracy in meters at or below which a session converges.
    pub desired_accuracy: f64,
    pub session_timeout: Duration,
    /// Samples older than this at processing time are ignored.
    pub max_sample_age: Duration,
    pub plateau_distance: f64,
    pub plateau_interval: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            desired_accuracy: 10.0,
            session_timeout: Duration::from_secs(60),
            max_sample_age: Duration::from_secs(5),
            plateau_distance: 1.0,
            plateau_interval: Duration::from_secs(10),
        }
    }
}
