mod controller;
mod sample_policy;
mod settings;

pub use controller::{AcquisitionController, Capabilities};
pub use settings::Settings;

#[cfg(test)]
mod session_tests;
