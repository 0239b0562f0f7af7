use std::fmt::Debug;

/// A source of location samples.
///
/// Once started, a provider pushes `Event::LocationUpdated` and `Event::ProviderFailed` into the
/// inbox it was registered with until it is stopped.
pub trait LocationProvider: Debug + Send {
    fn start(&mut self, desired_accuracy: f64);

    fn stop(&mut self);
}
