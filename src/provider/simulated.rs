use crate::domain::events::Event;
use crate::domain::{GeoLocation, LocationProvider, LocationSample};
use chrono::Utc;
use std::time::Duration;
use tokio::sync::mpsc::Sender;
use tokio::task::JoinHandle;
use tokio::time::interval;
use tracing::{debug, info, warn};

const METERS_PER_DEGREE: f64 = 111_320.0;

/// Pushes one sample per tick around `origin`, walking a scripted accuracy sequence.
///
/// Once the script runs out its last accuracy repeats. Each reading is offset from the origin by a
/// fraction of its accuracy, so readings settle as the accuracy improves.
#[derive(Debug)]
pub struct SimulatedProvider {
    tx: Sender<Event>,
    origin: GeoLocation,
    interval: Duration,
    accuracies: Vec<f64>,
    task: Option<JoinHandle<()>>,
}

impl SimulatedProvider {
    pub fn new(tx: Sender<Event>, origin: GeoLocation, interval: Duration, accuracies: Vec<f64>) -> Self {
        SimulatedProvider {
            tx,
            origin,
            interval,
            accuracies,
            task: None,
        }
    }
}

impl LocationProvider for SimulatedProvider {
    fn start(&mut self, desired_accuracy: f64) {
        if self.task.is_some() {
            debug!("🛰️ Simulated provider already running");
            return;
        }

        info!(desired_accuracy, "🛰️ Starting simulated location updates every {:?}", self.interval);
        let tx = self.tx.clone();
        let origin = self.origin;
        let accuracies = self.accuracies.clone();
        let mut ticker = interval(self.interval);

        self.task = Some(tokio::spawn(async move {
            for step in 0usize.. {
                ticker.tick().await;

                let accuracy = accuracies.get(step).or(accuracies.last()).copied().unwrap_or(desired_accuracy);
                let sample = simulated_sample(origin, step, accuracy);
                if tx.send(Event::LocationUpdated(sample)).await.is_err() {
                    warn!("⚠️ Could not deliver simulated sample, inbox closed");
                    break;
                }
            }
        }));
    }

    fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            info!("🛰️ Stopping simulated location updates");
            task.abort();
        }
    }
}

impl Drop for SimulatedProvider {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

fn simulated_sample(origin: GeoLocation, step: usize, accuracy: f64) -> LocationSample {
    let angle = step as f64;
    let north_m = angle.sin() * accuracy / 2.0;
    let east_m = angle.cos() * accuracy / 2.0;

    let latitude = origin.latitude + north_m / METERS_PER_DEGREE;
    let longitude = origin.longitude + east_m / (METERS_PER_DEGREE * origin.latitude.to_radians().cos());

    LocationSample::new(latitude, longitude, accuracy, Utc::now())
}
