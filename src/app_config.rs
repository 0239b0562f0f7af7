use crate::acquisition::Settings;
use crate::domain::{GeoLocation, PermissionStatus};
use config::{Config, ConfigError};
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    core: Core,
    acquisition: Acquisition,
    geocoder: Geocoder,
    simulation: Simulation,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(config::File::with_name("config").required(true))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::with_prefix("PINPOINT").separator("__"))
            .build()?
            .try_deserialize()
    }

    pub fn core(&self) -> &Core {
        &self.core
    }

    pub fn acquisition(&self) -> &Acquisition {
        &self.acquisition
    }

    pub fn geocoder(&self) -> &Geocoder {
        &self.geocoder
    }

    pub fn simulation(&self) -> &Simulation {
        &self.simulation
    }
}

#[derive(Debug, Deserialize)]
pub struct Core {
    event_buffer_size: usize,
}

impl Core {
    pub fn event_buffer_size(&self) -> usize {
        self.event_buffer_size
    }
}

#[derive(Debug, Deserialize)]
pub struct Acquisition {
    desired_accuracy_m: f64,
    #[serde(with = "humantime_serde")]
    session_timeout: Duration,
    #[serde(with = "humantime_serde")]
    max_sample_age: Duration,
    plateau_distance_m: f64,
    #[serde(with = "humantime_serde")]
    plateau_interval: Duration,
}

impl Acquisition {
    pub fn settings(&self) -> Settings {
        Settings {
            desired_accuracy: self.desired_accuracy_m,
            session_timeout: self.session_timeout,
            max_sample_age: self.max_sample_age,
            plateau_distance: self.plateau_distance_m,
            plateau_interval: self.plateau_interval,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Geocoder {
    url: String,
    user_agent: String,
    #[serde(with = "humantime_serde")]
    timeout: Duration,
}

impl Geocoder {
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[derive(Debug, Deserialize)]
pub struct Simulation {
    origin: GeoLocation,
    #[serde(with = "humantime_serde")]
    sample_interval: Duration,
    accuracies_m: Vec<f64>,
    permission: PermissionStatus,
    permission_answer: PermissionStatus,
}

impl Simulation {
    pub fn origin(&self) -> GeoLocation {
        self.origin
    }

    pub fn sample_interval(&self) -> Duration {
        self.sample_interval
    }

    pub fn accuracies(&self) -> &[f64] {
        &self.accuracies_m
    }

    pub fn permission(&self) -> PermissionStatus {
        self.permission
    }

    pub fn permission_answer(&self) -> PermissionStatus {
        self.permission_answer
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                core: Core { event_buffer_size: 8 },
                acquisition: Acquisition {
                    desired_accuracy_m: 10.0,
                    session_timeout: Duration::from_secs(60),
                    max_sample_age: Duration::from_secs(5),
                    plateau_distance_m: 1.0,
                    plateau_interval: Duration::from_secs(10),
                },
                geocoder: Geocoder {
                    url: "https://geocoder.url".to_string(),
                    user_agent: "pinpoint-test".to_string(),
                    timeout: Duration::from_secs(5),
                },
                simulation: Simulation {
                    origin: GeoLocation {
                        latitude: 51.9225,
                        longitude: 4.47917,
                    },
                    sample_interval: Duration::from_secs(1),
                    accuracies_m: vec![65.0, 30.0, 8.0],
                    permission: PermissionStatus::Granted,
                    permission_answer: PermissionStatus::Granted,
                },
            },
        }
    }

    pub fn geocoder_url(mut self, url: String) -> Self {
        self.config.geocoder.url = url;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}
