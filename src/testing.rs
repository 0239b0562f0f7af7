//! Deterministic stand-ins for the capabilities an acquisition controller drives.

use crate::domain::{AddressResolver, Clock, LocationProvider, PermissionGate, PermissionStatus, Placemark, ResolverError, Timer, TimerHandle};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::Notify;

#[derive(Debug)]
pub struct FakeClock {
    now: Mutex<DateTime<Utc>>,
}

impl FakeClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        FakeClock { now: Mutex::new(now) }
    }

    pub fn set(&self, now: DateTime<Utc>) {
        *self.now.lock().unwrap() = now;
    }

    pub fn advance(&self, by: chrono::Duration) {
        *self.now.lock().unwrap() += by;
    }
}

impl Clock for FakeClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ProviderCall {
    Start(f64),
    Stop,
}

#[derive(Debug, Default)]
pub struct RecordingProvider {
    calls: Arc<Mutex<Vec<ProviderCall>>>,
}

impl RecordingProvider {
    pub fn calls(&self) -> Arc<Mutex<Vec<ProviderCall>>> {
        self.calls.clone()
    }
}

impl LocationProvider for RecordingProvider {
    fn start(&mut self, desired_accuracy: f64) {
        self.calls.lock().unwrap().push(ProviderCall::Start(desired_accuracy));
    }

    fn stop(&mut self) {
        self.calls.lock().unwrap().push(ProviderCall::Stop);
    }
}

/// Records deadlines instead of firing them; tests fire them by calling `on_timeout`.
#[derive(Debug, Default)]
pub struct FakeTimer {
    next_id: AtomicU64,
    scheduled: Mutex<Vec<(Duration, u64)>>,
    cancelled: Mutex<Vec<TimerHandle>>,
}

impl FakeTimer {
    pub fn scheduled(&self) -> Vec<(Duration, u64)> {
        self.scheduled.lock().unwrap().clone()
    }

    pub fn cancelled(&self) -> Vec<TimerHandle> {
        self.cancelled.lock().unwrap().clone()
    }
}

impl Timer for FakeTimer {
    fn schedule(&self, after: Duration, epoch: u64) -> TimerHandle {
        self.scheduled.lock().unwrap().push((after, epoch));
        TimerHandle(self.next_id.fetch_add(1, Ordering::SeqCst))
    }

    fn cancel(&self, handle: TimerHandle) {
        self.cancelled.lock().unwrap().push(handle);
    }
}

#[derive(Debug)]
enum Reply {
    /// Waits for `release` and answers with `placemark_for` the requested coordinate.
    Held,
    Immediate(Placemark),
    Failing,
}

#[derive(Debug)]
pub struct FakeResolver {
    reply: Reply,
    calls: Mutex<Vec<(f64, f64)>>,
    release: Notify,
}

impl FakeResolver {
    fn with_reply(reply: Reply) -> Self {
        FakeResolver {
            reply,
            calls: Mutex::new(Vec::new()),
            release: Notify::new(),
        }
    }

    pub fn held() -> Self {
        Self::with_reply(Reply::Held)
    }

    pub fn immediate(placemark: Placemark) -> Self {
        Self::with_reply(Reply::Immediate(placemark))
    }

    pub fn failing() -> Self {
        Self::with_reply(Reply::Failing)
    }

    pub fn placemark_for(latitude: f64, longitude: f64) -> Placemark {
        Placemark {
            street_name: Some(format!("{:.4} {:.4}", latitude, longitude)),
            ..Placemark::default()
        }
    }

    pub fn calls(&self) -> Vec<(f64, f64)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn release(&self) {
        self.release.notify_one();
    }
}

#[async_trait]
impl AddressResolver for FakeResolver {
    async fn resolve(&self, latitude: f64, longitude: f64) -> Result<Placemark, ResolverError> {
        self.calls.lock().unwrap().push((latitude, longitude));

        match &self.reply {
            Reply::Held => {
                self.release.notified().await;
                Ok(Self::placemark_for(latitude, longitude))
            }
            Reply::Immediate(placemark) => Ok(placemark.clone()),
            Reply::Failing => Err(ResolverError::NoResult { latitude, longitude }),
        }
    }
}

#[derive(Debug)]
pub struct FakePermission {
    status: Mutex<PermissionStatus>,
    requests: AtomicUsize,
}

impl FakePermission {
    pub fn new(status: PermissionStatus) -> Self {
        FakePermission {
            status: Mutex::new(status),
            requests: AtomicUsize::new(0),
        }
    }

    pub fn set(&self, status: PermissionStatus) {
        *self.status.lock().unwrap() = status;
    }

    pub fn requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

impl PermissionGate for FakePermission {
    fn current_status(&self) -> PermissionStatus {
        *self.status.lock().unwrap()
    }

    fn request_permission(&self) {
        self.requests.fetch_add(1, Ordering::SeqCst);
    }
}
