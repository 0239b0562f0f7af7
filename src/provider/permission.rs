use crate::domain::events::Event;
use crate::domain::{PermissionGate, PermissionStatus};
use std::sync::Mutex;
use tokio::sync::mpsc::Sender;
use tracing::{info, warn};

/// A permission gate that answers a request with a preconfigured status.
#[derive(Debug)]
pub struct SimulatedPermission {
    status: Mutex<PermissionStatus>,
    answer: PermissionStatus,
    tx: Sender<Event>,
}

impl SimulatedPermission {
    pub fn new(initial: PermissionStatus, answer: PermissionStatus, tx: Sender<Event>) -> Self {
        SimulatedPermission {
            status: Mutex::new(initial),
            answer,
            tx,
        }
    }
}

impl PermissionGate for SimulatedPermission {
    fn current_status(&self) -> PermissionStatus {
        *self.status.lock().unwrap()
    }

    fn request_permission(&self) {
        info!("🔐 Permission requested, answering {:?}", self.answer);
        *self.status.lock().unwrap() = self.answer;

        if let Err(e) = self.tx.try_send(Event::PermissionChanged(self.answer)) {
            warn!("⚠️ Could not deliver permission change: {}", e);
        }
    }
}
