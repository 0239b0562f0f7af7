use crate::domain::events::Event;
use crate::domain::{Timer, TimerHandle};
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::mpsc::Sender;
use tokio::task::AbortHandle;
use tokio::time::sleep;
use tracing::{debug, warn};

/// Schedules session deadlines as sleeping tokio tasks that report back through the controller inbox.
#[derive(Debug)]
pub struct TokioTimer {
    tx: Sender<Event>,
    next_id: AtomicU64,
    pending: Mutex<HashMap<TimerHandle, AbortHandle>>,
}

impl TokioTimer {
    pub fn new(tx: Sender<Event>) -> Self {
        TokioTimer {
            tx,
            next_id: AtomicU64::new(0),
            pending: Mutex::new(HashMap::new()),
        }
    }
}

impl Timer for TokioTimer {
    fn schedule(&self, after: Duration, epoch: u64) -> TimerHandle {
        let handle = TimerHandle(self.next_id.fetch_add(1, Ordering::Relaxed));
        let tx = self.tx.clone();

        debug!(epoch, "🕗 Scheduling session deadline in {:?}", after);
        let task = tokio::spawn(async move {
            sleep(after).await;
            debug!(epoch, "🕗 Session deadline passed");
            if tx.send(Event::SessionTimedOut { epoch }).await.is_err() {
                warn!("⚠️ Could not deliver session deadline, inbox closed");
            }
        });

        self.pending.lock().unwrap().insert(handle, task.abort_handle());
        handle
    }

    fn cancel(&self, handle: TimerHandle) {
        if let Some(task) = self.pending.lock().unwrap().remove(&handle) {
            task.abort();
        }
    }
}
