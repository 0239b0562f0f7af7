use crate::acquisition::Settings;
use crate::acquisition::sample_policy::{has_converged, has_plateaued, is_better, is_stale};
use crate::domain::events::Event;
use crate::domain::{
    AcquisitionError, AcquisitionSnapshot, AcquisitionState, AddressResolver, AddressResult, Clock, LocationProvider, LocationSample, PermissionGate,
    PermissionStatus, Placemark, ProviderError, ResolverError, Timer, TimerHandle,
};
use std::sync::Arc;
use tokio::sync::mpsc::{Receiver, Sender, WeakSender};
use tokio::sync::watch;
use tokio::sync::watch::{Receiver as WatchReceiver, Sender as WatchSender};
use tokio::task::AbortHandle;
use tracing::{debug, info, instrument, trace, warn};

/// The external collaborators an acquisition controller drives.
#[derive(Debug)]
pub struct Capabilities {
    pub provider: Box<dyn LocationProvider>,
    pub resolver: Arc<dyn AddressResolver>,
    pub timer: Arc<dyn Timer>,
    pub clock: Arc<dyn Clock>,
    pub permission: Arc<dyn PermissionGate>,
}

/// Owns one location acquisition at a time.
///
/// All state is mutated from `listen`, which drains the inbox that providers, timers and resolver
/// tasks push into. Every state-affecting event publishes a fresh [`AcquisitionSnapshot`].
///
/// Each `start` and `stop` bumps the session epoch. Timer firings and address resolutions carry the
/// epoch they were issued under and are dropped when it no longer matches, so a stopped session
/// never changes state again.
#[derive(Debug)]
pub struct AcquisitionController {
    settings: Settings,
    rx: Receiver<Event>,
    tx: WeakSender<Event>,
    capabilities: Capabilities,
    state: AcquisitionState,
    best_location: Option<LocationSample>,
    address: Option<AddressResult>,
    last_error: Option<AcquisitionError>,
    resolution: Option<AbortHandle>,
    session_timer: Option<TimerHandle>,
    updating: bool,
    epoch: u64,
    notifier_tx: WatchSender<AcquisitionSnapshot>,
    notifier_rx: WatchReceiver<AcquisitionSnapshot>,
}

impl AcquisitionController {
    /// Only a weak handle to `tx` is kept, so the inbox closes once every provider, timer and caller is gone.
    pub fn new(settings: Settings, tx: &Sender<Event>, rx: Receiver<Event>, capabilities: Capabilities) -> Self {
        let (notifier_tx, notifier_rx) = watch::channel(AcquisitionSnapshot::default());

        AcquisitionController {
            settings,
            rx,
            tx: tx.downgrade(),
            capabilities,
            state: AcquisitionState::Idle,
            best_location: None,
            address: None,
            last_error: None,
            resolution: None,
            session_timer: None,
            updating: false,
            epoch: 0,
            notifier_tx,
            notifier_rx,
        }
    }

    pub fn notifier(&self) -> WatchReceiver<AcquisitionSnapshot> {
        self.notifier_rx.clone()
    }

    pub fn snapshot(&self) -> AcquisitionSnapshot {
        AcquisitionSnapshot {
            state: self.state.clone(),
            best_location: self.best_location.clone(),
            address: self.address.clone(),
            last_error: self.last_error.clone(),
            resolving: self.resolution.is_some(),
        }
    }

    #[instrument(skip_all)]
    pub async fn listen(&mut self) {
        while self.process_next().await {}
        debug!("📭 Inbox closed, acquisition controller stopped");
    }

    /// Handles the next inbox event. Returns `false` once every sender is gone.
    pub async fn process_next(&mut self) -> bool {
        match self.rx.recv().await {
            Some(event) => {
                self.handle(event);
                true
            }
            None => false,
        }
    }

    pub fn handle(&mut self, event: Event) {
        trace!("📨 Received event: {:?}", event);
        match event {
            Event::StartRequested => self.start(),
            Event::StopRequested => self.stop(),
            Event::LocationUpdated(sample) => self.on_sample(sample),
            Event::ProviderFailed(error) => self.on_provider_error(error),
            Event::SessionTimedOut { epoch } => self.on_timeout(epoch),
            Event::AddressResolved { epoch, result } => self.on_address_resolved(epoch, result),
            Event::PermissionChanged(status) => self.on_permission_changed(status),
        }
    }

    pub fn start(&mut self) {
        if self.state.is_searching() {
            debug!("📡 Already searching, ignoring start");
            return;
        }

        self.end_session();
        self.best_location = None;
        self.address = None;
        self.last_error = None;

        match self.capabilities.permission.current_status() {
            PermissionStatus::Undetermined => {
                info!("🔐 Location permission undetermined, requesting permission...");
                self.capabilities.permission.request_permission();
                self.state = AcquisitionState::Authorizing;
                self.notify();
            }
            PermissionStatus::Denied | PermissionStatus::Restricted => {
                warn!("🔐 Location permission denied, not starting");
                self.fail(AcquisitionError::PermissionDenied);
            }
            PermissionStatus::Granted => self.begin_session(),
        }
    }

    pub fn stop(&mut self) {
        if self.state == AcquisitionState::Idle {
            debug!("📡 Already idle, ignoring stop");
            return;
        }

        self.end_session();
        self.state = AcquisitionState::Idle;
        info!("📡 Stopped searching");
        self.notify();
    }

    pub fn on_sample(&mut self, sample: LocationSample) {
        if !self.state.is_searching() {
            trace!(state = %self.state, "📍 Ignoring sample, not searching");
            return;
        }

        let now = self.capabilities.clock.now();
        if is_stale(&sample, now, self.settings.max_sample_age) {
            debug!(timestamp = %sample.timestamp, "📍 Ignoring stale sample");
            return;
        }

        if !sample.is_valid() {
            debug!(accuracy = sample.horizontal_accuracy, "📍 Ignoring invalid sample");
            return;
        }

        let plateaued = self
            .best_location
            .as_ref()
            .is_some_and(|best| has_plateaued(&sample, best, self.settings.plateau_distance, self.settings.plateau_interval));
        let accepted = is_better(&sample, self.best_location.as_ref());

        if accepted {
            info!(
                latitude = sample.latitude,
                longitude = sample.longitude,
                "📍 Accepted sample with accuracy {:.1} m",
                sample.horizontal_accuracy
            );
            self.last_error = None;
            self.best_location = Some(sample.clone());

            if has_converged(&sample, self.settings.desired_accuracy) {
                info!("🎯 Desired accuracy of {:.1} m reached", self.settings.desired_accuracy);
                self.converge();
            }

            if self.resolution.is_none() {
                self.resolve(&sample);
            } else {
                debug!("🏠 Address resolution already in flight, skipping");
            }
        }

        if plateaued && self.state.is_searching() {
            info!("🎯 Location stopped improving, accepting the best fix");
            self.converge();
        }

        if accepted || plateaued {
            self.notify();
        }
    }

    pub fn on_provider_error(&mut self, error: ProviderError) {
        if error.is_transient() {
            debug!("📡 Location unknown for now, provider keeps trying");
            return;
        }

        if !self.state.is_searching() {
            debug!(state = %self.state, "📡 Ignoring provider error, not searching: {:?}", error);
            return;
        }

        warn!("⚠️ Location provider failed: {:?}", error);
        self.end_session();
        self.fail(error.into());
    }

    pub fn on_timeout(&mut self, epoch: u64) {
        if epoch != self.epoch {
            debug!(epoch, current_epoch = self.epoch, "⏳ Discarding timeout of a previous session");
            return;
        }

        if let Some(handle) = self.session_timer.take() {
            self.capabilities.timer.cancel(handle);
        }

        if self.best_location.is_some() || !self.state.is_searching() {
            debug!("⏳ Session deadline passed with a location, letting the session wind down");
            return;
        }

        warn!("⏳ No location found within {:?}", self.settings.session_timeout);
        self.end_session();
        let error = AcquisitionError::Timeout(self.settings.session_timeout);
        self.last_error = Some(error);
        self.state = AcquisitionState::TimedOut;
        self.notify();
    }

    pub fn on_address_resolved(&mut self, epoch: u64, result: Result<Placemark, ResolverError>) {
        if epoch != self.epoch {
            debug!(epoch, current_epoch = self.epoch, "🏠 Discarding address of a previous session");
            return;
        }

        self.resolution = None;
        self.address = Some(match result {
            Ok(placemark) => {
                info!("🏠 Resolving address... OK");
                AddressResult::Resolved(placemark)
            }
            Err(e) => {
                warn!("🏠 Resolving address... failed, {}", e);
                AddressResult::Unavailable(e.to_string())
            }
        });
        self.notify();
    }

    pub fn on_permission_changed(&mut self, status: PermissionStatus) {
        if self.state != AcquisitionState::Authorizing {
            debug!(state = %self.state, "🔐 Permission changed to {:?}, nothing pending", status);
            return;
        }

        match status {
            PermissionStatus::Granted => {
                info!("🔐 Location permission granted");
                self.begin_session();
            }
            PermissionStatus::Denied | PermissionStatus::Restricted => {
                warn!("🔐 Location permission denied");
                self.fail(AcquisitionError::PermissionDenied);
            }
            PermissionStatus::Undetermined => {}
        }
    }

    fn begin_session(&mut self) {
        self.state = AcquisitionState::Searching;

        info!(epoch = self.epoch, "📡 Searching for a location...");
        self.capabilities.provider.start(self.settings.desired_accuracy);
        self.updating = true;
        self.session_timer = Some(self.capabilities.timer.schedule(self.settings.session_timeout, self.epoch));
        self.notify();
    }

    /// Stops the provider and the deadline, abandons any resolution and moves to a new epoch.
    fn end_session(&mut self) {
        self.halt_updates();
        if let Some(resolution) = self.resolution.take() {
            debug!("🏠 Abandoning address resolution");
            resolution.abort();
        }
        self.epoch += 1;
    }

    fn halt_updates(&mut self) {
        if let Some(handle) = self.session_timer.take() {
            self.capabilities.timer.cancel(handle);
        }

        if self.updating {
            self.capabilities.provider.stop();
            self.updating = false;
        }
    }

    fn converge(&mut self) {
        self.halt_updates();
        self.state = AcquisitionState::Converged;
    }

    fn fail(&mut self, error: AcquisitionError) {
        self.last_error = Some(error.clone());
        self.state = AcquisitionState::Failed(error);
        self.notify();
    }

    fn resolve(&mut self, sample: &LocationSample) {
        debug!(latitude = sample.latitude, longitude = sample.longitude, "🏠 Resolving address...");

        let Some(tx) = self.tx.upgrade() else {
            warn!("⚠️ Not resolving address, inbox closed");
            return;
        };
        let resolver = self.capabilities.resolver.clone();
        let epoch = self.epoch;
        let (latitude, longitude) = (sample.latitude, sample.longitude);

        let task = tokio::spawn(async move {
            let result = resolver.resolve(latitude, longitude).await;
            if tx.send(Event::AddressResolved { epoch, result }).await.is_err() {
                warn!("⚠️ Could not deliver resolved address, inbox closed");
            }
        });
        self.resolution = Some(task.abort_handle());
    }

    fn notify(&self) {
        self.notifier_tx.send(self.snapshot()).unwrap_or_default();
    }
}
