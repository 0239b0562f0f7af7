use crate::acquisition::{AcquisitionController, Capabilities, Settings};
use crate::domain::events::Event;
use crate::domain::{AcquisitionSnapshot, AcquisitionState, AddressResult, GeoLocation, LocationProvider, PermissionStatus, Placemark, SystemClock};
use crate::provider::{SimulatedPermission, SimulatedProvider};
use crate::scheduler::TokioTimer;
use crate::testing::{FakeResolver, RecordingProvider};
use pretty_assertions::assert_eq;
use std::sync::Arc;
use std::time::Duration;
use test_log::test;
use tokio::sync::mpsc;
use tokio::sync::mpsc::Sender;
use tokio::sync::watch::Receiver;
use tokio::time::timeout;

const ORIGIN: GeoLocation = GeoLocation {
    latitude: 51.9225,
    longitude: 4.47917,
};

fn spawn_controller(
    permission: PermissionStatus,
    provider: impl FnOnce(Sender<Event>) -> Box<dyn LocationProvider>,
) -> (Sender<Event>, Receiver<AcquisitionSnapshot>) {
    let (tx, rx) = mpsc::channel::<Event>(32);
    let capabilities = Capabilities {
        provider: provider(tx.clone()),
        resolver: Arc::new(FakeResolver::immediate(Placemark {
            street_name: Some("Coolsingel".to_string()),
            ..Placemark::default()
        })),
        timer: Arc::new(TokioTimer::new(tx.clone())),
        clock: Arc::new(SystemClock),
        permission: Arc::new(SimulatedPermission::new(permission, PermissionStatus::Granted, tx.clone())),
    };

    let mut controller = AcquisitionController::new(Settings::default(), &tx, rx, capabilities);
    let notifier = controller.notifier();
    tokio::spawn(async move {
        controller.listen().await;
    });

    (tx, notifier)
}

async fn wait_for(notifier: &mut Receiver<AcquisitionSnapshot>, predicate: impl FnMut(&AcquisitionSnapshot) -> bool) -> AcquisitionSnapshot {
    timeout(Duration::from_secs(120), notifier.wait_for(predicate))
        .await
        .expect("timed out waiting for snapshot")
        .expect("controller stopped")
        .clone()
}

#[test(tokio::test(start_paused = true))]
async fn times_out_when_no_sample_arrives() {
    let (tx, mut notifier) = spawn_controller(PermissionStatus::Granted, |_| Box::new(RecordingProvider::default()));

    tx.send(Event::StartRequested).await.unwrap();

    let snapshot = wait_for(&mut notifier, |snapshot| snapshot.state.is_terminal()).await;
    assert_eq!(snapshot.state, AcquisitionState::TimedOut);
    assert_eq!(snapshot.best_location, None);
}

#[test(tokio::test(start_paused = true))]
async fn converges_on_simulated_samples_and_resolves_the_address() {
    let (tx, mut notifier) = spawn_controller(PermissionStatus::Granted, |tx| {
        Box::new(SimulatedProvider::new(tx, ORIGIN, Duration::from_secs(1), vec![65.0, 30.0, 8.0]))
    });

    tx.send(Event::StartRequested).await.unwrap();

    let snapshot = wait_for(&mut notifier, |snapshot| snapshot.state.is_terminal() && !snapshot.resolving).await;
    assert_eq!(snapshot.state, AcquisitionState::Converged);
    assert_eq!(snapshot.best_location.map(|best| best.horizontal_accuracy), Some(8.0));
    assert!(matches!(snapshot.address, Some(AddressResult::Resolved(_))));
}

#[test(tokio::test(start_paused = true))]
async fn resumes_once_permission_is_granted() {
    let (tx, mut notifier) = spawn_controller(PermissionStatus::Undetermined, |tx| {
        Box::new(SimulatedProvider::new(tx, ORIGIN, Duration::from_secs(1), vec![8.0]))
    });

    tx.send(Event::StartRequested).await.unwrap();

    let snapshot = wait_for(&mut notifier, |snapshot| snapshot.state.is_terminal()).await;
    assert_eq!(snapshot.state, AcquisitionState::Converged);
}

#[test(tokio::test(start_paused = true))]
async fn stop_request_returns_to_idle() {
    let (tx, mut notifier) = spawn_controller(PermissionStatus::Granted, |_| Box::new(RecordingProvider::default()));

    tx.send(Event::StartRequested).await.unwrap();
    wait_for(&mut notifier, |snapshot| snapshot.state.is_searching()).await;
    tx.send(Event::StopRequested).await.unwrap();

    let snapshot = wait_for(&mut notifier, |snapshot| snapshot.state == AcquisitionState::Idle).await;
    assert_eq!(snapshot.last_error, None);
}
