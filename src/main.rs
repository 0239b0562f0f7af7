use crate::acquisition::{AcquisitionController, Capabilities};
use crate::app_config::AppConfig;
use crate::domain::events::Event;
use crate::domain::{AcquisitionSnapshot, AcquisitionState, SystemClock};
use crate::geocoder::NominatimResolver;
use crate::presenter::render;
use crate::provider::{SimulatedPermission, SimulatedProvider};
use crate::scheduler::TokioTimer;
use crate::snapshot_listener::snapshot_listener;
use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tokio::{signal, task};
use tracing::{info, warn};

mod acquisition;
mod app_config;
mod domain;
mod geo_location_deserializer;
mod geocoder;
mod presenter;
mod provider;
mod scheduler;
mod snapshot_listener;
#[cfg(test)]
mod testing;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load()?;
    info!("✅  Loaded configuration");

    let geocoder_client = geocoder::new_client(&config)?;

    let (tx, rx) = mpsc::channel::<Event>(config.core().event_buffer_size());
    let simulation = config.simulation();
    let capabilities = Capabilities {
        provider: Box::new(SimulatedProvider::new(
            tx.clone(),
            simulation.origin(),
            simulation.sample_interval(),
            simulation.accuracies().to_vec(),
        )),
        resolver: Arc::new(NominatimResolver::new(geocoder_client, config.geocoder().url())),
        timer: Arc::new(TokioTimer::new(tx.clone())),
        clock: Arc::new(SystemClock),
        permission: Arc::new(SimulatedPermission::new(simulation.permission(), simulation.permission_answer(), tx.clone())),
    };

    let mut controller = AcquisitionController::new(config.acquisition().settings(), &tx, rx, capabilities);
    let mut notifier = controller.notifier();

    task::spawn(snapshot_listener(controller.notifier()));
    info!("✅  Initialized snapshot listener");

    task::spawn(async move {
        controller.listen().await;
    });
    info!("✅  Initialized acquisition controller");

    tx.send(Event::StartRequested).await?;
    info!("🔥 {} is up and running", env!("CARGO_PKG_NAME"));

    let interrupted = tokio::select! {
        result = settled(&mut notifier) => {
            result?;
            false
        }
        result = signal::ctrl_c() => {
            result?;
            true
        }
    };

    if interrupted {
        warn!("🛑 Interrupted, stopping acquisition");
        tx.send(Event::StopRequested).await?;
        notifier.wait_for(|snapshot| snapshot.state == AcquisitionState::Idle).await?;
    }

    let snapshot = notifier.borrow().clone();
    let lines = render(&snapshot);
    info!(state = %snapshot.state, latitude = %lines.latitude, longitude = %lines.longitude, "🏁 {}", lines.address.replace('\n', ", "));

    Ok(())
}

/// Waits until the session ended and no address resolution is outstanding.
async fn settled(notifier: &mut watch::Receiver<AcquisitionSnapshot>) -> Result<(), watch::error::RecvError> {
    notifier.wait_for(|snapshot| snapshot.state.is_terminal() && !snapshot.resolving).await?;
    Ok(())
}
