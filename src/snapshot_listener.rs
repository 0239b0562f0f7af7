use crate::domain::AcquisitionSnapshot;
use crate::presenter::render;
use tokio::sync::watch::Receiver;
use tracing::{info, instrument};

#[instrument(skip_all)]
pub async fn snapshot_listener(mut rx: Receiver<AcquisitionSnapshot>) {
    while rx.changed().await.is_ok() {
        let snapshot = rx.borrow_and_update().clone();
        let lines = render(&snapshot);
        let summary = if lines.message.is_empty() { lines.address.replace('\n', ", ") } else { lines.message };

        info!(
            state = %snapshot.state,
            latitude = %lines.latitude,
            longitude = %lines.longitude,
            action = %lines.action,
            "📺 {}",
            summary
        );
    }
}
