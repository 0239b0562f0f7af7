use serde::Deserialize;
use std::fmt::Debug;

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PermissionStatus {
    Undetermined,
    Denied,
    Restricted,
    Granted,
}

/// Access to the platform's location permission.
pub trait PermissionGate: Debug + Send + Sync {
    fn current_status(&self) -> PermissionStatus;

    /// Fire-and-forget. The answer is observed through `current_status` or a `PermissionChanged` event.
    fn request_permission(&self);
}
