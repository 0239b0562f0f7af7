use crate::domain::{LocationSample, PermissionStatus, Placemark, ProviderError, ResolverError};

#[derive(Debug)]
pub enum Event {
    StartRequested,
    StopRequested,
    LocationUpdated(LocationSample),
    ProviderFailed(ProviderError),
    SessionTimedOut { epoch: u64 },
    AddressResolved { epoch: u64, result: Result<Placemark, ResolverError> },
    PermissionChanged(PermissionStatus),
}
