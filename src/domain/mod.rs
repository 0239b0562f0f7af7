mod acquisition_state;
mod address;
mod address_resolver;
mod clock;
pub mod events;
mod geo_location;
mod location_provider;
mod location_sample;
mod permission;
mod snapshot;
mod timer;

pub use acquisition_state::{AcquisitionError, AcquisitionState, ProviderError};
pub use address::{AddressResult, Placemark};
pub use address_resolver::{AddressResolver, ResolverError};
pub use clock::{Clock, SystemClock};
pub use geo_location::GeoLocation;
pub use location_provider::LocationProvider;
pub use location_sample::LocationSample;
pub use permission::{PermissionGate, PermissionStatus};
pub use snapshot::AcquisitionSnapshot;
pub use timer::{Timer, TimerHandle};
