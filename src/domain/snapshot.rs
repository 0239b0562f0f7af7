use crate::domain::{AcquisitionError, AcquisitionState, AddressResult, LocationSample};

/// Everything the UI needs to render the current acquisition, published after each state-affecting event.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AcquisitionSnapshot {
    pub state: AcquisitionState,
    pub best_location: Option<LocationSample>,
    pub address: Option<AddressResult>,
    pub last_error: Option<AcquisitionError>,
    pub resolving: bool,
}
