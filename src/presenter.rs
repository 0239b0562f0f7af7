use crate::domain::{AcquisitionError, AcquisitionSnapshot, AcquisitionState, AddressResult};

/// The texts shown on the current location screen.
#[derive(Debug, PartialEq)]
pub struct StatusLines {
    pub message: String,
    pub latitude: String,
    pub longitude: String,
    pub address: String,
    pub action: String,
}

pub fn render(snapshot: &AcquisitionSnapshot) -> StatusLines {
    let action = if snapshot.state.is_searching() { "Stop" } else { "Get My Location" }.to_string();

    let Some(location) = &snapshot.best_location else {
        return StatusLines {
            message: status_message(snapshot).to_string(),
            latitude: String::new(),
            longitude: String::new(),
            address: String::new(),
            action,
        };
    };

    let address = match &snapshot.address {
        Some(AddressResult::Resolved(placemark)) => {
            let (line1, line2) = placemark.address_lines();
            format!("{}\n{}", line1, line2)
        }
        _ if snapshot.resolving => "Searching for Address...".to_string(),
        Some(AddressResult::Unavailable(_)) => "Error Finding Address".to_string(),
        None => "No Address Found".to_string(),
    };

    StatusLines {
        message: String::new(),
        latitude: format!("{:.8}", location.latitude),
        longitude: format!("{:.8}", location.longitude),
        address,
        action,
    }
}

fn status_message(snapshot: &AcquisitionSnapshot) -> &'static str {
    match (&snapshot.last_error, &snapshot.state) {
        (Some(AcquisitionError::PermissionDenied), _) => "Location Services Disabled",
        (Some(_), _) => "Error Getting Location",
        (None, AcquisitionState::Searching | AcquisitionState::Authorizing) => "Searching...",
        (None, _) => "Tap 'Get My Location' to Start",
    }
}
