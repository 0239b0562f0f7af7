mod client;
mod nominatim;
mod reverse_response;

pub use client::{GeocoderClientError, new_client};
pub use nominatim::NominatimResolver;
