use crate::domain::Placemark;
use serde::Deserialize;

/// Body of a Nominatim `/reverse?format=jsonv2` response.
#[derive(Debug, Deserialize)]
pub struct ReverseResponse {
    pub address: Option<ReverseAddress>,
    pub error: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ReverseAddress {
    pub house_number: Option<String>,
    pub road: Option<String>,
    pub city: Option<String>,
    pub town: Option<String>,
    pub village: Option<String>,
    pub hamlet: Option<String>,
    pub state: Option<String>,
    pub postcode: Option<String>,
}

impl From<ReverseAddress> for Placemark {
    fn from(address: ReverseAddress) -> Self {
        Placemark {
            street_number: address.house_number,
            street_name: address.road,
            locality: address.city.or(address.town).or(address.village).or(address.hamlet),
            administrative_area: address.state,
            postal_code: address.postcode,
        }
    }
}
