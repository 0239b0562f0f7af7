use crate::domain::{AddressResolver, Placemark, ResolverError};
use crate::geocoder::reverse_response::ReverseResponse;
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument, warn};

/// Resolves addresses with a Nominatim compatible reverse geocoding service.
#[derive(Debug)]
pub struct NominatimResolver {
    client: Client,
    url: String,
}

impl NominatimResolver {
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        NominatimResolver { client, url: url.into() }
    }
}

#[async_trait]
impl AddressResolver for NominatimResolver {
    #[instrument(skip(self))]
    async fn resolve(&self, latitude: f64, longitude: f64) -> Result<Placemark, ResolverError> {
        debug!("🌍 Reverse geocoding...");

        let response = self
            .client
            .get(format!("{}/reverse", self.url))
            .query(&[("format", "jsonv2".to_string()), ("lat", latitude.to_string()), ("lon", longitude.to_string())])
            .send()
            .await?
            .error_for_status()?;

        let body = response.json::<ReverseResponse>().await?;
        match (body.address, body.error) {
            (Some(address), _) => {
                debug!("🌍 Reverse geocoding... OK");
                Ok(address.into())
            }
            (None, error) => {
                warn!("🌍 Reverse geocoding... failed, {}", error.as_deref().unwrap_or("no address in response"));
                Err(ResolverError::NoResult { latitude, longitude })
            }
        }
    }
}
