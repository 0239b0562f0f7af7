use crate::app_config::AppConfig;
use reqwest::header::HeaderValue;
use reqwest::{Client, header};
use thiserror::Error;

pub fn new_client(config: &AppConfig) -> Result<Client, GeocoderClientError> {
    let mut headers = header::HeaderMap::new();
    headers.insert(header::USER_AGENT, HeaderValue::from_str(config.geocoder().user_agent())?);

    let client = Client::builder().default_headers(headers).timeout(config.geocoder().timeout()).build()?;
    Ok(client)
}

#[derive(Error, Debug)]
pub enum GeocoderClientError {
    #[error("request error: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("geocoder client set an invalid header value: {0}")]
    InvalidHeaderValue(#[from] header::InvalidHeaderValue),
}
