use crate::domain::Placemark;
use async_trait::async_trait;
use std::fmt::Debug;
use thiserror::Error;

#[async_trait]
pub trait AddressResolver: Debug + Send + Sync {
    async fn resolve(&self, latitude: f64, longitude: f64) -> Result<Placemark, ResolverError>;
}

#[derive(Error, Debug)]
pub enum ResolverError {
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("no address found for {latitude}, {longitude}")]
    NoResult { latitude: f64, longitude: f64 },
}
