use std::fmt::{Display, Formatter};
use std::time::Duration;
use thiserror::Error;

#[derive(Clone, Debug, Default, PartialEq)]
pub enum AcquisitionState {
    #[default]
    Idle,
    Authorizing,
    Searching,
    Converged,
    TimedOut,
    Failed(AcquisitionError),
}

impl AcquisitionState {
    pub fn is_searching(&self) -> bool {
        matches!(self, AcquisitionState::Searching)
    }

    /// Converged, timed out or failed. Only an explicit start or stop leaves these.
    pub fn is_terminal(&self) -> bool {
        matches!(self, AcquisitionState::Converged | AcquisitionState::TimedOut | AcquisitionState::Failed(_))
    }
}

impl Display for AcquisitionState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            AcquisitionState::Idle => write!(f, "idle"),
            AcquisitionState::Authorizing => write!(f, "authorizing"),
            AcquisitionState::Searching => write!(f, "searching"),
            AcquisitionState::Converged => write!(f, "converged"),
            AcquisitionState::TimedOut => write!(f, "timed out"),
            AcquisitionState::Failed(error) => write!(f, "failed ({})", error),
        }
    }
}

/// Terminal failures of an acquisition session.
#[derive(Error, Clone, Debug, PartialEq)]
pub enum AcquisitionError {
    #[error("location services are disabled for this application")]
    PermissionDenied,
    #[error("location provider failed: {0}")]
    Provider(String),
    #[error("no location found within {0:?}")]
    Timeout(Duration),
}

/// Errors pushed by a location provider.
#[derive(Clone, Debug, PartialEq)]
pub enum ProviderError {
    /// The provider could not fix a location yet but keeps trying.
    LocationUnknown,
    PermissionDenied,
    Other(String),
}

impl ProviderError {
    pub fn is_transient(&self) -> bool {
        matches!(self, ProviderError::LocationUnknown)
    }
}

impl From<ProviderError> for AcquisitionError {
    fn from(value: ProviderError) -> Self {
        match value {
            ProviderError::LocationUnknown => AcquisitionError::Provider("location unknown".to_string()),
            ProviderError::PermissionDenied => AcquisitionError::PermissionDenied,
            ProviderError::Other(reason) => AcquisitionError::Provider(reason),
        }
    }
}
