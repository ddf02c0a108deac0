//! Error types surfaced by the widget factory.
//!
//! Validation failures come from `dashboard-core` and mean "do not render a
//! widget card". Provider failures are passed through unchanged.
use thiserror::Error;

use dashboard_core::{LayerId, ValidationError};

pub type Result<T> = std::result::Result<T, FactoryError>;

/// Failures raised by a [`DataviewProvider`](crate::DataviewProvider).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    #[error("layer {0} is not known to the dataview provider")]
    UnknownLayer(LayerId),

    #[error("dataview provider unavailable: {0}")]
    Unavailable(String),

    #[error("dataview provider lock was poisoned")]
    LockPoisoned,
}

#[derive(Debug, Error)]
pub enum FactoryError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Provider(#[from] ProviderError),
}

impl FactoryError {
    /// True when the request was rejected for missing or invalid attributes.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Provider(_) => None,
        }
    }
}
