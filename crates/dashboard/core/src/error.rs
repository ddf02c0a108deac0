//! Validation errors raised while turning attribute bags into widget options.
//!
//! A validation error is an expected outcome: the caller asked for a widget
//! without the fields its kind needs. Nothing is created when one is returned.

use thiserror::Error;

use crate::widget::WidgetKind;

/// Reasons a widget request is rejected before any dataview is requested.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{kind} widget requires a non-empty `{field}`")]
    MissingField {
        kind: WidgetKind,
        field: &'static str,
    },

    #[error("{kind} widget has an invalid `{field}`: {reason}")]
    InvalidValue {
        kind: WidgetKind,
        field: &'static str,
        reason: String,
    },
}

impl ValidationError {
    /// Widget kind the rejected request was for.
    pub const fn kind(&self) -> WidgetKind {
        match self {
            Self::MissingField { kind, .. } | Self::InvalidValue { kind, .. } => *kind,
        }
    }

    /// Name of the offending attribute.
    pub const fn field(&self) -> &'static str {
        match self {
            Self::MissingField { field, .. } | Self::InvalidValue { field, .. } => *field,
        }
    }

    pub const fn is_missing(&self) -> bool {
        matches!(self, Self::MissingField { .. })
    }
}

pub type ValidationResult<T> = std::result::Result<T, ValidationError>;
