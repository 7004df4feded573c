//! Error types for measurement and placement

use thiserror::Error;

/// Errors that can occur while computing a placement
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PlaceError {
    /// The box provider could not produce geometry for a reference
    #[error("measurement unavailable for '{reference}': {reason}")]
    MeasurementUnavailable { reference: String, reason: String },
}

impl PlaceError {
    /// Create a measurement-unavailable error
    pub fn unavailable(reference: impl ToString, reason: impl Into<String>) -> Self {
        Self::MeasurementUnavailable {
            reference: reference.to_string(),
            reason: reason.into(),
        }
    }

    /// Name of the reference that failed to measure
    pub fn reference(&self) -> &str {
        match self {
            Self::MeasurementUnavailable { reference, .. } => reference,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_display() {
        let err = PlaceError::unavailable("tooltip", "not in snapshot");
        assert_eq!(
            err.to_string(),
            "measurement unavailable for 'tooltip': not in snapshot"
        );
        assert_eq!(err.reference(), "tooltip");
    }
}
