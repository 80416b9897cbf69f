//! Configurator error types.

use thiserror::Error;

/// Errors that can occur in the build configurator.
///
/// Nothing here is fatal to the surrounding application: every failure is
/// local and recoverable by retrying the triggering user action.
#[derive(Error, Debug)]
pub enum BuilderError {
    /// Quote generation attempted with unsatisfied required slots.
    ///
    /// Carries the display labels of the missing slots, in slot
    /// declaration order.
    #[error("Missing required components: {}", .0.join(", "))]
    MissingRequiredComponents(Vec<String>),

    /// The catalog could not be loaded for a category.
    #[error("Could not load components for category {category}: {reason}")]
    CatalogUnavailable { category: String, reason: String },

    /// Currency mismatch in a price calculation.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Arithmetic overflow in a price calculation.
    #[error("Arithmetic overflow in price calculation")]
    Overflow,

    /// A hardware item was rejected at the catalog boundary.
    #[error("Invalid hardware item: {0}")]
    InvalidItem(String),

    /// An extra product was rejected at ingestion.
    #[error("Invalid extra product: {0}")]
    InvalidExtra(String),
}

impl BuilderError {
    /// The labels carried by a `MissingRequiredComponents` error, if any.
    pub fn missing_labels(&self) -> Option<&[String]> {
        match self {
            BuilderError::MissingRequiredComponents(labels) => Some(labels),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_components_message() {
        let err = BuilderError::MissingRequiredComponents(vec![
            "Processador".to_string(),
            "Fonte".to_string(),
        ]);
        assert_eq!(
            err.to_string(),
            "Missing required components: Processador, Fonte"
        );
    }

    #[test]
    fn test_missing_labels_accessor() {
        let err = BuilderError::MissingRequiredComponents(vec!["Gabinete".to_string()]);
        assert_eq!(err.missing_labels().unwrap().len(), 1);

        let err = BuilderError::Overflow;
        assert!(err.missing_labels().is_none());
    }
}
