//! Error types for the patternbook walkthroughs.
//!
//! The lifecycle itself is total: publish is defined for every stage, so the
//! taxonomy is small. Errors arise only at the string-parsing boundary of the
//! stage enum and in the facade's order-processing subsystems.

use thiserror::Error;

/// The main error type for patternbook operations.
#[derive(Debug, Error)]
pub enum PatternbookError {
    /// An unrecognized stage name was parsed.
    #[error("{0}")]
    UnknownStage(#[from] UnknownStageError),

    /// An order could not be placed.
    #[error("{0}")]
    Order(#[from] OrderError),
}

/// Error raised when a display name does not match any lifecycle stage.
///
/// A value like this can only come from a defect or from untrusted input at
/// the parsing boundary; inside the crate the closed enum makes an invalid
/// stage unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown stage name: '{name}'")]
pub struct UnknownStageError {
    /// The name that failed to resolve.
    pub name: String,
}

impl UnknownStageError {
    /// Creates a new unknown stage error.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Errors raised by the order-processing facade.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OrderError {
    /// The inventory cannot cover the requested quantity.
    #[error("Insufficient stock.")]
    InsufficientStock {
        /// The requested product.
        product: String,
        /// The requested quantity.
        quantity: u32,
    },

    /// The payment could not be processed.
    #[error("Payment error.")]
    PaymentFailed {
        /// The rejected amount.
        amount: f64,
    },
}

impl OrderError {
    /// Creates an insufficient stock error.
    #[must_use]
    pub fn insufficient_stock(product: impl Into<String>, quantity: u32) -> Self {
        Self::InsufficientStock {
            product: product.into(),
            quantity,
        }
    }

    /// Creates a payment failed error.
    #[must_use]
    pub fn payment_failed(amount: f64) -> Self {
        Self::PaymentFailed { amount }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_stage_error_display() {
        let err = UnknownStageError::new("Archived");
        assert_eq!(err.to_string(), "unknown stage name: 'Archived'");
    }

    #[test]
    fn test_order_error_display() {
        let err = OrderError::insufficient_stock("Laptop", 15);
        assert_eq!(err.to_string(), "Insufficient stock.");

        let err = OrderError::payment_failed(0.0);
        assert_eq!(err.to_string(), "Payment error.");
    }

    #[test]
    fn test_patternbook_error_wraps_sources() {
        let err: PatternbookError = UnknownStageError::new("Retired").into();
        assert_eq!(err.to_string(), "unknown stage name: 'Retired'");

        let err: PatternbookError = OrderError::payment_failed(-1.0).into();
        assert_eq!(err.to_string(), "Payment error.");
    }
}
