//! Error types for the arithmetic service

/// Result type for arithmetic operations.
///
/// This is a convenience type alias that uses [`ArithError`] as the error type.
pub type Result<T> = std::result::Result<T, ArithError>;

/// Error type for every failure the arithmetic service can report.
///
/// Domain violations are raised at the call that performs the violating
/// operation and never leave the operation log partially updated.
///
/// # Error Categories
///
/// - **Domain Errors**: division by zero, arguments outside an operation's domain,
///   results that do not fit the result type
/// - **Input Errors**: expressions that cannot be parsed into an [`crate::Operation`]
/// - **Configuration Errors**: invalid settings or unreadable configuration files
#[derive(Debug, thiserror::Error)]
pub enum ArithError {
    /// Divisor of a division or modulo was zero
    #[error("{operation}: cannot divide by zero")]
    DivisionByZero { operation: &'static str },

    /// Argument lies outside the operation's mathematical domain
    #[error("{operation}: {reason}")]
    InvalidDomain {
        operation: &'static str,
        reason: String,
    },

    /// Result would not fit the result type
    #[error("{operation}: argument {value} is out of range (maximum {max})")]
    OutOfRange {
        operation: &'static str,
        value: i64,
        max: i64,
    },

    /// Text could not be parsed into an operation
    #[error("invalid expression '{expression}': {reason}")]
    InvalidExpression { expression: String, reason: String },

    /// Configuration values are invalid or could not be parsed
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// IO errors when reading configuration files
    #[error("IO error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl ArithError {
    /// Create a division by zero error for `operation`.
    pub fn division_by_zero(operation: &'static str) -> Self {
        Self::DivisionByZero { operation }
    }

    /// Create an invalid domain error for `operation` with a custom reason.
    pub fn invalid_domain<S: Into<String>>(operation: &'static str, reason: S) -> Self {
        Self::InvalidDomain {
            operation,
            reason: reason.into(),
        }
    }

    /// Create an invalid expression error.
    ///
    /// # Arguments
    /// * `expression` - The text that failed to parse
    /// * `reason` - What was wrong with it
    pub fn invalid_expression<E, R>(expression: E, reason: R) -> Self
    where
        E: Into<String>,
        R: Into<String>,
    {
        Self::InvalidExpression {
            expression: expression.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid configuration error with a custom message.
    pub fn invalid_config<S: Into<String>>(message: S) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Whether this error is a mathematical domain failure, as opposed to a
    /// parsing or configuration problem.
    pub fn is_domain_error(&self) -> bool {
        matches!(
            self,
            Self::DivisionByZero { .. } | Self::InvalidDomain { .. } | Self::OutOfRange { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ArithError::division_by_zero("divide");
        assert_eq!(err.to_string(), "divide: cannot divide by zero");

        let err = ArithError::OutOfRange {
            operation: "factorial",
            value: 21,
            max: 20,
        };
        assert_eq!(
            err.to_string(),
            "factorial: argument 21 is out of range (maximum 20)"
        );

        let err = ArithError::invalid_expression("frobnicate 1", "unknown operator");
        assert_eq!(
            err.to_string(),
            "invalid expression 'frobnicate 1': unknown operator"
        );
    }

    #[test]
    fn test_domain_error_classification() {
        let domain = ArithError::invalid_domain("sqrt", "negative");
        assert!(domain.is_domain_error());
        assert!(ArithError::division_by_zero("modulo").is_domain_error());
        assert!(!ArithError::invalid_config("bad").is_domain_error());
        let input = ArithError::invalid_expression("", "empty");
        assert!(!input.is_domain_error());
    }
}
