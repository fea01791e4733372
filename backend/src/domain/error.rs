//! Domain-level error types.
//!
//! These errors are transport agnostic. Inbound adapters map them to HTTP
//! responses or any other protocol-specific envelope by switching on
//! [`ErrorCode`], never on the message text.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Message carried by [`ErrorCode::InvalidTitle`] errors.
pub const TITLE_INVALID_MESSAGE: &str = "title had empty value, expect a valid one";
/// Message carried by [`ErrorCode::InvalidSignee`] errors.
pub const SIGNEE_INVALID_MESSAGE: &str = "signee had empty value, expect a valid one";

/// Stable machine-readable error code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The request could not be decoded (bad JSON, non-numeric identifier).
    InvalidRequest,
    /// The document title is empty once trimmed.
    InvalidTitle,
    /// The document signee is empty once trimmed.
    InvalidSignee,
    /// No document matches the requested identifier.
    NotFound,
    /// The store failed for any reason other than a missing row.
    PersistenceFailure,
}

impl ErrorCode {
    /// Whether the code represents a rejected document payload.
    pub const fn is_validation(self) -> bool {
        matches!(self, Self::InvalidTitle | Self::InvalidSignee)
    }
}

/// Domain error payload.
///
/// ## Invariants
/// - `message` is never empty; constructors substitute a generic message for
///   blank input so adapters always have something to report.
///
/// # Examples
/// ```
/// use documents_backend::domain::{Error, ErrorCode};
///
/// let err = Error::not_found("document 7 not found");
/// assert_eq!(err.code(), ErrorCode::NotFound);
/// assert_eq!(err.to_string(), "document 7 not found");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    code: ErrorCode,
    message: String,
}

impl Error {
    /// Create a new error with the given code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.trim().is_empty() {
            default_message(code).to_owned()
        } else {
            message
        };
        Self { code, message }
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message returned to adapters.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Convenience constructor for [`ErrorCode::InvalidRequest`].
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// The title-invalid condition raised by document validation.
    pub fn invalid_title() -> Self {
        Self::new(ErrorCode::InvalidTitle, TITLE_INVALID_MESSAGE)
    }

    /// The signee-invalid condition raised by document validation.
    pub fn invalid_signee() -> Self {
        Self::new(ErrorCode::InvalidSignee, SIGNEE_INVALID_MESSAGE)
    }

    /// Convenience constructor for [`ErrorCode::NotFound`].
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Convenience constructor for [`ErrorCode::PersistenceFailure`].
    pub fn persistence(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::PersistenceFailure, message)
    }
}

fn default_message(code: ErrorCode) -> &'static str {
    match code {
        ErrorCode::InvalidRequest => "invalid request",
        ErrorCode::InvalidTitle => TITLE_INVALID_MESSAGE,
        ErrorCode::InvalidSignee => SIGNEE_INVALID_MESSAGE,
        ErrorCode::NotFound => "not found",
        ErrorCode::PersistenceFailure => "persistence failure",
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    //! Regression coverage for error construction.

    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Error::invalid_request("bad"), ErrorCode::InvalidRequest)]
    #[case(Error::invalid_title(), ErrorCode::InvalidTitle)]
    #[case(Error::invalid_signee(), ErrorCode::InvalidSignee)]
    #[case(Error::not_found("missing"), ErrorCode::NotFound)]
    #[case(Error::persistence("boom"), ErrorCode::PersistenceFailure)]
    fn constructors_set_code(#[case] error: Error, #[case] expected: ErrorCode) {
        assert_eq!(error.code(), expected);
    }

    #[rstest]
    fn blank_messages_fall_back_to_code_default() {
        let error = Error::not_found("   ");
        assert_eq!(error.message(), "not found");
    }

    #[rstest]
    fn validation_messages_are_stable() {
        assert_eq!(Error::invalid_title().to_string(), TITLE_INVALID_MESSAGE);
        assert_eq!(Error::invalid_signee().to_string(), SIGNEE_INVALID_MESSAGE);
    }

    #[rstest]
    #[case(ErrorCode::InvalidTitle, true)]
    #[case(ErrorCode::InvalidSignee, true)]
    #[case(ErrorCode::InvalidRequest, false)]
    #[case(ErrorCode::NotFound, false)]
    #[case(ErrorCode::PersistenceFailure, false)]
    fn validation_codes_are_classified(#[case] code: ErrorCode, #[case] expected: bool) {
        assert_eq!(code.is_validation(), expected);
    }
}
