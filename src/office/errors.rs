use thiserror::Error;

/// Errors that can arise while interacting with the post office.
///
/// Both variants are caller-input errors, not system faults: the requested
/// username was never registered with the office. They are raised before any
/// state changes, so a failed operation leaves the office untouched.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OfficeError {
    /// Returned when delivering a message addressed to a username without a
    /// registered box.
    #[error("unknown recipient: {0}")]
    UnknownRecipient(String),

    /// Returned when reading or searching an inbox for a username without a
    /// registered box.
    #[error("unknown user: {0}")]
    UnknownUser(String),
}
