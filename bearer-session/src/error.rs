use std::{error::Error, fmt::Display};

#[derive(Clone, Debug, PartialEq)]
pub enum StartupError {
    InvalidParameter(String),
}

impl Display for StartupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}
impl Error for StartupError {}

/// Raised when a persisted token does not have the shape of a JWT.
///
/// Recovered internally: the session purges the token and reports an
/// anonymous state instead of surfacing this error.
#[derive(Clone, Debug, PartialEq)]
pub enum MalformedTokenError {
    WrongSegmentCount,
    InvalidEncoding,
    UnparsablePayload,
}

impl Display for MalformedTokenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}
impl Error for MalformedTokenError {}

/// Raised when the persisted token store cannot be reached.
///
/// Propagated from every session operation, never masked.
#[derive(Clone, Debug, PartialEq)]
pub struct StorageUnavailableError {
    reason: String,
}

impl StorageUnavailableError {
    pub fn new(reason: impl Into<String>) -> Self {
        StorageUnavailableError {
            reason: reason.into(),
        }
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl Display for StorageUnavailableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}
impl Error for StorageUnavailableError {}

#[derive(Clone, Debug, PartialEq)]
pub enum VerificationError {
    ValidationFailed {
        reason: jsonwebtoken::errors::ErrorKind,
    },
}

impl Display for VerificationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}
impl Error for VerificationError {}

#[derive(Clone, Debug, PartialEq)]
pub enum PolicyError {
    UnknownPolicy(String),
    AccessDenied(String),
}

impl Display for PolicyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}
impl Error for PolicyError {}
