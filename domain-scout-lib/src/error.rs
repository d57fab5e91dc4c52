//! Error handling for domain scanning operations.
//!
//! This module defines a comprehensive error type that covers all the different
//! ways a scan can fail, from invalid configuration to per-candidate lookup
//! failures. Configuration errors are fatal and stop a scan before any worker
//! starts; transport and parse errors are data, attached to the result of the
//! candidate they occurred on.

use std::fmt;

/// Main error type for domain scanning operations.
///
/// This enum covers all possible failure modes in the scanning process,
/// providing detailed context for debugging and user-friendly error messages.
#[derive(Debug, Clone, PartialEq)]
pub enum ScanError {
    /// Invalid scan configuration (unknown TLD, empty charset, empty pattern list).
    /// Fatal: the scan must not start.
    Config { message: String },

    /// Invalid domain name or pattern syntax
    InvalidDomain { domain: String, reason: String },

    /// Network-level failure reaching the WHOIS responder for one candidate.
    /// Non-fatal: recorded on that candidate's result only.
    Transport { domain: String, message: String },

    /// The WHOIS response explicitly says the domain is not registered.
    /// This is consumed by the classifier and never surfaces to callers.
    DomainNotFound,

    /// A WHOIS response was received but could not be parsed into a record.
    /// Non-fatal: recorded on that candidate's result only.
    Parse { message: String },

    /// File I/O errors when loading configuration
    File { path: String, message: String },
}

impl ScanError {
    /// Create a new configuration error.
    pub fn config<M: Into<String>>(message: M) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new invalid domain error.
    pub fn invalid_domain<D: Into<String>, R: Into<String>>(domain: D, reason: R) -> Self {
        Self::InvalidDomain {
            domain: domain.into(),
            reason: reason.into(),
        }
    }

    /// Create a new transport error.
    pub fn transport<D: Into<String>, M: Into<String>>(domain: D, message: M) -> Self {
        Self::Transport {
            domain: domain.into(),
            message: message.into(),
        }
    }

    /// Create a new parse error.
    pub fn parse<M: Into<String>>(message: M) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a new file error.
    pub fn file_error<P: Into<String>, M: Into<String>>(path: P, message: M) -> Self {
        Self::File {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Check if this error is the parser's specific "domain not found" signal.
    ///
    /// The classifier treats this as a definitive availability verdict rather
    /// than a failure.
    pub fn is_domain_not_found(&self) -> bool {
        matches!(self, Self::DomainNotFound)
    }

    /// Check if this error is fatal to the whole scan.
    ///
    /// Only configuration-level errors abort a scan; per-candidate errors
    /// are attached to their result and the scan continues.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::Config { .. } | Self::InvalidDomain { .. } | Self::File { .. }
        )
    }
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config { message } => {
                write!(f, "Configuration error: {}", message)
            }
            Self::InvalidDomain { domain, reason } => {
                write!(f, "Invalid domain '{}': {}", domain, reason)
            }
            Self::Transport { domain, message } => {
                write!(f, "Transport error for '{}': {}", domain, message)
            }
            Self::DomainNotFound => {
                write!(f, "Domain not found in WHOIS registry")
            }
            Self::Parse { message } => {
                write!(f, "Parse error: {}", message)
            }
            Self::File { path, message } => {
                write!(f, "File error at '{}': {}", path, message)
            }
        }
    }
}

impl std::error::Error for ScanError {}

// Implement From conversions for common error types
impl From<std::io::Error> for ScanError {
    fn from(err: std::io::Error) -> Self {
        Self::Config {
            message: format!("I/O error: {}", err),
        }
    }
}

impl From<toml::de::Error> for ScanError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config {
            message: format!("Failed to parse TOML configuration: {}", err),
        }
    }
}
