//! Error types for address parsing and conversion.
//!
//! Both kinds are deterministic functions of bad input: the same input
//! always produces the same error, so no retry applies. Conversion is
//! all-or-nothing — an error means nothing was produced.

use thiserror::Error;

/// Errors returned by the conversion surface.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    /// Malformed Ethereum hex string or wrong length.
    #[error("invalid EVM address: {0}")]
    InvalidFormat(String),

    /// SS58 checksum failure, bad alphabet, bad prefix byte, or wrong
    /// decoded length.
    #[error("invalid SS58 address: {0}")]
    InvalidSs58(String),
}

impl AddressError {
    /// Build an `InvalidFormat` error from anything displayable.
    pub fn format(msg: impl Into<String>) -> Self {
        AddressError::InvalidFormat(msg.into())
    }

    /// Build an `InvalidSs58` error from anything displayable.
    pub fn ss58(msg: impl Into<String>) -> Self {
        AddressError::InvalidSs58(msg.into())
    }
}
