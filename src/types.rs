//! Value types for address conversion.
//!
//! All types here are plain values: constructed per conversion call,
//! never mutated, safe to copy across threads.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::AddressError;

/// EVM address (20 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EvmAddress(pub [u8; 20]);

impl EvmAddress {
    /// Parse from the external text form: `0x` followed by exactly 40 hex
    /// characters, case-insensitive.
    ///
    /// The `0x` prefix is required; anything else fails with
    /// [`AddressError::InvalidFormat`].
    pub fn from_hex(s: &str) -> Result<Self, AddressError> {
        let Some(hex_str) = s.strip_prefix("0x") else {
            return Err(AddressError::format("missing 0x prefix"));
        };

        if hex_str.len() != 40 {
            return Err(AddressError::format(format!(
                "expected 40 hex chars, got {}",
                hex_str.len()
            )));
        }

        let bytes = hex::decode(hex_str)
            .map_err(|e| AddressError::format(format!("bad hex: {}", e)))?;

        let mut result = [0u8; 20];
        result.copy_from_slice(&bytes);
        Ok(EvmAddress(result))
    }

    /// Convert to lowercase hex string with 0x prefix.
    ///
    /// For the EIP-55 mixed-case form, pass this through
    /// [`crate::checksum::to_checksum_address`].
    pub fn as_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }

    /// Get raw bytes
    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }
}

impl fmt::Display for EvmAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_hex())
    }
}

impl From<[u8; 20]> for EvmAddress {
    fn from(bytes: [u8; 20]) -> Self {
        EvmAddress(bytes)
    }
}

// ============================================================================
// Substrate Account (32 bytes)
// ============================================================================

/// Sentinel byte marking an EVM-derived account
pub const EVM_SENTINEL: u8 = 0xEE;

/// Number of sentinel bytes in the suffix
pub const SENTINEL_LEN: usize = 12;

/// How a 32-byte account identifier was constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountKind {
    /// A 20-byte EVM address padded with 12 sentinel bytes.
    EvmDerived,
    /// An opaque native 32-byte public key.
    Native,
}

/// Substrate account identifier (32 bytes).
///
/// Layout for the EVM-derived variant:
/// ```text
/// | EVM address (20 bytes) | 0xEE * 12 |
/// ```
///
/// The all-`0xEE` suffix is the discriminant between the two variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubstrateAccount(pub [u8; 32]);

impl SubstrateAccount {
    /// Create an EVM-derived account: the address bytes followed by the
    /// sentinel suffix.
    pub fn from_evm(addr: &EvmAddress) -> Self {
        let mut result = [EVM_SENTINEL; 32];
        result[..20].copy_from_slice(addr.as_bytes());
        SubstrateAccount(result)
    }

    /// Create from raw 32 bytes (native key or decoded payload).
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        SubstrateAccount(bytes)
    }

    /// Classify by inspecting the suffix.
    ///
    /// A native key whose last 12 bytes happen to all be `0xEE`
    /// (probability ~2^-96) is classified as EVM-derived. That is the Hub
    /// account-mapping convention; the collision case is accepted, not
    /// special-cased.
    pub fn kind(&self) -> AccountKind {
        if self.0[20..].iter().all(|&b| b == EVM_SENTINEL) {
            AccountKind::EvmDerived
        } else {
            AccountKind::Native
        }
    }

    /// Extract the embedded EVM address, if this is the EVM-derived
    /// variant. Returns the first 20 bytes unmodified.
    pub fn evm_address(&self) -> Option<EvmAddress> {
        match self.kind() {
            AccountKind::EvmDerived => {
                let mut result = [0u8; 20];
                result.copy_from_slice(&self.0[..20]);
                Some(EvmAddress(result))
            }
            AccountKind::Native => None,
        }
    }

    /// Get raw bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Convert to hex string with 0x prefix
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

impl fmt::Display for SubstrateAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

// ============================================================================
// SS58 Network Prefix
// ============================================================================

/// SS58 network prefix.
///
/// Selected by configuration, never derived from the address itself.
/// Values 0..=63 encode as a single byte; 64..=16383 use the two-byte
/// long form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Ss58Prefix(pub u16);

impl Ss58Prefix {
    /// Largest prefix the SS58 registry can encode (14 bits).
    pub const MAX: u16 = 0x3FFF;

    /// Create a prefix, rejecting values outside the encodable range.
    pub fn new(value: u16) -> Result<Self, AddressError> {
        if value > Self::MAX {
            return Err(AddressError::format(format!(
                "SS58 prefix {} out of range (max {})",
                value,
                Self::MAX
            )));
        }
        Ok(Ss58Prefix(value))
    }

    /// Convert to u16
    pub fn to_u16(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for Ss58Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
