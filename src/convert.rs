//! Address transform between the EVM and Substrate encodings.
//!
//! Forward: a 20-byte EVM address is padded with the `0xEE` sentinel
//! suffix and SS58-encoded under the caller's network prefix. Reverse: a
//! decoded 32-byte account either strips back to the original 20 bytes
//! (EVM-derived) or falls back to the last 20 bytes of its keccak256
//! digest (native key). Both directions are pure functions.

use crate::checksum::to_checksum_address;
use crate::error::AddressError;
use crate::hash::keccak256;
use crate::ss58;
use crate::types::{EvmAddress, Ss58Prefix, SubstrateAccount};

/// Convert an EVM address string to its SS58 form under `prefix`.
///
/// Fails with [`AddressError::InvalidFormat`] unless the input is `0x`
/// followed by exactly 40 case-insensitive hex characters.
pub fn eth_to_substrate(eth_address: &str, prefix: Ss58Prefix) -> Result<String, AddressError> {
    let addr = EvmAddress::from_hex(eth_address)?;
    let account = SubstrateAccount::from_evm(&addr);
    Ok(ss58::encode(prefix, account.as_bytes()))
}

/// Convert an SS58 address string to an EIP-55 checksummed EVM address.
///
/// Fails with [`AddressError::InvalidSs58`] if decode or checksum
/// validation fails. The caller cannot tell which internal branch
/// produced the result; both yield a valid checksummed address.
pub fn substrate_to_eth(ss58_address: &str) -> Result<String, AddressError> {
    let (_prefix, payload) = ss58::decode(ss58_address)?;
    let account = SubstrateAccount::from_bytes(payload);

    let raw = match account.evm_address() {
        // EVM-derived: first 20 bytes, bit-for-bit
        Some(addr) => addr,
        // native key: keccak over the full 32 bytes, last 20 of the digest
        None => {
            let digest = keccak256(account.as_bytes());
            let mut out = [0u8; 20];
            out.copy_from_slice(&digest[12..]);
            EvmAddress(out)
        }
    };

    to_checksum_address(&raw.as_hex())
}

/// Check whether `address` is a well-formed EVM address
/// (`0x` + 40 hex chars, case-insensitive).
pub fn is_valid_eth_address(address: &str) -> bool {
    EvmAddress::from_hex(address).is_ok()
}

/// Check whether `address` decodes as SS58 with a valid checksum.
pub fn is_valid_ss58_address(address: &str) -> bool {
    ss58::decode(address).is_ok()
}
