//! EIP-55 mixed-case checksum encoding.
//!
//! Encodes address byte information into the capitalization of the hex
//! string so transcription errors are detectable by eye and by tools.

use crate::error::AddressError;
use crate::hash::keccak256;

/// Render an EVM address in EIP-55 checksummed form.
///
/// Accepts the 40-hex-char form with or without a `0x` prefix, in any
/// case. The case decision for character `i` comes from the keccak256
/// hash of the lowercase hex string: high nibble of `hash[i/2]` for even
/// `i`, low nibble for odd, uppercase iff the nibble's `0x8` bit is set.
/// Digits pass through unchanged.
pub fn to_checksum_address(address: &str) -> Result<String, AddressError> {
    let hex_str = address.strip_prefix("0x").unwrap_or(address);

    if hex_str.len() != 40 {
        return Err(AddressError::format(format!(
            "expected 40 hex chars, got {}",
            hex_str.len()
        )));
    }
    if !hex_str.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(AddressError::format("non-hex character in address"));
    }

    let lower = hex_str.to_ascii_lowercase();
    let hash = keccak256(lower.as_bytes());

    let mut out = String::with_capacity(42);
    out.push_str("0x");
    for (i, c) in lower.chars().enumerate() {
        let nibble = if i % 2 == 0 {
            hash[i / 2] >> 4
        } else {
            hash[i / 2] & 0x0F
        };
        if nibble & 0x8 != 0 {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
    }

    Ok(out)
}
