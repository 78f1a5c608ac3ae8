//! SS58 codec for 32-byte account payloads.
//!
//! Standard construction: base-58 of `prefix-bytes || payload || checksum`,
//! where the checksum is the first two bytes of blake2b-512 over
//! `b"SS58PRE" || prefix-bytes || payload`. Prefixes below 64 encode as a
//! single byte; 64..=16383 use the two-byte long form.

use blake2::{Blake2b512, Digest};

use crate::error::AddressError;
use crate::types::Ss58Prefix;

/// Checksum preimage prefix
const SS58_PREFIX: &[u8] = b"SS58PRE";

/// Checksum length in bytes (2 for 32-byte payloads)
const CHECKSUM_LEN: usize = 2;

/// Account payload length in bytes
pub const PAYLOAD_LEN: usize = 32;

/// Encode a 32-byte payload with the given network prefix.
///
/// Never fails: the prefix is masked to the encodable 14-bit range.
pub fn encode(prefix: Ss58Prefix, payload: &[u8; PAYLOAD_LEN]) -> String {
    let ident = prefix.to_u16() & Ss58Prefix::MAX;
    let mut data = Vec::with_capacity(2 + PAYLOAD_LEN + CHECKSUM_LEN);

    match ident {
        0..=63 => data.push(ident as u8),
        _ => {
            // upper six bits of the lower byte, tagged with 0b01
            let first = ((ident & 0b0000_0000_1111_1100) as u8) >> 2;
            // lower two bits of the lower byte in the high position,
            // upper byte in the low position
            let second = ((ident >> 8) as u8) | ((ident & 0b0000_0000_0000_0011) as u8) << 6;
            data.push(first | 0b0100_0000);
            data.push(second);
        }
    }

    data.extend_from_slice(payload);
    let hash = checksum_hash(&data);
    data.extend_from_slice(&hash[..CHECKSUM_LEN]);

    bs58::encode(data).into_string()
}

/// Decode an SS58 string to `(prefix, payload)`.
///
/// Fails with [`AddressError::InvalidSs58`] on a base-58 alphabet
/// violation, an unrecognized prefix byte, a length mismatch, or a
/// checksum mismatch.
pub fn decode(encoded: &str) -> Result<(Ss58Prefix, [u8; PAYLOAD_LEN]), AddressError> {
    let data = bs58::decode(encoded)
        .into_vec()
        .map_err(|e| AddressError::ss58(format!("bad base58: {}", e)))?;

    if data.is_empty() {
        return Err(AddressError::ss58("empty data"));
    }

    let (prefix_len, ident) = match data[0] {
        0..=63 => (1, data[0] as u16),
        64..=127 => {
            if data.len() < 2 {
                return Err(AddressError::ss58("truncated two-byte prefix"));
            }
            // invert the long form: d[0] d[1] are 01aaaaaa bbcccccc,
            // the prefix is the LE 16-bit value aaaaaabb 00cccccc
            let lower = (data[0] << 2) | (data[1] >> 6);
            let upper = data[1] & 0b0011_1111;
            (2, (lower as u16) | ((upper as u16) << 8))
        }
        _ => return Err(AddressError::ss58(format!("invalid prefix byte {:#04x}", data[0]))),
    };

    let expected_len = prefix_len + PAYLOAD_LEN + CHECKSUM_LEN;
    if data.len() != expected_len {
        return Err(AddressError::ss58(format!(
            "invalid length: expected {} bytes, got {}",
            expected_len,
            data.len()
        )));
    }

    let hash = checksum_hash(&data[..prefix_len + PAYLOAD_LEN]);
    if data[prefix_len + PAYLOAD_LEN..] != hash[..CHECKSUM_LEN] {
        return Err(AddressError::ss58("checksum mismatch"));
    }

    let mut payload = [0u8; PAYLOAD_LEN];
    payload.copy_from_slice(&data[prefix_len..prefix_len + PAYLOAD_LEN]);
    Ok((Ss58Prefix(ident), payload))
}

fn checksum_hash(data: &[u8]) -> Vec<u8> {
    let mut ctx = Blake2b512::new();
    ctx.update(SS58_PREFIX);
    ctx.update(data);
    ctx.finalize().to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    /// Alice's sr25519 public key, whose SS58 encodings are published for
    /// several networks.
    const ALICE: [u8; 32] =
        hex!("d43593c715fdd31c61141abd04a99fd6822c8558854ccde39a5684e7a56da27d");

    #[test]
    fn test_encode_known_vectors() {
        assert_eq!(
            encode(Ss58Prefix(0), &ALICE),
            "15oF4uVJwmo4TdGW7VfQxNLavjCXviqxT9S1MgbjMNHr6Sp5"
        );
        assert_eq!(
            encode(Ss58Prefix(2), &ALICE),
            "HNZata7iMYWmk5RvZRTiAsSDhV8366zq2YGb3tLH5Upf74F"
        );
        assert_eq!(
            encode(Ss58Prefix(42), &ALICE),
            "5GrwvaEF5zXb26Fz9rcQpDWS57CtERHpNehXCPcNoHGKutQY"
        );
    }

    #[test]
    fn test_decode_known_vector() {
        let (prefix, payload) =
            decode("15oF4uVJwmo4TdGW7VfQxNLavjCXviqxT9S1MgbjMNHr6Sp5").unwrap();
        assert_eq!(prefix, Ss58Prefix(0));
        assert_eq!(payload, ALICE);
    }

    #[test]
    fn test_roundtrip_short_prefix() {
        let payload = [7u8; 32];
        for p in [0u16, 1, 2, 42, 63] {
            let encoded = encode(Ss58Prefix(p), &payload);
            let (prefix, decoded) = decode(&encoded).unwrap();
            assert_eq!(prefix, Ss58Prefix(p));
            assert_eq!(decoded, payload);
        }
    }

    #[test]
    fn test_roundtrip_long_prefix() {
        let payload = [7u8; 32];
        for p in [64u16, 137, 2112, 16383] {
            let encoded = encode(Ss58Prefix(p), &payload);
            let (prefix, decoded) = decode(&encoded).unwrap();
            assert_eq!(prefix, Ss58Prefix(p), "prefix {} did not roundtrip", p);
            assert_eq!(decoded, payload);
        }
    }

    #[test]
    fn test_long_prefix_known_vector() {
        // vitalik.eth's address padded with the EVM sentinel suffix
        let mut payload = [0xEEu8; 32];
        payload[..20].copy_from_slice(&hex!("d8da6bf26964af9d7eed9e03e53415d37aa96045"));

        assert_eq!(
            encode(Ss58Prefix(137), &payload),
            "kGkSKdMkjFriHAhkFhaNbDqwGqu7UVD9N7QP3H4Y8E9s7APE2"
        );
        assert_eq!(
            encode(Ss58Prefix(2112), &payload),
            "cFNmp4EWJkuaLivvfNRMp4wZNWpA2WSPnLWafqD1ri4atZZwB"
        );
    }

    #[test]
    fn test_decode_rejects_bad_alphabet() {
        // '0', 'O', 'I', 'l' are not in the base-58 alphabet
        let result = decode("0OIl4uVJwmo4TdGW7VfQxNLavjCXviqxT9S1MgbjMNHr6Sp5");
        assert!(matches!(result, Err(AddressError::InvalidSs58(_))));
    }

    #[test]
    fn test_decode_rejects_corrupted_checksum() {
        let mut encoded = encode(Ss58Prefix(0), &ALICE);
        // flip the final character to another alphabet member
        let last = encoded.pop().unwrap();
        encoded.push(if last == '5' { '6' } else { '5' });
        let result = decode(&encoded);
        assert!(matches!(result, Err(AddressError::InvalidSs58(_))));
    }

    #[test]
    fn test_decode_rejects_wrong_payload_length() {
        // a 20-byte payload is valid base58 with a fine prefix byte, but
        // the decoded length cannot match prefix + 32 + 2
        let mut data = vec![0u8];
        data.extend_from_slice(&[1u8; 20]);
        let mut ctx = Blake2b512::new();
        ctx.update(SS58_PREFIX);
        ctx.update(&data);
        let hash = ctx.finalize();
        data.extend_from_slice(&hash[..2]);
        let encoded = bs58::encode(data).into_string();

        let result = decode(&encoded);
        assert!(matches!(result, Err(AddressError::InvalidSs58(_))));
    }

    #[test]
    fn test_decode_rejects_reserved_prefix_byte() {
        // first byte >= 128 is outside both prefix forms; build with a
        // valid checksum so only the prefix check can reject it
        let mut data = vec![0x80u8];
        data.extend_from_slice(&[1u8; 32]);
        let mut ctx = Blake2b512::new();
        ctx.update(SS58_PREFIX);
        ctx.update(&data);
        let hash = ctx.finalize();
        data.extend_from_slice(&hash[..2]);
        let encoded = bs58::encode(data).into_string();

        let result = decode(&encoded);
        assert!(matches!(result, Err(AddressError::InvalidSs58(_))));
    }

    #[test]
    fn test_decode_empty_string() {
        assert!(decode("").is_err());
    }

    #[test]
    fn test_prefix_0_and_2_differ() {
        let payload = [9u8; 32];
        assert_ne!(encode(Ss58Prefix(0), &payload), encode(Ss58Prefix(2), &payload));
    }
}
