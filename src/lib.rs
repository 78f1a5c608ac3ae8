//! Hubaddr-RS: EVM ↔ Substrate Hub Address Conversion
//!
//! This crate converts between 20-byte EVM addresses and the SS58 account
//! encoding used by Substrate Hub chains:
//!
//! - **Address Transform** - pad an EVM address with the `0xEE` sentinel
//!   suffix into a 32-byte account, or recover an EVM address from a
//!   decoded account (strip for EVM-derived accounts, keccak fallback for
//!   native keys)
//! - **SS58 Codec** - base-58 encoding with embedded network prefix and
//!   blake2b checksum
//! - **EIP-55 Formatter** - mixed-case checksum rendering of hex addresses
//! - **Types** - `EvmAddress`, `SubstrateAccount`, `Ss58Prefix`
//! - **Networks** - name → prefix/endpoint registry for Hub chains
//!
//! All operations are synchronous, pure, and stateless; every conversion
//! is a function of its inputs alone, so concurrent callers need no
//! coordination.
//!
//! ## Usage
//!
//! ```
//! use hubaddr_rs::{eth_to_substrate, substrate_to_eth, Ss58Prefix};
//!
//! let ss58 = eth_to_substrate(
//!     "0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045",
//!     Ss58Prefix(0),
//! )?;
//! let eth = substrate_to_eth(&ss58)?;
//! assert_eq!(eth, "0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045");
//! # Ok::<(), hubaddr_rs::AddressError>(())
//! ```

pub mod checksum;
pub mod convert;
pub mod error;
pub mod hash;
pub mod networks;
pub mod ss58;
pub mod types;

// Re-export the conversion surface at the crate root
pub use checksum::to_checksum_address;
pub use convert::{
    eth_to_substrate, is_valid_eth_address, is_valid_ss58_address, substrate_to_eth,
};
pub use error::AddressError;
pub use hash::keccak256;
pub use networks::{find as find_network, KnownNetwork, KNOWN_NETWORKS};
pub use types::{AccountKind, EvmAddress, Ss58Prefix, SubstrateAccount};
