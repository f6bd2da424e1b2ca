//! SHA-1 text fingerprinting.
//!
//! Takes a text value, encodes it as UTF-8 and returns its SHA-1 digest as a
//! 40-character lowercase hex string. The digest itself is delegated to the
//! RustCrypto [`sha1`] crate; nothing here reimplements the algorithm.
//!
//! SHA-1 is cryptographically broken. The output is a fingerprint for
//! deduplication and change detection, not a security boundary.
pub mod digest;
pub mod encoding;
pub use digest::*;
pub use encoding::*;

/// 20-byte SHA-1 digest.
pub type Hash = [u8; 20];

/// SHA-1 fingerprint of `text` as a lowercase hex string.
///
/// The text is encoded as UTF-8 before hashing, so the same logical text
/// always maps to the same byte sequence and therefore the same fingerprint.
/// Output is exactly 40 characters, `[0-9a-f]` only.
pub fn sha1_hex(text: &str) -> String {
    to_hex(&sha1_digest(text))
}

/// Raw 20-byte SHA-1 digest of `text`, UTF-8 encoded.
pub fn sha1_digest(text: &str) -> Hash {
    hash_data(&text.as_bytes())
}
