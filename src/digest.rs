use crate::Hash;
use sha1::{Digest, Sha1};

// ------------------------- UTILITY FUNCTIONS --------------------------------------------------
/// SHA-1 over raw bytes.
pub fn hash_data<T: AsRef<[u8]>>(data: &T) -> Hash {
    let mut hasher = Sha1::new();
    hasher.update(data.as_ref());
    let hash = hasher.finalize();
    hash.into()
}

/// Lowercase hex rendering of a digest, two characters per byte, bytes in
/// digest order.
pub fn to_hex(hash: &Hash) -> String {
    hex::encode(hash)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashes_raw_bytes() {
        assert_eq!(
            to_hex(&hash_data(b"abc")),
            "a9993e364706816aba3e25717850c26c9cd0d89d"
        );
    }

    #[test]
    fn renders_each_byte_as_two_hex_chars() {
        assert_eq!(to_hex(&[0u8; 20]), "0".repeat(40));
        let mut hash: Hash = [0; 20];
        hash[0] = 0xab;
        hash[19] = 0x01;
        let hex = to_hex(&hash);
        assert!(hex.starts_with("ab"));
        assert!(hex.ends_with("01"));
    }
}
