use thiserror::Error;

/// Text that cannot be losslessly encoded to bytes before hashing.
///
/// Only reachable through the UTF-16 entry points; a `&str` is valid UTF-8
/// by construction and hashes without a failure path.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EncodingError {
    #[error("unpaired surrogate 0x{value:04x} at code unit {index}")]
    UnpairedSurrogate { value: u16, index: usize },
}

/// SHA-1 fingerprint of UTF-16 code units, strict policy.
///
/// Transcodes to UTF-8 and hashes. Well-formed input produces exactly the
/// digest [`sha1_hex`](crate::sha1_hex) gives for the equivalent `&str`;
/// an unpaired surrogate is rejected with its value and code-unit offset.
pub fn sha1_hex_utf16(units: &[u16]) -> Result<String, EncodingError> {
    let mut text = String::with_capacity(units.len());
    let mut index = 0;
    for decoded in char::decode_utf16(units.iter().copied()) {
        match decoded {
            Ok(c) => {
                text.push(c);
                index += c.len_utf16();
            }
            Err(err) => {
                return Err(EncodingError::UnpairedSurrogate {
                    value: err.unpaired_surrogate(),
                    index,
                })
            }
        }
    }
    Ok(crate::sha1_hex(&text))
}

/// SHA-1 fingerprint of UTF-16 code units, substitution policy.
///
/// Every unpaired surrogate is replaced with U+FFFD before encoding, so this
/// never fails. Use [`sha1_hex_utf16`] when ill-formed input should be
/// surfaced instead of folded into the fingerprint.
pub fn sha1_hex_utf16_lossy(units: &[u16]) -> String {
    crate::sha1_hex(&String::from_utf16_lossy(units))
}
