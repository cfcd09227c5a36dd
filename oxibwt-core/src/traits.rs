//! Core traits for block transforms.
//!
//! Every transform in the workspace works on a complete in-memory block:
//! one call consumes the whole input and returns the whole output.

use crate::error::Result;

/// A reversible whole-block transform.
///
/// Implementors keep no state between calls; `decode(encode(x))` must
/// reproduce `x` exactly for every input `x`.
pub trait BlockCodec {
    /// The encoded representation of one input buffer.
    type Encoded;

    /// Encode a complete input buffer.
    fn encode(&self, input: &[u8]) -> Result<Self::Encoded>;

    /// Decode a previously encoded value back into the original bytes.
    fn decode(&self, encoded: &Self::Encoded) -> Result<Vec<u8>>;

    /// Encode then decode `input`, returning the reconstructed bytes.
    ///
    /// Handy for self-checks in tests and benchmarks.
    fn roundtrip(&self, input: &[u8]) -> Result<Vec<u8>> {
        let encoded = self.encode(input)?;
        self.decode(&encoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Reverses the byte order; its own inverse.
    struct Reverse;

    impl BlockCodec for Reverse {
        type Encoded = Vec<u8>;

        fn encode(&self, input: &[u8]) -> Result<Vec<u8>> {
            Ok(input.iter().rev().copied().collect())
        }

        fn decode(&self, encoded: &Vec<u8>) -> Result<Vec<u8>> {
            Ok(encoded.iter().rev().copied().collect())
        }
    }

    #[test]
    fn test_default_roundtrip() {
        let codec = Reverse;
        assert_eq!(codec.encode(b"abc").unwrap(), b"cba");
        assert_eq!(codec.roundtrip(b"abc").unwrap(), b"abc");
        assert!(codec.roundtrip(b"").unwrap().is_empty());
    }
}
