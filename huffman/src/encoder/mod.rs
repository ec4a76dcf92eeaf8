//! Provides an implementation of the [canonical Huffman] encoder.
//!
//! Each input octet is looked up in the static code table and its bit
//! pattern is appended, MSB-first, to a wide accumulator register. Whole
//! octets are flushed out of the accumulator as they fill up. Once every
//! input octet has been consumed, the final (possibly partial) octet is
//! padded with the most-significant bits of the `EOS` code, i.e. all-ones,
//! so padding is always unambiguous and never a valid symbol.
//!
//! [canonical Huffman]: https://en.wikipedia.org/wiki/Canonical_Huffman_code

use crate::table::ENCODE_TABLE;

/// Encodes `src` into its Huffman-compressed form, appending the result to
/// `dst`.
///
/// **Example:**
///
/// ```rust
/// use hpack_huffman::encode;
///
/// let mut dst = Vec::new();
/// encode(b"www.example.com", &mut dst);
/// assert_eq!(dst, vec![0xf1, 0xe3, 0xc2, 0xe5, 0xf2, 0x3a, 0x6b, 0xa0, 0xab, 0x90, 0xf4, 0xff]);
/// ```
pub fn encode(src: &[u8], dst: &mut Vec<u8>) {
    let mut acc: u64 = 0;
    let mut bits: u32 = 0;

    for &byte in src {
        let (length, code) = ENCODE_TABLE[byte as usize];
        acc = (acc << length) | code as u64;
        bits += length as u32;

        while bits >= 8 {
            bits -= 8;
            dst.push((acc >> bits) as u8);
        }
    }

    if bits > 0 {
        // Pad with the high bits of the EOS code, which is all-ones.
        let pad = 8 - bits;
        let byte = ((acc << pad) | (0xffu64 >> bits)) as u8;
        dst.push(byte);
    }
}

/// Returns the number of octets that `encode` would produce for `src`,
/// without performing the encoding. Used by callers that want to compare
/// the Huffman-encoded length against the literal length before choosing a
/// representation.
pub fn encoded_len(src: &[u8]) -> usize {
    let bits: usize = src
        .iter()
        .map(|&byte| ENCODE_TABLE[byte as usize].0 as usize)
        .sum();
    (bits + 7) / 8
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::decoder::decode;

    #[test]
    fn encodes_www_example_com() {
        let mut dst = Vec::new();
        encode(b"www.example.com", &mut dst);
        assert_eq!(
            dst,
            vec![0xf1, 0xe3, 0xc2, 0xe5, 0xf2, 0x3a, 0x6b, 0xa0, 0xab, 0x90, 0xf4, 0xff]
        );
    }

    #[test]
    fn encodes_empty_string() {
        let mut dst = Vec::new();
        encode(b"", &mut dst);
        assert!(dst.is_empty());
    }

    #[test]
    fn encoded_len_matches_actual_output() {
        let samples: &[&[u8]] = &[b"", b"a", b":method", b"www.example.com", b"custom-key"];
        for sample in samples {
            let mut dst = Vec::new();
            encode(sample, &mut dst);
            assert_eq!(encoded_len(sample), dst.len());
        }
    }

    #[test]
    fn round_trips_arbitrary_octets() {
        let samples: &[&[u8]] = &[
            b"",
            b"a",
            b"custom-key",
            b"custom-header",
            b"www.example.com",
            b"Mozilla/5.0 (Macintosh; Intel Mac OS X 10.8; rv:16.0)",
            &[0, 1, 2, 3, 4, 5, 255, 254, 128, 127],
        ];
        for sample in samples {
            let mut encoded = Vec::new();
            encode(sample, &mut encoded);
            let mut decoded = Vec::new();
            decode(&encoded, &mut decoded).unwrap();
            assert_eq!(&decoded, sample);
        }
    }
}
