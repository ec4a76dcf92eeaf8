//! Provides an implementation of the [canonical Huffman] decoder.
//!
//! The decoder walks a prebuilt binary trie one bit at a time, MSB-first
//! within each octet. Every leaf carries a decoded symbol; reaching one
//! resets the walk to the root. The trie is built once from the static code
//! table ([`crate::table::ENCODE_TABLE`]) and is shared immutably by every
//! call, so decoding never allocates more than the output buffer itself.
//!
//! Padding is the tricky part: HPACK pads the final byte of a Huffman string
//! with the most significant bits of the `EOS` code, i.e. all-ones. At the
//! end of input the walk must be either back at the root, or mid-code with
//! fewer than eight accumulated bits that are themselves a prefix of the
//! `EOS` code. Landing on `EOS` as a decoded symbol is always an error: it
//! is a sentinel for padding and never appears as a plain octet.
//!
//! [canonical Huffman]: https://en.wikipedia.org/wiki/Canonical_Huffman_code

mod error;

pub use error::*;

use crate::table::{self, Node};

/// Decodes a Huffman-encoded `src` sequence into `dst`.
///
/// **Example:**
///
/// ```rust
/// use hpack_huffman::decode;
///
/// let mut dst = Vec::new();
/// let src = vec![0xf1, 0xe3, 0xc2, 0xe5, 0xf2, 0x3a, 0x6b, 0xa0, 0xab, 0x90, 0xf4, 0xff];
/// decode(&src, &mut dst).unwrap();
/// assert_eq!(dst, b"www.example.com");
/// ```
pub fn decode(src: &[u8], dst: &mut Vec<u8>) -> Result<(), DecoderError> {
    let root = table::trie();
    let mut node: &Node = root;
    let mut pending_bits = 0u8; // bits consumed since the last symbol or root
    let mut pending_ones = 0u8; // of those, how many were 1-bits in a row from the start

    for &byte in src {
        for i in (0..8).rev() {
            let bit = (byte >> i) & 1;
            node = match (bit, &node.zero, &node.one) {
                (0, Some(n), _) => n.as_ref(),
                (1, _, Some(n)) => n.as_ref(),
                _ => return Err(DecoderError::InvalidPadding),
            };
            pending_bits += 1;
            if bit == 1 && pending_bits == pending_ones + 1 {
                pending_ones += 1;
            }

            if let Some(symbol) = node.symbol {
                if symbol == table::EOS {
                    log::debug!("EOS symbol decoded mid-stream");
                    return Err(DecoderError::EosInStream);
                }
                dst.push(symbol as u8);
                node = root;
                pending_bits = 0;
                pending_ones = 0;
            }
        }
    }

    if std::ptr::eq(node, root) {
        return Ok(());
    }
    // The remaining, unterminated bits must be a strict prefix of the EOS
    // code (all-ones) and fewer than a full octet.
    if pending_bits > 7 || pending_bits != pending_ones {
        return Err(DecoderError::InvalidPadding);
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    fn decode(bytes: &[u8]) -> Result<Vec<u8>, DecoderError> {
        let mut dst = Vec::new();
        super::decode(bytes, &mut dst)?;
        Ok(dst)
    }

    #[test]
    fn decodes_www_example_com() {
        let src = [
            0xf1, 0xe3, 0xc2, 0xe5, 0xf2, 0x3a, 0x6b, 0xa0, 0xab, 0x90, 0xf4, 0xff,
        ];
        assert_eq!(decode(&src).unwrap(), b"www.example.com");
    }

    #[test]
    fn decodes_method_name() {
        // ":method" Huffman-encoded, from RFC 7541 C.4.1.
        let src = [0xb9, 0x49, 0x53, 0x39, 0xe4];
        assert_eq!(decode(&src).unwrap(), b":method");
    }

    #[test]
    fn empty_input_decodes_to_empty_string() {
        assert_eq!(decode(&[]).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn rejects_padding_longer_than_seven_bits() {
        // Two all-ones octets: 16 trailing 1-bits can't be valid padding.
        let src = [0b11111111, 0b11111111];
        assert_eq!(decode(&src), Err(DecoderError::InvalidPadding));
    }

    #[test]
    fn rejects_padding_not_made_of_ones() {
        // 'a' (00011, 5 bits) followed by three zero bits: not a prefix of EOS.
        let src = [0b00011000];
        assert_eq!(decode(&src), Err(DecoderError::InvalidPadding));
    }

    #[test]
    fn rejects_eos_in_stream() {
        // EOS is 30 ones; pad the rest of the last byte with ones too so
        // only the EOS-in-stream condition can trigger.
        let src = [0xff, 0xff, 0xff, 0xff];
        assert_eq!(decode(&src), Err(DecoderError::EosInStream));
    }
}
