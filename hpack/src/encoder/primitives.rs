//! Encoders for HPACK's two primitive wire types: prefixed integers
//! ([RFC 7541 §5.1]) and length-prefixed, optionally Huffman-coded strings
//! ([RFC 7541 §5.2]).
//!
//! [RFC 7541 §5.1]: https://tools.ietf.org/html/rfc7541#section-5.1
//! [RFC 7541 §5.2]: https://tools.ietf.org/html/rfc7541#section-5.2

use std::io::Write;

use super::EncoderError;

/// Encodes `value` using an N-bit prefix integer representation
/// ([RFC 7541 §5.1]), OR-ing the leading octet's unused high bits with
/// `flags` (the representation's type bits, already shifted into place by
/// the caller).
///
/// [RFC 7541 §5.1]: https://tools.ietf.org/html/rfc7541#section-5.1
pub fn encode_integer<W: Write>(
    value: u32,
    flags: u8,
    prefix_bits: u8,
    mut dst: W,
) -> Result<(), EncoderError> {
    let max_prefix = (1u32 << prefix_bits) - 1;

    if value < max_prefix {
        dst.write_all(&[flags | value as u8])?;
        return Ok(());
    }

    dst.write_all(&[flags | max_prefix as u8])?;
    let mut remainder = value - max_prefix;
    while remainder >= 128 {
        dst.write_all(&[((remainder % 128) as u8) | 0x80])?;
        remainder /= 128;
    }
    dst.write_all(&[remainder as u8])?;
    Ok(())
}

/// Encodes `value` as a length-prefixed string literal ([RFC 7541 §5.2]),
/// Huffman-coding it first when `use_huffman` is set. The `H` bit of the
/// length prefix records which form was used so the decoder can reverse it.
///
/// [RFC 7541 §5.2]: https://tools.ietf.org/html/rfc7541#section-5.2
pub fn encode_string<W: Write>(
    value: &[u8],
    use_huffman: bool,
    mut dst: W,
) -> Result<(), EncoderError> {
    if use_huffman {
        let mut encoded = Vec::with_capacity(hpack_huffman::encoded_len(value));
        hpack_huffman::encode(value, &mut encoded);
        encode_integer(encoded.len() as u32, 0x80, 7, &mut dst)?;
        dst.write_all(&encoded)?;
    } else {
        encode_integer(value.len() as u32, 0x0, 7, &mut dst)?;
        dst.write_all(value)?;
    }
    Ok(())
}
