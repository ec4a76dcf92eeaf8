//! Provides an implementation of the [HPACK] decoder.
//!
//! The decoder is the counterpart of [`crate::encoder::Encoder`]: it reads a
//! header block octet by octet, dispatches on the first octet's bit pattern
//! to determine the field's representation ([6.]), and reconstructs the
//! header list while keeping its own copy of the dynamic table in lockstep
//! with the encoder's.
//!
//! [HPACK]: https://tools.ietf.org/html/rfc7541
//! [6.]: https://tools.ietf.org/html/rfc7541#section-6

mod error;
mod primitives;

pub use error::*;
use primitives::*;

use crate::table::Table;

/// Records how a decoded field relates to the dynamic table, mirroring the
/// indexing directive the encoder attached when it produced the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indexing {
    /// The field was (or should be, on re-encoding) added to the dynamic
    /// table.
    Indexed,

    /// The field must not be added to the dynamic table, but may still be
    /// compressed in later messages.
    WithoutIndexing,

    /// The field must never be added to the dynamic table by any
    /// intermediary; this property is sticky across re-encodes
    /// ([6.2.3.]).
    ///
    /// [6.2.3.]: https://tools.ietf.org/html/rfc7541#section-6.2.3
    NeverIndexed,
}

/// A single decoded header field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: Vec<u8>,
    pub value: Vec<u8>,
    pub indexing: Indexing,
}

/// Decodes HPACK header blocks, maintaining the dynamic table across calls.
#[derive(Debug)]
pub struct Decoder<'a> {
    table: Table<'a>,
}

impl<'a> Decoder<'a> {
    /// Returns a new decoder whose dynamic table is bounded by
    /// `max_dynamic_size`, which also becomes the decoder's
    /// `settings_max_size` ceiling.
    pub fn with_dynamic_size(max_dynamic_size: u32) -> Self {
        Self {
            table: Table::with_dynamic_size(max_dynamic_size),
        }
    }

    /// Returns the current maximum allowed size of the dynamic table.
    pub fn max_dynamic_size(&self) -> u32 {
        self.table.max_dynamic_size()
    }

    /// Returns the number of entries currently in the dynamic table.
    pub fn dynamic_len(&self) -> usize {
        self.table.dynamic_len()
    }

    /// Returns the current total size of the entries in the dynamic table.
    pub fn dynamic_size(&self) -> usize {
        self.table.dynamic_size()
    }

    /// Returns the `(name, value)` entry at the given 1-based combined
    /// index, static or dynamic.
    pub fn get(&self, index: u32) -> Option<(&[u8], &[u8])> {
        self.table.get(index)
    }

    /// Decodes a complete header block into its constituent fields.
    ///
    /// **Example:**
    ///
    /// ```rust
    /// use hpack::Decoder;
    ///
    /// let mut decoder = Decoder::default();
    /// let src = [0x82]; // Indexed Header Field, index 2 (:method: GET)
    /// let fields = decoder.decode(&src).unwrap();
    /// assert_eq!(fields[0].name, b":method");
    /// assert_eq!(fields[0].value, b"GET");
    /// ```
    pub fn decode(&mut self, src: &[u8]) -> Result<Vec<Field>, DecoderError> {
        let mut fields = Vec::new();
        let mut pos = 0;
        let mut header_emitted = false;

        while pos < src.len() {
            let byte = src[pos];
            if byte & 0x80 == 0x80 {
                let (field, consumed) = self.decode_indexed(&src[pos..])?;
                fields.push(field);
                pos += consumed;
                header_emitted = true;
            } else if byte & 0xc0 == 0x40 {
                let (field, consumed) = self.decode_literal(&src[pos..], 6, Indexing::Indexed)?;
                fields.push(field);
                pos += consumed;
                header_emitted = true;
            } else if byte & 0xe0 == 0x20 {
                if header_emitted {
                    return Err(DecoderError::TableUpdateMisplaced);
                }
                pos += self.decode_size_update(&src[pos..])?;
            } else if byte & 0xf0 == 0x10 {
                let (field, consumed) =
                    self.decode_literal(&src[pos..], 4, Indexing::NeverIndexed)?;
                fields.push(field);
                pos += consumed;
                header_emitted = true;
            } else {
                let (field, consumed) =
                    self.decode_literal(&src[pos..], 4, Indexing::WithoutIndexing)?;
                fields.push(field);
                pos += consumed;
                header_emitted = true;
            }
        }

        Ok(fields)
    }

    /// Decodes an Indexed Header Field Representation ([6.1.], figure 5).
    ///
    /// [6.1.]: https://tools.ietf.org/html/rfc7541#section-6.1
    fn decode_indexed(&self, src: &[u8]) -> Result<(Field, usize), DecoderError> {
        let (index, consumed) = decode_integer(src, 7)?;
        if index == 0 {
            return Err(DecoderError::InvalidIndex);
        }
        let (name, value) = self.table.get(index).ok_or(DecoderError::InvalidIndex)?;
        Ok((
            Field {
                name: name.to_vec(),
                value: value.to_vec(),
                indexing: Indexing::Indexed,
            },
            consumed,
        ))
    }

    /// Decodes any of the three literal header field representations
    /// ([6.2.]). `prefix_bits` is `6` for incremental indexing and `4` for
    /// the other two forms; `indexing` is the directive to attach to the
    /// resulting field (and, for `Indexed`, to act on by inserting into the
    /// dynamic table).
    ///
    /// [6.2.]: https://tools.ietf.org/html/rfc7541#section-6.2
    fn decode_literal(
        &mut self,
        src: &[u8],
        prefix_bits: u8,
        indexing: Indexing,
    ) -> Result<(Field, usize), DecoderError> {
        let (index, mut pos) = decode_integer(src, prefix_bits)?;

        let name = if index == 0 {
            let (name, consumed) = decode_string(&src[pos..])?;
            pos += consumed;
            name
        } else {
            self.table.get(index).ok_or(DecoderError::InvalidIndex)?.0.to_vec()
        };

        let (value, consumed) = decode_string(&src[pos..])?;
        pos += consumed;

        if name.is_empty() {
            return Err(DecoderError::EmptyName);
        }

        if indexing == Indexing::Indexed {
            self.table.insert(name.clone(), value.clone());
        }

        Ok((Field { name, value, indexing }, pos))
    }

    /// Decodes a Dynamic Table Size Update directive ([6.3.], figure 12).
    ///
    /// [6.3.]: https://tools.ietf.org/html/rfc7541#section-6.3
    fn decode_size_update(&mut self, src: &[u8]) -> Result<usize, DecoderError> {
        let (size, consumed) = decode_integer(src, 5)?;
        self.table
            .update_max_dynamic_size(size)
            .map_err(|_| DecoderError::TableSizeExceeded)?;
        Ok(consumed)
    }
}

impl<'a> Default for Decoder<'a> {
    fn default() -> Self {
        Self {
            table: Table::default(),
        }
    }
}
