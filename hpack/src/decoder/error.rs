use std::{error, fmt};

use hpack_huffman::DecoderError as HuffmanError;

/// An error produced while decoding a header field.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum DecoderError {
    /// The buffer ended mid-field, mid-integer, or mid-string.
    Truncated,

    /// A variable-length integer's continuation octets exceeded the
    /// implementation's bound before terminating.
    IntegerOverflow,

    /// An index was `0` in an indexed form, or pointed beyond the combined
    /// static+dynamic table.
    InvalidIndex,

    /// A Dynamic Table Size Update requested a `max_size` greater than
    /// `settings_max_size`.
    TableSizeExceeded,

    /// A Dynamic Table Size Update appeared after a header field had
    /// already been decoded in this block.
    TableUpdateMisplaced,

    /// A literal header field decoded to an empty name.
    EmptyName,

    /// A Huffman-coded string failed to decode.
    Huffman(HuffmanError),
}

impl fmt::Display for DecoderError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Truncated => write!(fmt, "buffer ended before the field was complete"),
            Self::IntegerOverflow => write!(fmt, "variable-length integer exceeded the implementation bound"),
            Self::InvalidIndex => write!(fmt, "index is zero or beyond the indexing table"),
            Self::TableSizeExceeded => {
                write!(fmt, "requested dynamic table size exceeds settings_max_size")
            }
            Self::TableUpdateMisplaced => {
                write!(fmt, "dynamic table size update appeared after a header field")
            }
            Self::EmptyName => write!(fmt, "literal header field decoded to an empty name"),
            Self::Huffman(err) => write!(fmt, "huffman decode failed: {}", err),
        }
    }
}

impl error::Error for DecoderError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Huffman(err) => Some(err),
            _ => None,
        }
    }
}

impl From<HuffmanError> for DecoderError {
    fn from(err: HuffmanError) -> Self {
        Self::Huffman(err)
    }
}
