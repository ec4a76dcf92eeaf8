use std::{error, fmt};

/// Contains error options that can be encountered while performing the decoding
/// operations.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum DecoderError {
    /// The trailing bits left over at the end of the input are not a valid
    /// padding sequence: either there are 8 or more of them, or they are not
    /// a prefix of the EOS code (i.e. not all-ones).
    InvalidPadding,

    /// The EOS symbol was decoded as a regular symbol inside the sequence.
    /// EOS may only ever appear as trailing padding.
    EosInStream,
}

impl fmt::Display for DecoderError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidPadding => write!(fmt, "invalid Huffman padding"),
            Self::EosInStream => write!(fmt, "EOS symbol found inside Huffman sequence"),
        }
    }
}

impl error::Error for DecoderError {}
