use std::{error, fmt, io};

use crate::table::MaxSizeExceeded;

/// An error produced while encoding a header field.
#[derive(Debug)]
pub enum EncoderError {
    /// The caller referenced an index that doesn't exist in the indexing
    /// table (neither static nor dynamic).
    InvalidIndex,

    /// A requested dynamic table size update exceeds the ceiling set for
    /// this encoder ([RFC 7541 §6.3]).
    ///
    /// [RFC 7541 §6.3]: https://tools.ietf.org/html/rfc7541#section-6.3
    MaxSizeExceeded,

    /// Writing the encoded bytes to the destination buffer failed.
    Io(io::Error),
}

impl fmt::Display for EncoderError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidIndex => write!(fmt, "index does not exist in the indexing table"),
            Self::MaxSizeExceeded => {
                write!(fmt, "requested dynamic table size exceeds the allowed maximum")
            }
            Self::Io(err) => write!(fmt, "failed to write encoded bytes: {}", err),
        }
    }
}

impl error::Error for EncoderError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for EncoderError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<MaxSizeExceeded> for EncoderError {
    fn from(_: MaxSizeExceeded) -> Self {
        Self::MaxSizeExceeded
    }
}
