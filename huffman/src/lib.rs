//! An implementation of the static [canonical Huffman] code used by [HPACK]
//! (RFC 7541, Appendix B) for compressing header name and value strings.
//!
//! The code is fixed: 256 octet symbols plus the `EOS` sentinel, each with a
//! bit length between 5 and 30. [`encode`] turns a byte string into its
//! compressed form; [`decode`] reverses the process and rejects any stream
//! whose trailing padding isn't a short, all-ones prefix of `EOS`, or that
//! contains `EOS` as a real symbol.
//!
//! [HPACK]: https://tools.ietf.org/html/rfc7541
//! [canonical Huffman]: https://en.wikipedia.org/wiki/Canonical_Huffman_code

pub mod decoder;
pub mod encoder;
pub mod table;

pub use decoder::{decode, DecoderError};
pub use encoder::{encode, encoded_len};
