//! An implementation of [HPACK] (RFC 7541), the header compression format
//! used by [HTTP/2] and [HTTP/3].
//!
//! The crate is split into the six pieces HPACK itself is built from:
//!
//! * `encoder`'s and `decoder`'s internal `primitives` modules — the
//!   integer and string wire primitives ([5.1.], [5.2.]).
//! * [`hpack_huffman`] (a sibling crate) — the static canonical Huffman
//!   code ([Appendix B]).
//! * [`table`] — the combined static and dynamic indexing table ([2.3.],
//!   [Appendix A]).
//! * [`encoder`] / [`decoder`] — the field-representation codecs ([6.]).
//!
//! An [`Encoder`] and a [`Decoder`] together form one codec context for a
//! single HTTP/2 (or HTTP/3) connection; each side owns its own dynamic
//! table and the two must be driven in matching order to stay in sync.
//!
//! [HPACK]: https://tools.ietf.org/html/rfc7541
//! [HTTP/2]: https://tools.ietf.org/html/rfc7540
//! [HTTP/3]: https://www.rfc-editor.org/rfc/rfc9114
//! [5.1.]: https://tools.ietf.org/html/rfc7541#section-5.1
//! [5.2.]: https://tools.ietf.org/html/rfc7541#section-5.2
//! [Appendix B]: https://tools.ietf.org/html/rfc7541#appendix-B
//! [2.3.]: https://tools.ietf.org/html/rfc7541#section-2.3
//! [Appendix A]: https://tools.ietf.org/html/rfc7541#appendix-A
//! [6.]: https://tools.ietf.org/html/rfc7541#section-6

pub mod decoder;
pub mod encoder;
pub mod table;

pub use decoder::{Decoder, DecoderError, Field, Indexing};
pub use encoder::{Encoder, EncoderError, EncoderInput};
