//! Modified UTF-7 codec for IMAP mailbox names.
//!
//! IMAP servers transmit mailbox names as printable ASCII. Anything else, and the `&` character
//! itself, travels inside *shift segments*: an `&`, the big-endian UTF-16 form of the text in a
//! modified base64, and a closing `-`. This crate converts between that wire form and ordinary
//! Rust strings.
//!
//! # Usage
//!
//! ```
//! // a name as returned by `LIST`
//! let wire = "&Ti1lhw-other_test";
//! let name = imap_utf7::decode(wire);
//! assert_eq!(name, "中文other_test");
//!
//! // and back, e.g. for `SELECT`
//! assert_eq!(imap_utf7::encode(&name), wire);
//! ```
//!
//! Decoding never fails: a single garbled name in a listing should not keep the others from
//! being shown, so an undecodable shift segment is kept exactly as it was received.
//!
//! ```
//! let names = imap_utf7::decode_all(["INBOX", "&invalid!!-", "&ZeVnLIqe-"]);
//! assert_eq!(names, ["INBOX", "&invalid!!-", "日本語"]);
//! ```
//!
//! Use a [`Codec`] built with [`CodecBuilder`] to pick the [`Dialect`] of the payload alphabet or
//! the [`SegmentEnd`] rule used while decoding.

#![deny(missing_docs)]
#![warn(rust_2018_idioms)]

mod codec;
mod decoder;
mod encoder;
mod transcoder;
mod types;

pub mod error;

pub use crate::codec::{
    decode, decode_all, encode, maybe_decode, Codec, CodecBuilder, Dialect, SegmentEnd,
};
pub use crate::error::{Error, Result};
pub use crate::types::*;

#[cfg(feature = "test_helpers")]
pub mod testing;
