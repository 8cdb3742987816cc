//! IMAP UTF-7 error types.

use std::error::Error as StdError;
use std::fmt;
use std::result;

use base64::DecodeError as Base64Error;

/// A convenience wrapper around `Result` for `imap_utf7::Error`.
pub type Result<T> = result::Result<T, Error>;

/// A set of errors that can occur while decoding a single shift segment, or while preparing a
/// mailbox name for use in a command.
///
/// The decoding errors never escape [`decode`](crate::decode): the decoder falls back to
/// emitting the offending segment verbatim. They are surfaced by
/// [`Codec::decode_segment`](crate::Codec::decode_segment) for callers that want to know.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The payload contains characters outside the modified base64 alphabet, or cannot be
    /// padded to a valid length.
    InvalidBase64(Base64Error),
    /// The payload decoded to an odd number of bytes, which cannot form whole UTF-16 units.
    OddByteLength(usize),
    /// A high surrogate without its low surrogate, or a low surrogate on its own.
    UnpairedSurrogate(u16),
    /// A mailbox name contains a character that cannot appear in a quoted command argument.
    Validate(char),
}

impl From<Base64Error> for Error {
    fn from(err: Base64Error) -> Error {
        Error::InvalidBase64(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Error::InvalidBase64(ref e) => write!(f, "Invalid base64 in shift segment: {}", e),
            Error::OddByteLength(n) => {
                write!(f, "Shift segment decoded to an odd number of bytes ({})", n)
            }
            // print the code unit in hex because it is never a printable character
            Error::UnpairedSurrogate(unit) => {
                write!(f, "Unpaired surrogate in shift segment: {:#06X}", unit)
            }
            // print character in debug form because invalid ones are often whitespaces
            Error::Validate(c) => write!(f, "Invalid character in mailbox name: {:?}", c),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match *self {
            Error::InvalidBase64(ref e) => Some(e),
            _ => None,
        }
    }
}
