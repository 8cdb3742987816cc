//! This module contains types used to describe mailbox names on both sides of the codec.

/// The character that introduces a shift segment in a wire-format name.
pub const SHIFT: char = '&';

/// The character that terminates a shift segment in a wire-format name.
pub const UNSHIFT: char = '-';

/// How a single character of a decoded name must be represented on the wire.
///
/// From section [5.1.3 of RFC 3501](https://tools.ietf.org/html/rfc3501#section-5.1.3): in
/// modified UTF-7, printable US-ASCII characters, except for `&`, represent themselves; that is,
/// characters with octet values `0x20`-`0x25` and `0x27`-`0x7e`. The character `&` (`0x26`) is
/// represented by the two-octet sequence `&-`. All other characters (octet values `0x00`-`0x1f`
/// and `0x7f`-`0xff`) are represented in modified BASE64.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum Class {
    /// Printable ASCII other than `&`; copied to the wire as is.
    Literal,
    /// The `&` character, which always travels as the `&-` escape.
    ShiftIntroducer,
    /// Anything else, including ASCII control characters.
    NonAscii,
}

impl Class {
    /// Whether characters of this class need a shift segment on the wire.
    pub fn is_shifted(self) -> bool {
        !matches!(self, Class::Literal)
    }
}

/// Classify a single character of a decoded name.
#[inline]
pub fn classify(c: char) -> Class {
    match c {
        SHIFT => Class::ShiftIntroducer,
        '\x20'..='\x7e' => Class::Literal,
        _ => Class::NonAscii,
    }
}

mod run;
pub use self::run::{Run, Runs};

mod name;
pub use self::name::Name;
