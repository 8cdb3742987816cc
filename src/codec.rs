//! Codec configuration and the crate's top-level entry points.

use crate::error::Result;
use crate::{decoder, encoder, transcoder};

/// Which standard base64 character the `,` of a shift segment stands for.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub enum Dialect {
    /// `,` stands for `+`. This is what existing folder listings produced by this codec use.
    #[default]
    Compat,
    /// `,` stands for `/`, as in section
    /// [5.1.3 of RFC 3501](https://tools.ietf.org/html/rfc3501#section-5.1.3).
    Rfc3501,
}

impl Dialect {
    /// The standard base64 character that is written as `,` on the wire.
    pub fn replaced(self) -> char {
        match self {
            Dialect::Compat => '+',
            Dialect::Rfc3501 => '/',
        }
    }
}

/// Where the decoder looks for the `-` that closes a shift segment.
///
/// Both settings agree on every wire name this crate produces. They only differ when an `&` has
/// no closing `-` before the next `&`.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub enum SegmentEnd {
    /// The segment runs to the next `-` anywhere after the `&`. An `&` with no `-` after it is
    /// kept as a literal `&` and scanning resumes at the following character.
    #[default]
    NextDash,
    /// The segment must be closed before the next `&`. Otherwise the `&` is kept as a literal
    /// and scanning resumes at the following character.
    BeforeNextShift,
}

/// A configured modified UTF-7 codec.
///
/// `Codec` is a plain value: it holds no buffers or state, so one instance can be shared across
/// any number of threads.
///
/// ```
/// use imap_utf7::{CodecBuilder, Dialect};
///
/// let codec = CodecBuilder::new().dialect(Dialect::Rfc3501).build();
/// assert_eq!(codec.decode("~peter/mail/&U,BTFw-/&ZeVnLIqe-"), "~peter/mail/台北/日本語");
/// ```
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub struct Codec {
    dialect: Dialect,
    segment_end: SegmentEnd,
}

impl Codec {
    /// The payload alphabet this codec uses.
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// How this codec finds the end of a shift segment.
    pub fn segment_end(&self) -> SegmentEnd {
        self.segment_end
    }

    /// Decode a wire-format name. Never fails; malformed shift segments are kept verbatim.
    pub fn decode(&self, wire: &str) -> String {
        decoder::decode(wire, self.dialect, self.segment_end)
    }

    /// Encode a name for the wire.
    pub fn encode(&self, text: &str) -> String {
        encoder::encode(text, self.dialect)
    }

    /// Decode the payload of a single shift segment, i.e. the text between `&` and `-`.
    ///
    /// Unlike [`decode`](Codec::decode) this reports why a payload could not be decoded.
    pub fn decode_segment(&self, payload: &str) -> Result<String> {
        transcoder::decode_payload(payload, self.dialect)
    }

    /// Encode a run of text as a shift segment payload, without the surrounding `&` and `-`.
    pub fn encode_segment(&self, run: &str) -> String {
        transcoder::encode_payload(run, self.dialect)
    }
}

/// A convenience builder for [`Codec`] values.
///
/// ```
/// use imap_utf7::{CodecBuilder, SegmentEnd};
///
/// let codec = CodecBuilder::new()
///     .segment_end(SegmentEnd::BeforeNextShift)
///     .build();
/// assert_eq!(codec.decode("&abc&Ti1lhw-"), "&abc中文");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CodecBuilder {
    dialect: Dialect,
    segment_end: SegmentEnd,
}

impl CodecBuilder {
    /// Make a new `CodecBuilder` with the default settings.
    pub fn new() -> Self {
        CodecBuilder::default()
    }

    /// Use the given payload alphabet.
    pub fn dialect(&mut self, dialect: Dialect) -> &mut Self {
        self.dialect = dialect;
        self
    }

    /// Use the given rule to find the end of shift segments when decoding.
    pub fn segment_end(&mut self, segment_end: SegmentEnd) -> &mut Self {
        self.segment_end = segment_end;
        self
    }

    /// Return the configured [`Codec`].
    pub fn build(&self) -> Codec {
        Codec {
            dialect: self.dialect,
            segment_end: self.segment_end,
        }
    }
}

/// Decode a wire-format mailbox name into Unicode text.
///
/// This never fails. A shift segment that cannot be decoded is kept in the output exactly as it
/// appeared on the wire, and an `&` without a closing `-` is kept as a literal `&`.
///
/// ```
/// assert_eq!(imap_utf7::decode("&Ti1lhw-other_test"), "中文other_test");
/// assert_eq!(imap_utf7::decode("&-"), "&");
/// assert_eq!(imap_utf7::decode("&invalid!!-"), "&invalid!!-");
/// ```
pub fn decode(wire: &str) -> String {
    Codec::default().decode(wire)
}

/// Encode Unicode text as a wire-format mailbox name.
///
/// ```
/// assert_eq!(imap_utf7::encode("中文other_test"), "&Ti1lhw-other_test");
/// assert_eq!(imap_utf7::encode("&"), "&-");
/// ```
pub fn encode(text: &str) -> String {
    Codec::default().encode(text)
}

/// Decode `wire` unless the session has negotiated UTF-8 mailbox names, in which case it is
/// already plain text and is returned as is.
pub fn maybe_decode(wire: String, is_utf8: bool) -> String {
    if is_utf8 {
        wire
    } else {
        decode(&wire)
    }
}

/// Decode every name of a mailbox listing.
///
/// Each entry is decoded on its own; an entry that cannot be decoded comes back as its wire text
/// and does not affect the others.
pub fn decode_all<I>(names: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let codec = Codec::default();
    names.into_iter().map(|n| codec.decode(n.as_ref())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults() {
        let codec = CodecBuilder::new().build();
        assert_eq!(codec, Codec::default());
        assert_eq!(codec.dialect(), Dialect::Compat);
        assert_eq!(codec.segment_end(), SegmentEnd::NextDash);
    }

    #[test]
    fn builder_settings() {
        let codec = CodecBuilder::new()
            .dialect(Dialect::Rfc3501)
            .segment_end(SegmentEnd::BeforeNextShift)
            .build();
        assert_eq!(codec.dialect(), Dialect::Rfc3501);
        assert_eq!(codec.segment_end(), SegmentEnd::BeforeNextShift);
    }

    #[test]
    fn codec_is_shareable() {
        fn assert_send_sync<T: Send + Sync + Copy>() {}
        assert_send_sync::<Codec>();
    }

    #[test]
    fn utf8_names_are_not_decoded() {
        assert_eq!(maybe_decode("&Ti1lhw-".to_string(), true), "&Ti1lhw-");
        assert_eq!(maybe_decode("&Ti1lhw-".to_string(), false), "中文");
    }

    #[test]
    fn listing_with_a_bad_entry() {
        let listing = ["INBOX", "&invalid!!-", "&Ti1lhw-other_test"];
        assert_eq!(
            decode_all(listing),
            vec!["INBOX", "&invalid!!-", "中文other_test"]
        );
        assert!(decode_all(Vec::<String>::new()).is_empty());
    }

    #[test]
    fn segment_helpers() {
        let codec = Codec::default();
        assert_eq!(codec.encode_segment("中文"), "Ti1lhw");
        assert_eq!(codec.decode_segment("Ti1lhw").unwrap(), "中文");
        assert!(codec.decode_segment("invalid!!").is_err());
    }
}
