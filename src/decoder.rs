//! Turns wire-format mailbox names back into Unicode text.

use nom::branch::alt;
use nom::bytes::complete::{take_till, take_till1, take_until};
use nom::character::complete::char;
use nom::combinator::{consumed, map, value};
use nom::sequence::delimited;
use nom::IResult;

use crate::codec::{Dialect, SegmentEnd};
use crate::transcoder;
use crate::types::{SHIFT, UNSHIFT};

/// One piece of a wire-format name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Token<'a> {
    /// Text copied through as is.
    Literal(&'a str),
    /// The `&-` escape.
    Ampersand,
    /// A complete `&payload-` segment; `raw` includes the delimiters.
    Segment { raw: &'a str, payload: &'a str },
    /// An `&` with no matching `-`.
    Unterminated,
}

fn literal(input: &str) -> IResult<&str, Token<'_>> {
    map(take_till1(|c: char| c == SHIFT), Token::Literal)(input)
}

fn segment<'a>(input: &'a str, end: SegmentEnd) -> IResult<&'a str, Token<'a>> {
    let payload = |i: &'a str| -> IResult<&'a str, &'a str> {
        match end {
            SegmentEnd::NextDash => take_until("-")(i),
            SegmentEnd::BeforeNextShift => take_till(|c: char| c == SHIFT || c == UNSHIFT)(i),
        }
    };

    map(
        consumed(delimited(char(SHIFT), payload, char(UNSHIFT))),
        |(raw, payload): (&'a str, &'a str)| {
            if payload.is_empty() {
                Token::Ampersand
            } else {
                Token::Segment { raw, payload }
            }
        },
    )(input)
}

fn token<'a>(input: &'a str, end: SegmentEnd) -> IResult<&'a str, Token<'a>> {
    alt((
        literal,
        |i: &'a str| segment(i, end),
        value(Token::Unterminated, char(SHIFT)),
    ))(input)
}

pub(crate) fn decode(wire: &str, dialect: Dialect, end: SegmentEnd) -> String {
    let mut out = String::with_capacity(wire.len());
    let mut rest = wire;

    while !rest.is_empty() {
        let (next, piece) = match token(rest, end) {
            Ok(t) => t,
            Err(_) => {
                out.push_str(rest);
                break;
            }
        };

        match piece {
            Token::Literal(s) => out.push_str(s),
            Token::Ampersand => out.push(SHIFT),
            Token::Segment { raw, payload } => {
                match transcoder::decode_payload(payload, dialect) {
                    Ok(text) => out.push_str(&text),
                    Err(e) => {
                        tracing::debug!(
                            segment = raw,
                            error = %e,
                            "keeping undecodable shift segment"
                        );
                        out.push_str(raw);
                    }
                }
            }
            Token::Unterminated => {
                tracing::debug!(
                    offset = wire.len() - rest.len(),
                    "keeping unterminated shift character"
                );
                out.push(SHIFT);
            }
        }
        rest = next;
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(mut input: &str, end: SegmentEnd) -> Vec<Token<'_>> {
        let mut out = Vec::new();
        while !input.is_empty() {
            let (rest, t) = token(input, end).unwrap();
            out.push(t);
            input = rest;
        }
        out
    }

    fn dec(wire: &str) -> String {
        decode(wire, Dialect::Compat, SegmentEnd::NextDash)
    }

    #[test]
    fn tokenize() {
        assert_eq!(
            tokens("a&-b&Ti1lhw-c&", SegmentEnd::NextDash),
            vec![
                Token::Literal("a"),
                Token::Ampersand,
                Token::Literal("b"),
                Token::Segment {
                    raw: "&Ti1lhw-",
                    payload: "Ti1lhw"
                },
                Token::Literal("c"),
                Token::Unterminated,
            ]
        );
    }

    #[test]
    fn next_dash_spans_ampersands() {
        assert_eq!(
            tokens("&ab&cd-", SegmentEnd::NextDash),
            vec![Token::Segment {
                raw: "&ab&cd-",
                payload: "ab&cd"
            }]
        );
        assert_eq!(
            tokens("&ab&cd-", SegmentEnd::BeforeNextShift),
            vec![
                Token::Unterminated,
                Token::Literal("ab"),
                Token::Segment {
                    raw: "&cd-",
                    payload: "cd"
                }
            ]
        );
    }

    #[test]
    fn passthrough() {
        assert_eq!(dec(""), "");
        assert_eq!(dec("INBOX"), "INBOX");
        assert_eq!(dec("Hi Mom -"), "Hi Mom -");
    }

    #[test]
    fn segments() {
        assert_eq!(dec("&Ti1lhw-other_test"), "中文other_test");
        assert_eq!(dec("Item 3 is &AKM-1."), "Item 3 is £1.");
        assert_eq!(dec("Hi Mom -&Jjo--!"), "Hi Mom -☺-!");
        assert_eq!(dec("Plus minus &- -&- &--"), "Plus minus & -& &-");
    }

    #[test]
    fn malformed_segment_is_kept() {
        assert_eq!(dec("&invalid!!-"), "&invalid!!-");
        assert_eq!(dec("x&AGEA-y&AGE-"), "x&AGEA-ya");
        assert_eq!(dec("&2D0-"), "&2D0-");
    }

    #[test]
    fn leftover_bits_still_decode() {
        assert_eq!(dec("&AGF-"), "a");
        assert_eq!(dec("&Ti1lhx-other_test"), "中文other_test");
    }

    #[test]
    fn unterminated_resumes_after_ampersand() {
        assert_eq!(dec("a&b"), "a&b");
        assert_eq!(dec("&"), "&");
        assert_eq!(dec("&&-"), "&&-");
    }

    #[test]
    fn before_next_shift_policy() {
        let d = |w| decode(w, Dialect::Compat, SegmentEnd::BeforeNextShift);
        assert_eq!(d("&abc&Ti1lhw-"), "&abc中文");
        assert_eq!(d("&Ti1lhw-other_test"), "中文other_test");
        assert_eq!(d("a&b"), "a&b");
        assert_eq!(d("&&-"), "&&");
    }
}
