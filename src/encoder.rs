//! Turns Unicode text into wire-format mailbox names.

use crate::codec::Dialect;
use crate::transcoder;
use crate::types::{Run, Runs, SHIFT, UNSHIFT};

pub(crate) fn encode(text: &str, dialect: Dialect) -> String {
    let mut out = String::with_capacity(text.len());

    for run in Runs::new(text) {
        match run {
            Run::Literal(s) => out.push_str(s),
            Run::Shift("&") => {
                out.push(SHIFT);
                out.push(UNSHIFT);
            }
            Run::Shift(s) => {
                out.push(SHIFT);
                out.push_str(&transcoder::encode_payload(s, dialect));
                out.push(UNSHIFT);
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enc(text: &str) -> String {
        encode(text, Dialect::Compat)
    }

    #[test]
    fn ascii_is_unchanged() {
        assert_eq!(enc(""), "");
        assert_eq!(enc("INBOX"), "INBOX");
        assert_eq!(enc("Hi Mom -"), "Hi Mom -");
    }

    #[test]
    fn ampersand_escape() {
        assert_eq!(enc("&"), "&-");
        assert_eq!(enc("R&D"), "R&-D");
        assert_eq!(enc("Plus minus & -& &-"), "Plus minus &- -&- &--");
    }

    #[test]
    fn shift_runs() {
        assert_eq!(enc("中文other_test"), "&Ti1lhw-other_test");
        assert_eq!(enc("~peter/mail/日本語"), "~peter/mail/&ZeVnLIqe-");
        assert_eq!(enc("Item 3 is £1."), "Item 3 is &AKM-1.");
        assert_eq!(enc("Hi Mom -☺-!"), "Hi Mom -&Jjo--!");
        assert_eq!(enc("哈哈😄"), "&VMhUyNg93gQ-");
    }

    #[test]
    fn ampersand_splits_shift_run() {
        assert_eq!(enc("中&文"), "&Ti0-&-&ZYc-");
    }

    #[test]
    fn control_characters_are_shifted() {
        assert_eq!(enc("a\tb"), "a&AAk-b");
    }

    #[test]
    fn rfc3501_dialect() {
        assert_eq!(
            encode("~peter/mail/台北/日本語", Dialect::Rfc3501),
            "~peter/mail/&U,BTFw-/&ZeVnLIqe-"
        );
    }
}
