//! Enable the test_helpers feature to expose known mailbox name fixtures and assertion helpers
//! for testing your code that uses the imap-utf7 crate
//!
//! To use add a dev-dependency on the crate adding the feature "test_helpers"
//! e.g.
//!
//! ```toml
//! [dependencies]
//! imap-utf7 = { version = "0.1" }
//!
//! [dev-dependencies]
//! # mirror the same configuration your dependencies and add test_helpers
//! imap-utf7 = { version = "0.1", features = ["test_helpers"] }
//! ```
//!

use crate::{decode, encode};

/// Pairs of `(wire, decoded)` names that encode and decode into each other with the default
/// [`Codec`](crate::Codec).
pub const NAMES: &[(&str, &str)] = &[
    ("INBOX", "INBOX"),
    ("&-", "&"),
    ("&Ti1lhw-other_test", "中文other_test"),
    ("~peter/mail/&ZeVnLIqe-", "~peter/mail/日本語"),
    ("Item 3 is &AKM-1.", "Item 3 is £1."),
    ("Hi Mom -&Jjo--!", "Hi Mom -☺-!"),
    ("Plus minus &- -&- &--", "Plus minus & -& &-"),
    ("&VMhUyNg93gQ-", "哈哈😄"),
    ("R&-D/&U/BTFw-", "R&D/台北"),
];

/// Wire names with a shift segment that cannot be decoded. Each one decodes to itself.
pub const MALFORMED: &[&str] = &["&invalid!!-", "&A-", "&AGEA-", "&2D0-", "&3gQ-"];

/// Assert that `text` survives a trip to the wire and back, and return its wire form.
///
/// ```
/// let wire = imap_utf7::testing::assert_round_trip("Entwürfe");
/// assert_eq!(wire, "Entw&APw-rfe");
/// ```
pub fn assert_round_trip(text: &str) -> String {
    let wire = encode(text);
    assert_eq!(decode(&wire), text, "while decoding {:?}", wire);
    wire
}
