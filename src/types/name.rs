use crate::codec::Codec;
use crate::error::{Error, Result};
use std::borrow::Cow;
use std::fmt;

macro_rules! quote {
    ($x: expr) => {
        format!("\"{}\"", $x.replace(r"\", r"\\").replace("\"", "\\\""))
    };
}

/// A mailbox name as it appears in a `LIST` or `LSUB` response.
///
/// The name is held in its wire form; [`decoded`](Name::decoded) turns it into text that can be
/// shown to a user, and [`Name::from_decoded`] goes the other way for names typed by one.
#[derive(Clone, Debug, Hash, Eq, PartialEq)]
pub struct Name<'a> {
    pub(crate) delimiter: Option<Cow<'a, str>>,
    pub(crate) name: Cow<'a, str>,
}

impl<'a> Name<'a> {
    /// Wrap a wire-format name and the hierarchy delimiter the server reported for it.
    pub fn new<N, D>(name: N, delimiter: Option<D>) -> Self
    where
        N: Into<Cow<'a, str>>,
        D: Into<Cow<'a, str>>,
    {
        Name {
            delimiter: delimiter.map(Into::into),
            name: name.into(),
        }
    }

    /// Build a name from user-facing text by encoding it with the default [`Codec`].
    pub fn from_decoded<D>(text: &str, delimiter: Option<D>) -> Self
    where
        D: Into<Cow<'a, str>>,
    {
        Self::from_decoded_with(&Codec::default(), text, delimiter)
    }

    /// Like [`from_decoded`](Name::from_decoded), with an explicitly configured codec.
    pub fn from_decoded_with<D>(codec: &Codec, text: &str, delimiter: Option<D>) -> Self
    where
        D: Into<Cow<'a, str>>,
    {
        Name {
            delimiter: delimiter.map(Into::into),
            name: Cow::Owned(codec.encode(text)),
        }
    }

    /// The name exactly as it travels on the wire.
    pub fn wire(&self) -> &str {
        &self.name
    }

    /// The hierarchy delimiter is a character used to delimit levels of hierarchy in a mailbox
    /// name. `None` means that no hierarchy exists; the name is a "flat" name.
    pub fn delimiter(&self) -> Option<&str> {
        self.delimiter.as_deref()
    }

    /// The human-readable name, decoded with the default [`Codec`].
    pub fn decoded(&self) -> String {
        Codec::default().decode(&self.name)
    }

    /// The human-readable name, decoded with `codec`.
    pub fn decoded_with(&self, codec: &Codec) -> String {
        codec.decode(&self.name)
    }

    /// The decoded name split into its hierarchy levels, outermost first.
    ///
    /// A flat name, or one with an empty delimiter, yields a single level.
    pub fn hierarchy(&self) -> Vec<String> {
        let decoded = self.decoded();
        match self.delimiter() {
            Some(d) if !d.is_empty() => decoded.split(d).map(String::from).collect(),
            _ => vec![decoded],
        }
    }

    /// The wire name as an IMAP quoted string, ready to be used as a command argument.
    ///
    /// A quoted string cannot carry CR or LF, so a name containing either is rejected with
    /// [`Error::Validate`].
    pub fn quoted(&self) -> Result<String> {
        let quoted = quote!(self.name);
        if let Some(c) = quoted.chars().find(|&c| c == '\r' || c == '\n') {
            return Err(Error::Validate(c));
        }
        Ok(quoted)
    }

    /// Detach this name from any borrowed buffer.
    pub fn into_owned(self) -> Name<'static> {
        Name {
            delimiter: self.delimiter.map(|d| Cow::Owned(d.into_owned())),
            name: Cow::Owned(self.name.into_owned()),
        }
    }
}

impl fmt::Display for Name<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.decoded())
    }
}
