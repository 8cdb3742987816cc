use super::{classify, Class};

/// A maximal stretch of a decoded name that shares one wire representation.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum Run<'a> {
    /// Printable ASCII without `&`, written to the wire unchanged.
    Literal(&'a str),
    /// Text that must be wrapped in a shift segment. A `&` is always a run of its own.
    Shift(&'a str),
}

impl<'a> Run<'a> {
    /// The slice of the decoded name covered by this run.
    pub fn as_str(&self) -> &'a str {
        match *self {
            Run::Literal(s) | Run::Shift(s) => s,
        }
    }
}

/// Iterator over the [`Run`]s of a decoded name, in order.
///
/// Concatenating the yielded runs gives back the original text.
#[derive(Clone, Debug)]
pub struct Runs<'a> {
    rest: &'a str,
}

impl<'a> Runs<'a> {
    /// Partition `text` into runs.
    pub fn new(text: &'a str) -> Self {
        Runs { rest: text }
    }
}

impl<'a> Iterator for Runs<'a> {
    type Item = Run<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.rest.chars().next()?;
        let class = classify(first);

        let end = if class == Class::ShiftIntroducer {
            first.len_utf8()
        } else {
            self.rest
                .char_indices()
                .find(|&(_, c)| classify(c) != class)
                .map(|(i, _)| i)
                .unwrap_or(self.rest.len())
        };

        let (run, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(if class.is_shifted() {
            Run::Shift(run)
        } else {
            Run::Literal(run)
        })
    }
}
