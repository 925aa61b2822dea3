use std::cmp::Ordering;
use std::fmt;

/// Shorter names first; equal lengths fall back to byte-wise comparison.
///
/// Length is counted in UTF-16 code units, so `ą` is one unit long like `a`.
/// Two names compare equal only when they are byte-identical.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    name_len(a)
        .cmp(&name_len(b))
        .then_with(|| a.as_bytes().cmp(b.as_bytes()))
}

fn name_len(name: &str) -> usize {
    name.encode_utf16().count()
}

/// A name keyed by [`compare_names`], for use in ordered collections.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NameKey(String);

impl NameKey {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Ord for NameKey {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_names(&self.0, &other.0)
    }
}

impl PartialOrd for NameKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for NameKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
