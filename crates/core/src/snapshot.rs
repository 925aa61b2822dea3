use std::collections::btree_map::{self, BTreeMap};
use std::path::Path;

use tracing::debug;

use crate::error::{Result, ScanError};
use crate::options::ScanOptions;
use crate::order::NameKey;
use crate::scanner::list_dir;

/// Immediate children of one directory mapped to their size (files) or item
/// count (directories), ordered by [`crate::order::compare_names`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderedSnapshot {
    entries: BTreeMap<NameKey, u64>,
}

impl OrderedSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `name`. A name already present is rejected and the existing
    /// value is left untouched.
    pub fn insert(&mut self, name: impl Into<String>, value: u64) -> Result<()> {
        match self.entries.entry(NameKey::new(name)) {
            btree_map::Entry::Occupied(e) => Err(ScanError::DuplicateKey(e.key().to_string())),
            btree_map::Entry::Vacant(e) => {
                e.insert(value);
                Ok(())
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<u64> {
        self.entries.get(&NameKey::new(name)).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

/// Builds the snapshot of `dir`'s immediate children.
pub fn build_snapshot(dir: &Path, opts: &ScanOptions) -> Result<OrderedSnapshot> {
    let mut listing = list_dir(dir, opts)?;
    if !listing.unreadable.is_empty() {
        return Err(listing.unreadable.swap_remove(0));
    }
    let mut snapshot = OrderedSnapshot::new();
    for f in listing.files {
        snapshot.insert(f.name, f.size)?;
    }
    for child in &listing.dirs {
        let sub = child.describe()?;
        snapshot.insert(sub.name, sub.item_count)?;
    }
    debug!("[snapshot] {:?}: {} entries", dir, snapshot.len());
    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{create_dir, write};

    #[test]
    fn length_then_ordinal_order() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path();
        write(root.join("a"), vec![0u8; 10]).unwrap();
        write(root.join("bb"), vec![0u8; 20]).unwrap();
        create_dir(root.join("c")).unwrap();

        let snap = build_snapshot(root, &ScanOptions::default()).unwrap();
        let pairs: Vec<(&str, u64)> = snap.iter().collect();
        assert_eq!(pairs, [("a", 10), ("c", 0), ("bb", 20)]);
    }

    #[test]
    fn duplicate_insert_is_rejected() {
        let mut snap = OrderedSnapshot::new();
        snap.insert("report", 1).unwrap();
        let err = snap.insert("report", 2).unwrap_err();
        assert!(matches!(err, ScanError::DuplicateKey(ref k) if k == "report"));
        assert_eq!(snap.get("report"), Some(1));
        assert_eq!(snap.len(), 1);
    }

    #[test]
    fn directory_values_are_item_counts() {
        let tmp = tempfile::tempdir().unwrap();
        let sub = tmp.path().join("sub");
        create_dir(&sub).unwrap();
        write(sub.join("one"), b"1").unwrap();
        write(sub.join("two"), b"22").unwrap();
        create_dir(sub.join("nested")).unwrap();

        let snap = build_snapshot(tmp.path(), &ScanOptions::default()).unwrap();
        assert_eq!(snap.get("sub"), Some(3));
        assert_eq!(snap.iter().collect::<Vec<_>>(), [("sub", 3)]);
    }

    #[test]
    fn missing_dir_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let err = build_snapshot(&tmp.path().join("gone"), &ScanOptions::default()).unwrap_err();
        assert!(matches!(err, ScanError::Access { .. }));
    }
}
