use std::path::PathBuf;
use std::time::SystemTime;

use chrono::{DateTime, Local};

use crate::attributes::EntryAttributes;

#[derive(Debug, Clone)]
pub struct FileEntry {
    pub name: String,
    pub path: PathBuf,
    pub size: u64,
    /// `None` where the platform cannot report a modification time.
    pub modified: Option<SystemTime>,
    pub attributes: EntryAttributes,
}

#[derive(Debug, Clone)]
pub struct DirectoryEntry {
    pub name: String,
    pub path: PathBuf,
    /// Number of immediate children, files and directories alike.
    pub item_count: u64,
    pub attributes: EntryAttributes,
}

/// The file with the earliest modification time found under a root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OldestFile {
    pub name: String,
    pub path: PathBuf,
    pub modified: SystemTime,
}

impl OldestFile {
    pub fn modified_local(&self) -> DateTime<Local> {
        self.modified.into()
    }

    /// Local time in day-first form, e.g. `07.03.2021 14:05:09`.
    pub fn display_timestamp(&self) -> String {
        self.modified_local().format("%d.%m.%Y %H:%M:%S").to_string()
    }
}
