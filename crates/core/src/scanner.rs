use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::attributes::EntryAttributes;
use crate::error::{Result, ScanError};
use crate::model::{DirectoryEntry, FileEntry, OldestFile};
use crate::options::ScanOptions;

/// Immediate children of one directory, split by kind.
#[derive(Debug, Default)]
pub struct DirListing {
    pub files: Vec<FileEntry>,
    pub dirs: Vec<ChildDir>,
    /// Children whose metadata could not be read.
    pub unreadable: Vec<ScanError>,
}

/// A subdirectory seen in a listing whose item count has not been read yet.
#[derive(Debug, Clone)]
pub struct ChildDir {
    pub name: String,
    pub path: PathBuf,
    pub attributes: EntryAttributes,
}

impl ChildDir {
    pub fn describe(&self) -> Result<DirectoryEntry> {
        Ok(DirectoryEntry {
            name: self.name.clone(),
            path: self.path.clone(),
            item_count: count_items(&self.path)?,
            attributes: self.attributes,
        })
    }
}

/// Number of immediate children of `dir`.
pub fn count_items(dir: &Path) -> Result<u64> {
    let rd = fs::read_dir(dir).map_err(|e| ScanError::access(dir, e))?;
    let mut n = 0u64;
    for entry in rd {
        entry.map_err(|e| ScanError::access(dir, e))?;
        n += 1;
    }
    Ok(n)
}

/// Lists the immediate children of `dir`.
///
/// Anything that is not a directory (after following links when
/// `follow_links` is set) is listed as a file. Entries whose metadata cannot
/// be read end up in [`DirListing::unreadable`]; failing to open or iterate
/// `dir` itself is an [`ScanError::Access`].
pub fn list_dir(dir: &Path, opts: &ScanOptions) -> Result<DirListing> {
    let rd = fs::read_dir(dir).map_err(|e| ScanError::access(dir, e))?;
    let mut listing = DirListing::default();

    for entry_res in rd {
        let entry = entry_res.map_err(|e| ScanError::access(dir, e))?;
        let name = entry.file_name().to_string_lossy().into_owned();
        let path = entry.path();

        let md = if opts.follow_links {
            // dangling links fall back to the link itself
            fs::metadata(&path).or_else(|_| entry.metadata())
        } else {
            entry.metadata()
        };
        let md = match md {
            Ok(md) => md,
            Err(e) => {
                warn!("[list] metadata({:?}) failed: {e}", path);
                listing.unreadable.push(ScanError::access(path, e));
                continue;
            }
        };

        let attributes = EntryAttributes::from_metadata(&name, &md);
        if md.is_dir() {
            listing.dirs.push(ChildDir {
                name,
                path,
                attributes,
            });
        } else {
            listing.files.push(FileEntry {
                name,
                path,
                size: md.len(),
                modified: md.modified().ok(),
                attributes,
            });
        }
    }

    if opts.sort_entries {
        listing.files.sort_by(|a, b| a.name.cmp(&b.name));
        listing.dirs.sort_by(|a, b| a.name.cmp(&b.name));
    }

    debug!(
        "[list] {:?}: {} files, {} dirs, {} unreadable",
        dir,
        listing.files.len(),
        listing.dirs.len(),
        listing.unreadable.len()
    );
    Ok(listing)
}

/// Scans every file at every depth under `root` and returns the one with the
/// earliest modification time.
///
/// Unreadable subtrees are skipped and the scan carries on. Returns `None`
/// when no file was found.
pub fn find_oldest(root: &Path, opts: &ScanOptions) -> Option<OldestFile> {
    let mut walker = WalkDir::new(root).min_depth(1).follow_links(opts.follow_links);
    if opts.sort_entries {
        walker = walker.sort_by_file_name();
    }

    let files = walker
        .into_iter()
        .filter_map(|res| match res {
            Ok(ent) => Some(ent),
            Err(e) => {
                warn!("[oldest] skipping: {e}");
                None
            }
        })
        .filter(|ent| !ent.file_type().is_dir())
        .filter_map(|ent| {
            let md = match ent.metadata() {
                Ok(md) => md,
                Err(e) => {
                    warn!("[oldest] metadata({:?}) failed: {e}", ent.path());
                    return None;
                }
            };
            let name = ent.file_name().to_string_lossy().into_owned();
            Some(FileEntry {
                attributes: EntryAttributes::from_metadata(&name, &md),
                name,
                path: ent.into_path(),
                size: md.len(),
                modified: md.modified().ok(),
            })
        });

    pick_oldest(files)
}

/// Picks the file with the strictly smallest timestamp; on ties the first one
/// seen is kept. Files without a timestamp are ignored.
pub fn pick_oldest<I>(files: I) -> Option<OldestFile>
where
    I: IntoIterator<Item = FileEntry>,
{
    let mut oldest: Option<OldestFile> = None;
    for f in files {
        let Some(modified) = f.modified else {
            continue;
        };
        if oldest.as_ref().map_or(true, |o| modified < o.modified) {
            oldest = Some(OldestFile {
                name: f.name,
                path: f.path,
                modified,
            });
        }
    }
    oldest
}
