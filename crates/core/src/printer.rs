use std::io::{self, Write};
use std::path::Path;

use tracing::{info, warn};

use crate::error::ScanError;
use crate::options::ScanOptions;
use crate::progress::TreeStats;
use crate::scanner::list_dir;

/// Prefix written before a listing failure.
pub const LISTING_ERROR_PREFIX: &str = "Błąd przy wyświetlaniu zawartości: ";

fn indent(depth: usize) -> String {
    " ".repeat(depth * 2)
}

/// Depth-first printer of a directory tree.
///
/// Files of a directory come first, then each subdirectory followed by its own
/// contents one level deeper. Listing failures, including children that
/// cannot be inspected, are written inline and do not stop the walk; only failures of the output sink are returned.
pub struct TreePrinter<W: Write> {
    out: W,
    opts: ScanOptions,
    stats: TreeStats,
}

impl<W: Write> TreePrinter<W> {
    pub fn new(out: W, opts: ScanOptions) -> Self {
        Self {
            out,
            opts,
            stats: TreeStats::default(),
        }
    }

    pub fn print(&mut self, dir: &Path, depth: usize) -> io::Result<()> {
        let pad = indent(depth);
        let listing = match list_dir(dir, &self.opts) {
            Ok(listing) => listing,
            Err(e) => return self.report(&pad, &e),
        };

        for e in &listing.unreadable {
            self.report(&pad, e)?;
        }

        for f in &listing.files {
            writeln!(self.out, "{pad}{} ({} bajtów) {}", f.name, f.size, f.attributes)?;
            self.stats.files += 1;
            self.stats.bytes = self.stats.bytes.saturating_add(f.size as u128);
        }

        for child in &listing.dirs {
            let sub = match child.describe() {
                Ok(sub) => sub,
                Err(e) => {
                    self.report(&pad, &e)?;
                    continue;
                }
            };
            writeln!(self.out, "{pad}{} ({} items) {}", sub.name, sub.item_count, sub.attributes)?;
            self.stats.dirs += 1;
            self.print(&sub.path, depth + 1)?;
        }
        Ok(())
    }

    fn report(&mut self, pad: &str, err: &ScanError) -> io::Result<()> {
        warn!("[print] {err}");
        self.stats.errors += 1;
        writeln!(self.out, "{pad}{LISTING_ERROR_PREFIX}{err}")
    }

    pub fn stats(&self) -> TreeStats {
        self.stats
    }
}

/// Prints the whole tree under `root` starting at depth 0.
pub fn print_tree<W: Write>(root: &Path, out: W, opts: ScanOptions) -> io::Result<TreeStats> {
    let mut printer = TreePrinter::new(out, opts);
    printer.print(root, 0)?;
    let stats = printer.stats();
    info!(
        "[print] {:?}: {} files, {} dirs, {} bytes, {} errors",
        root, stats.files, stats.dirs, stats.bytes, stats.errors
    );
    Ok(stats)
}
