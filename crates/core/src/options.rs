/// Knobs shared by the listing, printing and oldest-file scans.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanOptions {
    /// Follow symbolic links when classifying and descending.
    pub follow_links: bool,
    /// Order children by name instead of filesystem enumeration order.
    pub sort_entries: bool,
}
