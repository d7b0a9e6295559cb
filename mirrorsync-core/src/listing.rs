//! Remote listing model — one entry per line of `rsync --list-only` output.
//!
//! A listing line looks like:
//!
//! ```text
//! drwxr-xr-x          4,096 2024/01/01 12:00:00 org/apache
//! -rw-r--r--        123,456 2024/01/01 12:00:00 org/apache/maven.jar
//! lrwxrwxrwx             11 2024/01/01 12:00:00 latest -> maven-3.9.6
//! ```
//!
//! Lines that do not match the pattern (the MOTD, the transfer summary,
//! blank lines) are silently skipped — they are noise, not errors.

use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use regex::Regex;

/// 10-char mode, size (comma-grouped), two-token date/time, rest is the path.
static LISTING_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\S{10}) +([0-9,]+) +(\S+ \S+) (.+)").unwrap());

/// One parsed line of a remote directory listing.
///
/// Entries are transient: each is consumed during stage 1 to either create
/// a local directory or enqueue a download candidate, then dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingEntry {
    /// Permission-mode string, e.g. `drwxr-xr-x`.
    pub mode: String,
    /// Size in bytes.
    pub size: u64,
    /// Modification timestamp, when the date field is in a known format.
    pub modified: Option<NaiveDateTime>,
    /// Path relative to the mirror root, including any ` -> target` suffix
    /// for symlink entries.
    pub path: String,
}

impl ListingEntry {
    /// Parse a single listing line. Returns `None` for non-matching lines.
    pub fn parse(line: &str) -> Option<Self> {
        let captures = LISTING_LINE.captures(line)?;
        let size: u64 = captures[2].replace(',', "").parse().ok()?;
        Some(Self {
            mode: captures[1].to_string(),
            size,
            modified: parse_timestamp(&captures[3]),
            path: captures[4].to_string(),
        })
    }

    /// Directory entries have a local directory created for them and are
    /// never download candidates.
    pub fn is_dir(&self) -> bool {
        self.mode.starts_with('d')
    }

    /// Hidden entries (path starts with `.`) are excluded entirely.
    pub fn is_hidden(&self) -> bool {
        self.path.starts_with('.')
    }

    /// Symlink entries carry a ` -> target` suffix in the path field.
    /// They are excluded because the downloader cannot follow them; the
    /// stage-3 rsync pass recreates them.
    pub fn is_symlink(&self) -> bool {
        self.path.contains(" -> ")
    }
}

fn parse_timestamp(field: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(field, "%Y/%m/%d %H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(field, "%Y/%m/%d %H:%M"))
        .ok()
}

/// Parse a whole listing output, skipping non-matching lines.
pub fn parse_listing(output: &str) -> Vec<ListingEntry> {
    output.lines().filter_map(ListingEntry::parse).collect()
}
