//! In-memory box art catalog loaded from the TSV cache.
//!
//! Cache format (tab-separated, optional header whose first field is `key`):
//! `key  platform_folder  filename  primary_url  secondary_url  absolute_path`
//!
//! CHANGELOG:
//! - 10/16/2026 - Skip short and unreadable records instead of aborting
//! - 10/16/2026 - Initial implementation

use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::{debug, info, warn};

use super::entry::ArtworkEntry;
use crate::error::{BoxartError, Result};

/// Records with fewer fields than this are skipped.
pub const MIN_RECORD_FIELDS: usize = 5;

/// Read-only collection of artwork entries plus the platform folders seen.
#[derive(Debug, Clone, Default)]
pub struct CatalogIndex {
    entries: Vec<ArtworkEntry>,
    platforms: BTreeSet<String>,
}

impl CatalogIndex {
    /// Create an empty index (for when the cache isn't available).
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<ArtworkEntry>) -> Self {
        let platforms = entries.iter().map(|e| e.platform_folder.clone()).collect();
        Self { entries, platforms }
    }

    /// Load the cache file at `path`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| BoxartError::CatalogUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        let index = Self::from_reader(file)?;
        info!(
            path = %path.display(),
            entries = index.len(),
            platforms = index.platforms.len(),
            "Loaded box art entries from cache"
        );
        Ok(index)
    }

    /// Load the cache, degrading to an empty index when it can't be read.
    ///
    /// Every lookup against the empty index yields no match.
    pub fn load_or_empty<P: AsRef<Path>>(path: P) -> Self {
        match Self::load(path) {
            Ok(index) => {
                if index.is_empty() {
                    warn!("Box art cache is empty; all lookups will miss");
                }
                index
            }
            Err(e) => {
                warn!(error = %e, "Box art cache not loaded; all lookups will miss");
                Self::empty()
            }
        }
    }

    /// Parse TSV records from any reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .from_reader(reader);

        let mut entries = Vec::new();
        let mut skipped = 0usize;

        for (i, result) in rdr.records().enumerate() {
            let line = i as u64 + 1;
            let record = match result {
                Ok(record) => record,
                Err(e) if e.is_io_error() => return Err(e.into()),
                Err(e) => {
                    debug!(line, error = %e, "Skipping unreadable cache record");
                    skipped += 1;
                    continue;
                }
            };

            if i == 0 && record.get(0) == Some("key") {
                continue;
            }

            if record.len() < MIN_RECORD_FIELDS {
                let err = BoxartError::MalformedRecord {
                    line,
                    fields: record.len(),
                };
                debug!("{}", err);
                skipped += 1;
                continue;
            }

            let mut entry = ArtworkEntry::new(&record[1], &record[2], &record[3], &record[4]);
            if let Some(abs_path) = record.get(5).filter(|p| !p.is_empty()) {
                entry = entry.with_absolute_path(abs_path);
            }
            if record[0] != entry.normalized_key {
                debug!(
                    line,
                    cached = &record[0],
                    derived = %entry.normalized_key,
                    "Cache key differs from filename; using derived key"
                );
            }
            entries.push(entry);
        }

        if skipped > 0 {
            warn!(skipped, "Skipped malformed box art cache records");
        }

        Ok(Self::from_entries(entries))
    }

    pub fn entries(&self) -> &[ArtworkEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Platform folders present in the cache, sorted.
    pub fn platforms(&self) -> impl Iterator<Item = &str> + Clone {
        self.platforms.iter().map(String::as_str)
    }

    pub fn has_platform(&self, folder: &str) -> bool {
        self.platforms.contains(folder)
    }

    /// Entries stored under `folder`.
    pub fn entries_for(&self, folder: &str) -> Vec<&ArtworkEntry> {
        self.entries
            .iter()
            .filter(|e| e.platform_folder == folder)
            .collect()
    }

    /// Entry count per platform folder.
    pub fn platform_counts(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for entry in &self.entries {
            *counts.entry(entry.platform_folder.as_str()).or_insert(0) += 1;
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SNES: &str = "Nintendo - Super Nintendo Entertainment System";

    #[test]
    fn test_parse_with_header() {
        let tsv = format!(
            "key\tsystem\tfilename\traw_url\tblob_url\tabs_path\n\
             chronotriggerusa\t{SNES}\tChrono Trigger (USA).png\traw1\tblob1\t/thumbs/ct.png\n"
        );
        let index = CatalogIndex::from_reader(tsv.as_bytes()).unwrap();
        assert_eq!(index.len(), 1);
        let entry = &index.entries()[0];
        assert_eq!(entry.platform_folder, SNES);
        assert_eq!(entry.primary_url, "raw1");
        assert_eq!(entry.secondary_url, "blob1");
        assert_eq!(entry.absolute_path.as_deref(), Some("/thumbs/ct.png"));
        assert!(index.has_platform(SNES));
    }

    #[test]
    fn test_first_line_is_data_without_header() {
        let tsv = format!("chronotrigger\t{SNES}\tChrono Trigger.png\traw\tblob\n");
        let index = CatalogIndex::from_reader(tsv.as_bytes()).unwrap();
        assert_eq!(index.len(), 1);
        assert!(index.entries()[0].absolute_path.is_none());
    }

    #[test]
    fn test_short_records_are_skipped() {
        let tsv = format!(
            "key\tsystem\tfilename\traw_url\tblob_url\tabs_path\n\
             broken\t{SNES}\tOnly Three.png\n\
             earthbound\t{SNES}\tEarthBound (USA).png\traw\tblob\n"
        );
        let index = CatalogIndex::from_reader(tsv.as_bytes()).unwrap();
        assert_eq!(index.len(), 1);
        assert_eq!(index.entries()[0].filename, "EarthBound (USA).png");
    }

    #[test]
    fn test_key_is_rederived_from_filename() {
        let tsv = format!("stale\t{SNES}\tSuper Metroid (USA).png\traw\tblob\n");
        let index = CatalogIndex::from_reader(tsv.as_bytes()).unwrap();
        assert_eq!(index.entries()[0].normalized_key, "supermetroidusa");
    }

    #[test]
    fn test_platform_counts() {
        let tsv = "a\tSega - Master System - Mark III\tAlex Kidd.png\tr\tb\n\
                   b\tSega - Master System - Mark III\tWonder Boy.png\tr\tb\n\
                   c\tSony - PlayStation\tRidge Racer.png\tr\tb\n";
        let index = CatalogIndex::from_reader(tsv.as_bytes()).unwrap();
        let counts = index.platform_counts();
        assert_eq!(counts.get("Sega - Master System - Mark III"), Some(&2));
        assert_eq!(counts.get("Sony - PlayStation"), Some(&1));
        assert_eq!(
            index.platforms().collect::<Vec<_>>(),
            vec!["Sega - Master System - Mark III", "Sony - PlayStation"]
        );
    }

    #[test]
    fn test_platforms_can_be_walked_twice() {
        let tsv = format!(
            "a\t{SNES}\tEarthBound.png\tr\tb\n\
             b\tSony - PlayStation\tRidge Racer.png\tr\tb\n"
        );
        let index = CatalogIndex::from_reader(tsv.as_bytes()).unwrap();
        let platforms = index.platforms();
        let first: Vec<&str> = platforms.clone().collect();
        assert_eq!(first, platforms.collect::<Vec<_>>());
        assert_eq!(first, vec![SNES, "Sony - PlayStation"]);
    }

    #[test]
    fn test_missing_file_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("boxart_cache.txt");
        let err = CatalogIndex::load(&missing).unwrap_err();
        assert!(matches!(err, BoxartError::CatalogUnavailable { .. }));
        assert!(CatalogIndex::load_or_empty(&missing).is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("boxart_cache.txt");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "key\tsystem\tfilename\traw_url\tblob_url\tabs_path").unwrap();
        writeln!(file, "tetris\tNintendo - Game Boy\tTetris (World).png\tr\tb\t").unwrap();
        drop(file);

        let index = CatalogIndex::load(&path).unwrap();
        assert_eq!(index.len(), 1);
        assert!(index.entries()[0].absolute_path.is_none());
    }

    #[test]
    fn test_empty_source() {
        let index = CatalogIndex::from_reader("".as_bytes()).unwrap();
        assert!(index.is_empty());
        assert_eq!(index.platforms().count(), 0);
    }
}
