// src/sales_data/cache.rs
use crate::domain::errors::DataResult;
use crate::sales_data::loader::{parse_with_hash, read_source};
use crate::sales_data::Dataset;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Hex-encoded SHA-256 of the raw file bytes
pub fn content_hash(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}

/// Memoizes parsed datasets by the hash of their file content.
///
/// The file is re-read on every lookup but only re-parsed when its bytes
/// change. Identical content under two paths shares one entry.
#[derive(Debug, Default)]
pub struct DatasetCache {
    // Parsed datasets by content hash
    entries: HashMap<String, Arc<Dataset>>,

    // Last content hash seen for each path
    sources: HashMap<PathBuf, String>,
}

impl DatasetCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the dataset for `path`, parsing it only on a content change.
    pub fn get_or_load<P: AsRef<Path>>(&mut self, path: P) -> DataResult<Arc<Dataset>> {
        let path = path.as_ref();
        let bytes = read_source(path)?;
        let hash = content_hash(&bytes);

        let dataset = match self.entries.get(&hash).cloned() {
            Some(dataset) => {
                log::debug!("Dataset cache hit for {} ({})", path.display(), &hash[..12]);
                dataset
            }
            None => {
                log::info!("Dataset cache miss for {}, parsing", path.display());
                let dataset = Arc::new(parse_with_hash(
                    &bytes,
                    &path.display().to_string(),
                    hash.clone(),
                )?);
                self.entries.insert(hash.clone(), Arc::clone(&dataset));
                dataset
            }
        };

        if let Some(previous) = self.sources.insert(path.to_path_buf(), hash) {
            self.evict_unreferenced(&previous);
        }

        Ok(dataset)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.sources.clear();
    }

    fn evict_unreferenced(&mut self, hash: &str) {
        if !self.sources.values().any(|h| h == hash) {
            log::debug!("Evicting stale dataset {}", &hash[..12]);
            self.entries.remove(hash);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Seek, Write};

    const HEADER: &str = "ORDERNUMBER,SALES,ORDERDATE,STATUS,PRODUCTLINE,PRODUCTCODE,CUSTOMERNAME,COUNTRY\n";

    fn write_csv(file: &mut tempfile::NamedTempFile, rows: &[&str]) {
        let file = file.as_file_mut();
        file.set_len(0).unwrap();
        let mut text = HEADER.to_string();
        for row in rows {
            text.push_str(row);
            text.push('\n');
        }
        file.rewind().unwrap();
        file.write_all(text.as_bytes()).unwrap();
        file.flush().unwrap();
    }

    #[test]
    fn hash_is_stable_hex() {
        let hash = content_hash(b"abc");
        assert_eq!(
            hash,
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn unchanged_file_is_served_from_cache() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write_csv(&mut file, &["1,100,1/6/2003 0:00,Shipped,Planes,P1,Alpha,USA"]);

        let mut cache = DatasetCache::new();
        let first = cache.get_or_load(file.path()).unwrap();
        let second = cache.get_or_load(file.path()).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn changed_file_is_reparsed_and_old_entry_dropped() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write_csv(&mut file, &["1,100,1/6/2003 0:00,Shipped,Planes,P1,Alpha,USA"]);

        let mut cache = DatasetCache::new();
        let first = cache.get_or_load(file.path()).unwrap();

        write_csv(
            &mut file,
            &[
                "1,100,1/6/2003 0:00,Shipped,Planes,P1,Alpha,USA",
                "2,50,1/7/2003 0:00,Shipped,Ships,S1,Beta,France",
            ],
        );
        let second = cache.get_or_load(file.path()).unwrap();

        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(second.len(), 2);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn identical_content_shares_entry() {
        let mut a = tempfile::NamedTempFile::new().unwrap();
        let mut b = tempfile::NamedTempFile::new().unwrap();
        write_csv(&mut a, &["1,100,1/6/2003 0:00,Shipped,Planes,P1,Alpha,USA"]);
        write_csv(&mut b, &["1,100,1/6/2003 0:00,Shipped,Planes,P1,Alpha,USA"]);

        let mut cache = DatasetCache::new();
        let first = cache.get_or_load(a.path()).unwrap();
        let second = cache.get_or_load(b.path()).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn missing_file_leaves_cache_untouched() {
        let mut cache = DatasetCache::new();
        assert!(cache.get_or_load("nope/sales.csv").is_err());
        assert!(cache.is_empty());
    }
}
