// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Content-addressed archive packaging and storage
//!
//! The archive store is the only shared, mutable resource in the pipeline.
//! Publication is atomic: archives are written to a temporary path and
//! renamed into the deterministic final location, so a reader never observes
//! a half-written archive. Racing writers for the same key both produce the
//! same complete bytes and the last rename wins.

use crate::error::{Error, Result};
use sha2::{Digest, Sha256};
use std::fmt;
use std::fs;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Fixed-length digest of the raw input bytes
///
/// Serves both as the archive's stable identity and as the idempotence
/// token: identical inputs always map to the same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    /// Derive the key from raw input bytes (SHA-256, hex-encoded)
    pub fn from_bytes(data: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(data);
        Self(hex::encode(hasher.finalize()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Storage backend for finished archives
///
/// Keyed by [`CacheKey`]; `exists` + `put` together implement the build-cache
/// contract: at most one archive ever becomes visible per key, and it is
/// always complete.
pub trait ArtifactStore {
    /// Whether an archive for this key has already been published
    fn exists(&self, key: &CacheKey) -> bool;

    /// The deterministic locator for this key's archive
    fn locate(&self, key: &CacheKey) -> PathBuf;

    /// Publish archive bytes under this key and return the final locator
    fn put(&self, key: &CacheKey, bytes: &[u8]) -> Result<PathBuf>;
}

/// Filesystem-backed archive store
///
/// Archives land at `<output_root>/<prefix>_<key>.zip`. Writes go through
/// `temp_root` and are moved into place with a rename.
#[derive(Debug, Clone)]
pub struct FsStore {
    output_root: PathBuf,
    temp_root: PathBuf,
    prefix: String,
}

impl FsStore {
    /// Create a store, provisioning both directories
    pub fn new(
        output_root: impl Into<PathBuf>,
        temp_root: impl Into<PathBuf>,
        prefix: impl Into<String>,
    ) -> Result<Self> {
        let store = Self {
            output_root: output_root.into(),
            temp_root: temp_root.into(),
            prefix: prefix.into(),
        };
        fs::create_dir_all(&store.output_root)?;
        fs::create_dir_all(&store.temp_root)?;
        Ok(store)
    }

    fn archive_name(&self, key: &CacheKey) -> String {
        format!("{}_{}.zip", self.prefix, key)
    }

    fn temp_path(&self, key: &CacheKey) -> PathBuf {
        // Unique per writer so concurrent puts for different (or identical)
        // keys never share a temporary file.
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.subsec_nanos())
            .unwrap_or(0);
        self.temp_root.join(format!(
            "{}.{}.{}.part",
            self.archive_name(key),
            std::process::id(),
            nanos
        ))
    }
}

impl ArtifactStore for FsStore {
    fn exists(&self, key: &CacheKey) -> bool {
        self.locate(key).exists()
    }

    fn locate(&self, key: &CacheKey) -> PathBuf {
        self.output_root.join(self.archive_name(key))
    }

    fn put(&self, key: &CacheKey, bytes: &[u8]) -> Result<PathBuf> {
        let temp = self.temp_path(key);
        let target = self.locate(key);

        fs::write(&temp, bytes)?;
        if let Err(e) = fs::rename(&temp, &target) {
            // Never leave a partial artifact under the temporary name either
            let _ = fs::remove_file(&temp);
            return Err(Error::Storage(e));
        }

        tracing::debug!(key = %key, path = %target.display(), size = bytes.len(), "published archive");
        Ok(target)
    }
}

/// Bundle serialized mesh documents into a deflate-compressed zip
///
/// Entries are named `wall_<ordinal>.obj`, ordinal starting at 0 in the
/// order the parts were produced. An empty slice yields a valid empty
/// archive: a zero-part result is a reproducible outcome worth caching.
pub fn encode_archive(documents: &[String]) -> Result<Vec<u8>> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for (idx, doc) in documents.iter().enumerate() {
        writer.start_file(format!("wall_{}.obj", idx), options)?;
        writer.write_all(doc.as_bytes())?;
    }

    let cursor = writer.finish()?;
    Ok(cursor.into_inner())
}

/// Convenience for tests and callers: list entry names of an archive on disk
pub fn archive_entry_names(path: &Path) -> Result<Vec<String>> {
    let file = fs::File::open(path)?;
    let mut archive = zip::ZipArchive::new(file)?;
    let mut names = Vec::with_capacity(archive.len());
    for i in 0..archive.len() {
        names.push(archive.by_index(i)?.name().to_string());
    }
    Ok(names)
}
