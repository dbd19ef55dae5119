//! Expiry decisions for the cached Flyway binary.
//!
//! Responsibilities:
//! - Decide whether a cached artifact is stale given its modification time.
//! - Read modification times from the configured storage directory.
//!
//! Does NOT handle:
//! - Downloading or deleting the binary.

use std::io;
use std::path::Path;
use std::time::SystemTime;

use crate::types::{CacheExpiry, DownloadOptions};

impl DownloadOptions {
    /// Whether an artifact last modified at `modified` is expired at `now`.
    ///
    /// A modification time in the future is treated as fresh.
    pub fn is_expired_at(&self, modified: SystemTime, now: SystemTime) -> bool {
        match self.expiration {
            CacheExpiry::Never => false,
            CacheExpiry::After(max_age) => match now.duration_since(modified) {
                Ok(age) => age >= max_age,
                Err(_) => false,
            },
        }
    }

    /// Whether `artifact` (relative to the storage directory) needs refreshing.
    ///
    /// A missing artifact counts as expired.
    pub fn is_cache_expired(&self, artifact: &Path) -> io::Result<bool> {
        let path = self.storage_directory.join(artifact);
        let modified = match std::fs::metadata(&path) {
            Ok(metadata) => metadata.modified()?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "cached artifact not found");
                return Ok(true);
            }
            Err(e) => return Err(e),
        };
        Ok(self.is_expired_at(modified, SystemTime::now()))
    }
}
