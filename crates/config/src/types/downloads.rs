//! Download cache options for the Flyway binary.
//!
//! Responsibilities:
//! - Define where the downloaded binary is cached and when the cache expires.
//! - Serialize expiry as integer milliseconds with `-1` meaning "never".
//!
//! Does NOT handle:
//! - Downloading the binary.
//! - Expiry decisions against the filesystem (see `cache` module).

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::path::PathBuf;
use std::time::Duration;

use crate::constants::{DEFAULT_STORAGE_DIRECTORY, NEVER_EXPIRE_MS};

/// How long a cached Flyway binary stays valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CacheExpiry {
    /// The cached binary is reused forever.
    #[default]
    Never,
    /// The cached binary is refreshed once it is older than this.
    After(Duration),
}

impl CacheExpiry {
    /// Millisecond representation used on the wire (`-1` for `Never`).
    pub fn as_millis(&self) -> i64 {
        match self {
            CacheExpiry::Never => NEVER_EXPIRE_MS,
            CacheExpiry::After(duration) => i64::try_from(duration.as_millis()).unwrap_or(i64::MAX),
        }
    }

    /// Interpret a millisecond value; any negative number means `Never`.
    pub fn from_millis(ms: i64) -> Self {
        match u64::try_from(ms) {
            Ok(ms) => CacheExpiry::After(Duration::from_millis(ms)),
            Err(_) => CacheExpiry::Never,
        }
    }
}

impl Serialize for CacheExpiry {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(self.as_millis())
    }
}

impl<'de> Deserialize<'de> for CacheExpiry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        i64::deserialize(deserializer).map(CacheExpiry::from_millis)
    }
}

/// Flyway binary download cache options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadOptions {
    /// Directory the downloaded binary is cached in.
    pub storage_directory: PathBuf,
    #[serde(rename = "expirationTimeInMs")]
    pub expiration: CacheExpiry,
}

impl Default for DownloadOptions {
    fn default() -> Self {
        Self {
            storage_directory: PathBuf::from(DEFAULT_STORAGE_DIRECTORY),
            expiration: CacheExpiry::Never,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_expiry_serializes_as_sentinel() {
        let json = serde_json::to_value(DownloadOptions::default()).unwrap();
        assert_eq!(json["expirationTimeInMs"], serde_json::json!(-1));
        assert_eq!(json["storageDirectory"], serde_json::json!("./flyway"));
    }

    #[test]
    fn test_expiry_millis_conversion() {
        assert_eq!(CacheExpiry::from_millis(-1), CacheExpiry::Never);
        assert_eq!(CacheExpiry::from_millis(-500), CacheExpiry::Never);
        assert_eq!(
            CacheExpiry::from_millis(0),
            CacheExpiry::After(Duration::ZERO)
        );
        assert_eq!(
            CacheExpiry::After(Duration::from_secs(2)).as_millis(),
            2000
        );
    }

    #[test]
    fn test_expiry_deserializes_negative_as_never() {
        let options: DownloadOptions =
            serde_json::from_str(r#"{"storageDirectory":"/tmp/fw","expirationTimeInMs":-7}"#)
                .unwrap();
        assert_eq!(options.expiration, CacheExpiry::Never);
        assert_eq!(options.storage_directory, PathBuf::from("/tmp/fw"));
    }
}
