//! `cache-status` command: report whether the cached Flyway binary is stale.

use anyhow::{Context, Result};
use flyway_config::{CacheExpiry, FlywayConfig};
use std::path::Path;

fn describe_expiry(expiry: CacheExpiry) -> String {
    match expiry {
        CacheExpiry::Never => "never".to_string(),
        CacheExpiry::After(duration) => format!("after {} ms", duration.as_millis()),
    }
}

pub fn run(config: &FlywayConfig, artifact: &Path) -> Result<()> {
    let downloads = &config.downloads;
    let expired = downloads.is_cache_expired(artifact).with_context(|| {
        format!(
            "Failed to inspect {}",
            downloads.storage_directory.join(artifact).display()
        )
    })?;

    println!(
        "storage_directory: {}",
        downloads.storage_directory.display()
    );
    println!("expiration: {}", describe_expiry(downloads.expiration));
    println!("artifact: {}", artifact.display());
    println!("status: {}", if expired { "expired" } else { "fresh" });
    Ok(())
}
