//! `write` command: persist a Flyway configuration file.

use anyhow::{Context, Result};
use flyway_config::FlywayConfig;
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::Path;

use super::WriteFormat;

pub fn run(config: &FlywayConfig, path: &Path, format: WriteFormat, force: bool) -> Result<()> {
    let contents = match format {
        WriteFormat::Conf => config.to_conf(),
        WriteFormat::Toml => config.to_toml()?,
    };

    let mut options = OpenOptions::new();
    options.write(true);
    if force {
        options.create(true).truncate(true);
    } else {
        options.create_new(true);
    }

    let mut file = match options.open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            return Err(anyhow::Error::new(e).context(format!(
                "Refusing to overwrite {} (use --force to replace it)",
                path.display()
            )));
        }
        Err(e) => {
            return Err(
                anyhow::Error::new(e).context(format!("Failed to open {}", path.display()))
            );
        }
    };

    file.write_all(contents.as_bytes())
        .with_context(|| format!("Failed to write {}", path.display()))?;

    tracing::info!(path = %path.display(), ?format, "wrote Flyway configuration");
    eprintln!("Wrote {}", path.display());
    Ok(())
}
