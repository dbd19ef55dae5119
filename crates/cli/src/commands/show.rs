//! `show` and `url` commands.

use anyhow::Result;
use flyway_config::FlywayConfig;

use super::OutputFormat;

/// Render the configuration in the requested format.
pub fn render(config: &FlywayConfig, format: OutputFormat) -> Result<String> {
    let rendered = match format {
        OutputFormat::Json => config.to_json_pretty()? + "\n",
        OutputFormat::Yaml => config.to_yaml()?,
        OutputFormat::Conf => config.to_conf(),
        OutputFormat::Toml => config.to_toml()?,
        OutputFormat::Args => {
            let mut lines = config.command_args().join("\n");
            lines.push('\n');
            lines
        }
    };
    Ok(rendered)
}

pub fn run(config: &FlywayConfig, format: OutputFormat, show_secrets: bool) -> Result<()> {
    let output = if show_secrets {
        render(config, format)?
    } else {
        render(&config.redacted(), format)?
    };
    print!("{output}");
    Ok(())
}

pub fn run_url(config: &FlywayConfig) -> Result<()> {
    println!("{}", config.flyway_args.url);
    Ok(())
}
