//! # Serve Subcommand
//!
//! Runs the election catalog service. Configuration is read from the
//! environment first; any flag given here replaces the matching value.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;

use elcat_api::state::{parse_interval, AppConfig, ConfigError};

/// Arguments for the `elcat serve` subcommand.
#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    /// Port to listen on [env: PORT].
    #[arg(long)]
    pub port: Option<u16>,

    /// Directory of election JSON files [env: ELECTIONS_DIR].
    #[arg(long, value_name = "DIR")]
    pub elections_dir: Option<PathBuf>,

    /// Directory of SVG assets [env: SVG_DIR].
    #[arg(long, value_name = "DIR")]
    pub svg_dir: Option<PathBuf>,

    /// Directory of static viewer files [env: STATIC_DIR].
    #[arg(long, value_name = "DIR")]
    pub static_dir: Option<PathBuf>,

    /// Seconds between catalog refreshes [env: REFRESH_INTERVAL_SECS].
    #[arg(long = "refresh-secs", value_name = "SECS", value_parser = parse_refresh_secs)]
    pub refresh_interval: Option<Duration>,
}

fn parse_refresh_secs(value: &str) -> Result<Duration, ConfigError> {
    parse_interval("--refresh-secs", value)
}

impl ServeArgs {
    /// Overlay the flags that were given onto `config`.
    pub fn apply(&self, mut config: AppConfig) -> AppConfig {
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(dir) = &self.elections_dir {
            config.elections_dir = dir.clone();
        }
        if let Some(dir) = &self.svg_dir {
            config.svg_dir = dir.clone();
        }
        if let Some(dir) = &self.static_dir {
            config.static_dir = dir.clone();
        }
        if let Some(interval) = self.refresh_interval {
            config.refresh_interval = interval;
        }
        config
    }
}

/// Execute the serve subcommand. Returns once a shutdown signal arrives.
pub fn run_serve(args: &ServeArgs) -> Result<u8> {
    let config = args.apply(AppConfig::from_env().context("invalid environment configuration")?);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    runtime.block_on(elcat_api::server::run(
        config,
        elcat_api::server::shutdown_signal(),
    ))?;
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_flags_keep_config() {
        let config = AppConfig::default();
        assert_eq!(ServeArgs::default().apply(config.clone()), config);
    }

    #[test]
    fn flags_override_config() {
        let args = ServeArgs {
            port: Some(9000),
            elections_dir: Some(PathBuf::from("/data/elections")),
            refresh_interval: Some(Duration::from_secs(3)),
            ..ServeArgs::default()
        };
        let config = args.apply(AppConfig::default());
        assert_eq!(config.port, 9000);
        assert_eq!(config.elections_dir, PathBuf::from("/data/elections"));
        assert_eq!(config.svg_dir, AppConfig::default().svg_dir);
        assert_eq!(config.refresh_interval, Duration::from_secs(3));
    }

    #[test]
    fn refresh_flag_rejects_zero() {
        assert!(parse_refresh_secs("0").is_err());
        assert_eq!(parse_refresh_secs("5").unwrap(), Duration::from_secs(5));
    }
}
