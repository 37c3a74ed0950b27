//! Application configuration loaded from environment variables and flags.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts. Command-line flags take priority over environment variables.
//!
//! ## Variables
//!
//! - `LISTEN` / `--listen` - Bind address (default: `0.0.0.0:3005`)
//! - `RUST_LOG` - Log filter directives (default: `info`)
//! - `LOG_FORMAT` / `--log-format` - `text` or `json` (default: `text`)
//! - `STATIC_DIR` / `--static-dir` - Frontend directory to serve (optional)
//!
//! Nothing here affects code length or alphabet; those are fixed.

use anyhow::Result;
use clap::Parser;
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

const DEFAULT_LISTEN: &str = "0.0.0.0:3005";
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_LOG_FORMAT: &str = "text";

/// Command-line flags for the server binary.
#[derive(Debug, Default, Parser)]
#[command(name = "linkmint")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Bind address, e.g. 127.0.0.1:3005 (overrides LISTEN)
    #[arg(short, long)]
    pub listen: Option<String>,

    /// Log output format: text or json (overrides LOG_FORMAT)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Directory with frontend files to serve (overrides STATIC_DIR)
    #[arg(long)]
    pub static_dir: Option<PathBuf>,
}

/// Service configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Directory served as the router fallback, if any.
    pub static_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_format: DEFAULT_LOG_FORMAT.to_string(),
            static_dir: None,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Unset or empty variables fall back to their defaults.
    pub fn from_env() -> Self {
        let listen_addr = env_or("LISTEN", DEFAULT_LISTEN);
        let log_level = env_or("RUST_LOG", DEFAULT_LOG_LEVEL);
        let log_format = env_or("LOG_FORMAT", DEFAULT_LOG_FORMAT);

        let static_dir = env::var("STATIC_DIR")
            .ok()
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        Self {
            listen_addr,
            log_level,
            log_format,
            static_dir,
        }
    }

    /// Applies command-line overrides.
    pub fn with_args(mut self, args: Args) -> Self {
        if let Some(listen) = args.listen {
            self.listen_addr = listen;
        }
        if let Some(log_format) = args.log_format {
            self.log_format = log_format;
        }
        if let Some(static_dir) = args.static_dir {
            self.static_dir = Some(static_dir);
        }
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not a socket address
    /// - `static_dir` is set but is not a directory
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.listen_addr.parse::<SocketAddr>().is_err() {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if let Some(ref dir) = self.static_dir
            && !dir.is_dir()
        {
            anyhow::bail!("STATIC_DIR must be a directory, got '{}'", dir.display());
        }

        Ok(())
    }

    /// Parsed bind address. Call after [`Config::validate`].
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        Ok(self.listen_addr.parse()?)
    }

    /// Logs a configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        match self.static_dir {
            Some(ref dir) => tracing::info!("  Static files: {}", dir.display()),
            None => tracing::info!("  Static files: disabled"),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Loads configuration from the environment, applies flags, and validates.
///
/// # Note
///
/// Expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load(args: Args) -> Result<Config> {
    let config = Config::from_env().with_args(args);
    config.validate()?;
    Ok(config)
}
