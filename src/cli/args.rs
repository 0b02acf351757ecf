//! CLI argument parsing and configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::error::ConfigError;
use crate::models::SocialPost;
use crate::services::ServiceConfig;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Turn a social-media post into an Amazon listing preview
#[derive(Debug, Parser)]
#[command(name = "listing-tui", version = VERSION, about)]
pub struct CliArgs {
    /// Simulated analysis latency in milliseconds
    #[arg(long, env = "LISTING_GENERATE_DELAY_MS", default_value_t = 1500)]
    pub generate_delay_ms: u64,

    /// Simulated export latency in milliseconds
    #[arg(long, env = "LISTING_EXPORT_DELAY_MS", default_value_t = 2000)]
    pub export_delay_ms: u64,

    /// Make every listing generation fail
    #[arg(long, env = "LISTING_FAIL_GENERATION")]
    pub fail_generation: bool,

    /// Make every export fail
    #[arg(long, env = "LISTING_FAIL_EXPORT")]
    pub fail_export: bool,

    /// How long notifications stay on screen, in milliseconds
    #[arg(long, env = "LISTING_TOAST_TTL_MS", default_value_t = 4000)]
    pub toast_ttl_ms: u64,

    /// JSON file with a post to pre-fill the form
    /// (`{"platform": "instagram", "content": "...", "url": "..."}`)
    #[arg(long, value_name = "FILE")]
    pub post: Option<PathBuf>,

    /// Start in light mode
    #[arg(long)]
    pub light: bool,

    /// Log file (defaults to the platform data dir)
    #[arg(long, env = "LISTING_LOG_FILE", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Log filter, e.g. `info` or `listing_tui=debug`
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,
}

/// Resolved configuration
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub services: ServiceConfig,
    pub toast_ttl: Duration,
    pub initial_post: Option<SocialPost>,
    pub dark_mode: bool,
    pub log_file: PathBuf,
    pub log_level: String,
}

impl CliConfig {
    pub fn from_args(args: CliArgs) -> Result<Self, ConfigError> {
        let initial_post = match args.post {
            Some(path) => Some(SocialPost::load(&path).map_err(|source| ConfigError::PostFile {
                path: path.display().to_string(),
                source,
            })?),
            None => None,
        };

        Ok(Self {
            services: ServiceConfig {
                generate_delay: Duration::from_millis(args.generate_delay_ms),
                export_delay: Duration::from_millis(args.export_delay_ms),
                fail_generation: args.fail_generation,
                fail_export: args.fail_export,
            },
            toast_ttl: Duration::from_millis(args.toast_ttl_ms),
            initial_post,
            dark_mode: !args.light,
            log_file: args.log_file.unwrap_or_else(default_log_file),
            log_level: args.log_level,
        })
    }
}

/// `<data_local_dir>/listing-tui/listing-tui.log`, or the temp dir
fn default_log_file() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("listing-tui")
        .join("listing-tui.log")
}
