//! Handles settings for the application. Configuration is read from
//! `settings.toml` (optional) and `SPENDBOARD_*` environment variables, e.g.
//! `SPENDBOARD_SERVER__PORT=8080`.
use clap::Parser;
use config::{Config, ConfigError, Environment, File};
use engine::{DEFAULT_NEAR_LIMIT_PERCENT, MonthOrder, WeekStart};
use serde::Deserialize;

const DEFAULT_CONFIG_PATH: &str = "settings";

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct App {
    pub level: String,
}

impl Default for App {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Server {
    pub bind: Option<String>,
    pub port: u16,
    /// IANA timezone used to resolve "today" on the dashboard.
    pub timezone: String,
}

impl Default for Server {
    fn default() -> Self {
        Self {
            bind: None,
            port: 3000,
            timezone: "UTC".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Engine {
    pub week_start: WeekStart,
    pub month_order: MonthOrder,
    pub near_limit_percent: f64,
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            week_start: WeekStart::default(),
            month_order: MonthOrder::default(),
            near_limit_percent: DEFAULT_NEAR_LIMIT_PERCENT,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub app: App,
    pub server: Server,
    pub engine: Engine,
}

#[derive(Debug, Parser)]
#[command(name = "spendboard", about = "Spending analytics server")]
struct Args {
    /// Optional config file path (TOML, without extension allowed).
    #[arg(long)]
    config: Option<String>,
    /// Override the log level (e.g. debug).
    #[arg(long)]
    level: Option<String>,
    /// Override the listening port.
    #[arg(long)]
    port: Option<u16>,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let args = Args::parse();

        let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
        let mut settings: Settings = Config::builder()
            .add_source(File::with_name(config_path).required(false))
            .add_source(
                Environment::with_prefix("SPENDBOARD")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        if let Some(level) = args.level {
            settings.app.level = level;
        }
        if let Some(port) = args.port {
            settings.server.port = port;
        }

        Ok(settings)
    }
}
