use rust_decimal::Decimal;
use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;

use crate::worksheet::{AmountPolicy, DraftDefaults, WorksheetSettings};

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub worksheet: WorksheetConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        let ansi = flag_var("APP_LOG_ANSI", false)?;

        let logo_path = env::var("APP_LOGO_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("logo.png"));
        let reject_negative_amounts = flag_var("APP_REJECT_NEGATIVE_AMOUNTS", false)?;

        let fallback = DraftDefaults::default();
        let commission_percent =
            decimal_var("APP_DEFAULT_COMMISSION_PERCENT", fallback.listing_agent_percent)?;
        let transfer_tax_rate =
            decimal_var("APP_DEFAULT_TRANSFER_TAX_RATE", fallback.transfer_tax_rate)?;

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level, ansi },
            worksheet: WorksheetConfig {
                logo_path,
                reject_negative_amounts,
                commission_percent,
                transfer_tax_rate,
            },
        })
    }
}

fn flag_var(name: &'static str, default: bool) -> Result<bool, ConfigError> {
    match env::var(name) {
        Err(_) => Ok(default),
        Ok(raw) => match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" | "" => Ok(false),
            _ => Err(ConfigError::InvalidFlag { name, value: raw }),
        },
    }
}

fn decimal_var(name: &'static str, default: Decimal) -> Result<Decimal, ConfigError> {
    match env::var(name) {
        Err(_) => Ok(default),
        Ok(raw) => Decimal::from_str(raw.trim())
            .map_err(|source| ConfigError::InvalidDecimal { name, value: raw, source }),
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
    pub ansi: bool,
}

/// Form defaults and rendering assets for the proceeds worksheet.
#[derive(Debug, Clone)]
pub struct WorksheetConfig {
    pub logo_path: PathBuf,
    pub reject_negative_amounts: bool,
    pub commission_percent: Decimal,
    pub transfer_tax_rate: Decimal,
}

impl WorksheetConfig {
    pub fn settings(&self) -> WorksheetSettings {
        let policy = if self.reject_negative_amounts {
            AmountPolicy::RejectNegative
        } else {
            AmountPolicy::Lenient
        };

        WorksheetSettings {
            defaults: DraftDefaults {
                listing_agent_percent: self.commission_percent,
                buyers_agent_percent: self.commission_percent,
                transfer_tax_rate: self.transfer_tax_rate,
            },
            policy,
            logo_path: Some(self.logo_path.clone()),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost {
        source: std::net::AddrParseError,
    },
    InvalidFlag {
        name: &'static str,
        value: String,
    },
    InvalidDecimal {
        name: &'static str,
        value: String,
        source: rust_decimal::Error,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidFlag { name, value } => {
                write!(f, "{name} must be true or false, got '{value}'")
            }
            ConfigError::InvalidDecimal { name, value, .. } => {
                write!(f, "{name} must be a decimal number, got '{value}'")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort | ConfigError::InvalidFlag { .. } => None,
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidDecimal { source, .. } => Some(source),
        }
    }
}
