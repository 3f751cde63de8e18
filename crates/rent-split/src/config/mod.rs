use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

use crate::billing::{BillField, RawBillForm, RawValue, SEED_DAYS, SEED_PERSON, SEED_RENT};

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

/// Top-level configuration for the calculator service.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub form: FormDefaults,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = match env::var("APP_PORT") {
            Ok(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort { value: raw })?,
            Err(_) => 3000,
        };

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let defaults = FormDefaults::default();
        let form = FormDefaults {
            person: env::var("APP_DEFAULT_PERSON").unwrap_or(defaults.person),
            days: env::var("APP_DEFAULT_DAYS").unwrap_or(defaults.days),
            rent: env::var("APP_DEFAULT_RENT").unwrap_or(defaults.rent),
        };

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            form,
        })
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
}

/// Values pre-filled into a fresh form. Kept as raw text: they are validated on submit like
/// anything the user types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormDefaults {
    pub person: String,
    pub days: String,
    pub rent: String,
}

impl Default for FormDefaults {
    fn default() -> Self {
        Self {
            person: SEED_PERSON.to_string(),
            days: SEED_DAYS.to_string(),
            rent: SEED_RENT.to_string(),
        }
    }
}

impl FormDefaults {
    pub fn to_form(&self) -> RawBillForm {
        let mut form = RawBillForm::new();
        for (field, value) in [
            (BillField::Person, &self.person),
            (BillField::Days, &self.days),
            (BillField::Rent, &self.rent),
        ] {
            if !value.trim().is_empty() {
                form.insert(field, RawValue::Text(value.clone()));
            }
        }
        form
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort { value: String },
    InvalidHost { source: std::net::AddrParseError },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort { value } => {
                write!(f, "APP_PORT must be a valid u16 (found '{value}')")
            }
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort { .. } => None,
            ConfigError::InvalidHost { source } => Some(source),
        }
    }
}
