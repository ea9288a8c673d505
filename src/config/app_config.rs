use std::env;

use serde::Deserialize;

use crate::domain::availability::DEFAULT_LOCATION_ID;

/// Front-end domains allowed to call the relay from a browser
pub const DEFAULT_ALLOWED_ORIGINS: &[&str] = &[
    "https://machupicchutickets.net",
    "https://enjoyperu.org",
    "https://machupicchu-andean.com",
    "https://bigfootmachupicchu.com",
    "https://sapadventures.org",
    "https://lostinperu.com",
    "https://www.cusco-explore.com",
    "https://www.machupicchuviews.com",
    "https://www.nickey-travel.com",
];

pub const DEFAULT_AUTH_URL: &str = "https://api-tuboleto.cultura.pe/auth/user/login";
pub const DEFAULT_AVAILABILITY_URL: &str =
    "https://api-tuboleto.cultura.pe/recaudador/venta/getConsultaCupos";

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub cors: CorsConfig,
    pub ticketing: TicketingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Compact,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

/// Upstream ticketing API settings
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct TicketingConfig {
    pub auth_url: String,
    pub availability_url: String,
    pub username: Option<String>,
    pub password: Option<String>,
    pub location_id: u32,
    /// Skip certificate verification on the ticketing client only
    pub accept_invalid_certs: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 4000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: DEFAULT_ALLOWED_ORIGINS
                .iter()
                .map(|o| o.to_string())
                .collect(),
        }
    }
}

impl Default for TicketingConfig {
    fn default() -> Self {
        Self {
            auth_url: DEFAULT_AUTH_URL.to_string(),
            availability_url: DEFAULT_AVAILABILITY_URL.to_string(),
            username: None,
            password: None,
            location_id: DEFAULT_LOCATION_ID,
            accept_invalid_certs: true,
        }
    }
}

impl std::fmt::Debug for TicketingConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TicketingConfig")
            .field("auth_url", &self.auth_url)
            .field("availability_url", &self.availability_url)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .field("location_id", &self.location_id)
            .field("accept_invalid_certs", &self.accept_invalid_certs)
            .finish()
    }
}

impl AppConfig {
    /// Load configuration from files, `APP__*` variables and the plain
    /// `PORT` / `API_USERNAME` / `API_PASSWORD` variables (highest precedence).
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let config = ::config::Config::builder()
            .add_source(::config::File::with_name("config/default").required(false))
            .add_source(::config::File::with_name("config/local").required(false))
            .add_source(
                ::config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("cors.allowed_origins"),
            )
            .set_override_option("server.port", env::var("PORT").ok())?
            .set_override_option("ticketing.username", env::var("API_USERNAME").ok())?
            .set_override_option("ticketing.password", env::var("API_PASSWORD").ok())?
            .build()?;

        config.try_deserialize()
    }
}
