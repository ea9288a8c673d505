mod app_config;

pub use app_config::{
    AppConfig, CorsConfig, LogFormat, LoggingConfig, ServerConfig, TicketingConfig,
    DEFAULT_ALLOWED_ORIGINS, DEFAULT_AUTH_URL, DEFAULT_AVAILABILITY_URL,
};
