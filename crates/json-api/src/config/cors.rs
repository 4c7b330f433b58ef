//! CORS Config

use clap::Args;

/// Origins that are always allowed, matching the dashboard dev servers.
pub(crate) const DEFAULT_ORIGINS: [&str; 2] = [DEFAULT_CORS_ORIGIN, "http://localhost:5175"];

const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";

/// Cross-origin request settings.
#[derive(Debug, Args)]
pub struct CorsConfig {
    /// Additional allowed origin
    #[arg(long, env = "CORS_ORIGIN", default_value = DEFAULT_CORS_ORIGIN)]
    pub cors_origin: String,
}

impl CorsConfig {
    /// The default origins, plus the configured one when it is not already among them.
    #[must_use]
    pub fn allowed_origins(&self) -> Vec<String> {
        let mut origins: Vec<String> = DEFAULT_ORIGINS.iter().map(ToString::to_string).collect();
        let extra = self.cors_origin.trim();

        if !extra.is_empty() && !origins.iter().any(|origin| origin == extra) {
            origins.push(extra.to_string());
        }

        origins
    }
}
