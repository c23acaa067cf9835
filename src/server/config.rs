use crate::server::error::config::ConfigError;

static DEFAULT_DATABASE_URL: &str = "sqlite:///tmp/test.db?mode=rwc";
static DEFAULT_HOST: &str = "0.0.0.0";
static DEFAULT_PORT: u16 = 3000;

/// Server configuration read from environment variables.
pub struct Config {
    /// Database connection URL, `postgres://` URLs are rewritten to `postgresql://`
    pub database_url: String,
    /// Interface the HTTP listener binds to
    pub host: String,
    /// Port the HTTP listener binds to
    pub port: u16,
}

impl Config {
    /// Reads the configuration from the process environment.
    ///
    /// Every variable is optional:
    /// - `DATABASE_URL` - defaults to a SQLite database at `/tmp/test.db`
    /// - `HOST` - defaults to `0.0.0.0`
    /// - `PORT` - defaults to `3000`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Builds the configuration using `get` to look up each variable.
    pub fn from_vars(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = match get("DATABASE_URL") {
            // Heroku style URLs use the `postgres` scheme
            Some(url) => match url.strip_prefix("postgres://") {
                Some(rest) => format!("postgresql://{}", rest),
                None => url,
            },
            None => DEFAULT_DATABASE_URL.to_string(),
        };

        let host = get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match get("PORT") {
            Some(port) => port.parse().map_err(|e| ConfigError::InvalidEnvValue {
                var: "PORT".to_string(),
                reason: format!("{}", e),
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            database_url,
            host,
            port,
        })
    }

    /// The `host:port` address for the HTTP listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
