use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

/// Optional YAML file read relative to the working directory.
pub const CONFIG_FILE: &str = "config/default";

/// Environment variables understood by earlier deployments, mapped onto
/// configuration keys. These take precedence over every other source.
const LEGACY_ENV_KEYS: &[(&str, &str)] = &[
    ("DB_SERVER", "database.server"),
    ("DB_PORT", "database.port"),
    ("DB_USER", "database.user"),
    ("DB_PASSWORD", "database.password"),
    ("DB_NAME", "database.name"),
    ("DB_ENCRYPT", "database.encrypt"),
    ("DB_TRUST_CERT", "database.trust_server_certificate"),
    ("DB_TIMEOUT", "database.connection_timeout_ms"),
    ("DB_LAZY_CONNECT", "database.lazy_connect"),
    ("HOST", "host"),
    ("PORT", "port"),
];

/// Configuration options for the contacts service.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Interface the HTTP listener binds to.
    pub host: String,
    /// HTTP listen port.
    pub port: u16,
    pub database: DatabaseConfig,
}

/// Connection settings for the contacts database.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub server: String,
    pub port: u16,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    /// Require TLS to the database.
    pub encrypt: bool,
    /// Accept the server certificate without verifying it.
    pub trust_server_certificate: bool,
    pub connection_timeout_ms: u64,
    /// Start serving even when the database is unreachable at startup.
    pub lazy_connect: bool,
}

impl ServerConfig {
    /// Load configuration from defaults, [`CONFIG_FILE`], `APP__*` variables
    /// and finally the legacy `DB_*`/`PORT` variables.
    pub fn load() -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(Environment::with_prefix("APP").separator("__"));

        Self::from_builder(builder, |key| std::env::var(key).ok())
    }

    /// Finish a partially assembled builder, resolving legacy variables via `lookup`.
    pub fn from_builder<F>(
        builder: ConfigBuilder<DefaultState>,
        lookup: F,
    ) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = builder
            .set_default("host", "0.0.0.0")?
            .set_default("port", 5000)?
            .set_default("database.server", "localhost")?
            .set_default("database.port", 1433)?
            .set_default("database.encrypt", false)?
            .set_default("database.trust_server_certificate", false)?
            .set_default("database.connection_timeout_ms", 30_000)?
            .set_default("database.lazy_connect", false)?;

        for &(var, key) in LEGACY_ENV_KEYS {
            builder = builder.set_override_option(key, lookup(var))?;
        }

        builder.build()?.try_deserialize()
    }
}

impl DatabaseConfig {
    /// Render a libpq key/value connection string.
    pub fn connection_string(&self) -> String {
        let mut parts = vec![
            format!("host={}", quote_conninfo(&self.server)),
            format!("port={}", self.port),
        ];

        if let Some(user) = &self.user {
            parts.push(format!("user={}", quote_conninfo(user)));
        }
        if let Some(password) = &self.password {
            parts.push(format!("password={}", quote_conninfo(password)));
        }
        if let Some(name) = &self.name {
            parts.push(format!("dbname={}", quote_conninfo(name)));
        }

        parts.push(format!("sslmode={}", self.ssl_mode()));
        parts.push(format!("connect_timeout={}", self.connect_timeout_secs()));

        parts.join(" ")
    }

    fn ssl_mode(&self) -> &'static str {
        match (self.encrypt, self.trust_server_certificate) {
            (false, _) => "disable",
            (true, true) => "require",
            (true, false) => "verify-full",
        }
    }

    // libpq takes whole seconds; round up so a sub-second timeout is not zero (infinite).
    fn connect_timeout_secs(&self) -> u64 {
        self.connection_timeout_ms.div_ceil(1000).max(1)
    }
}

fn quote_conninfo(value: &str) -> String {
    let escaped = value.replace('\\', "\\\\").replace('\'', "\\'");
    format!("'{escaped}'")
}
