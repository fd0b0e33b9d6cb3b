#[derive(Debug, Clone, serde::Deserialize)]
#[serde(default)]
pub struct Settings {
    pub database: DatabaseSettings,
    pub app_port: u16,
    pub app_host: String,
    pub search: SearchSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            database: DatabaseSettings::default(),
            app_port: 8000,
            app_host: "127.0.0.1".to_string(),
            search: SearchSettings::default(),
        }
    }
}

#[derive(Debug, Clone, serde::Deserialize)]
#[serde(default)]
pub struct DatabaseSettings {
    pub username: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub database_name: String,
    pub max_connections: u32,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            username: "postgres".to_string(),
            password: "postgres".to_string(),
            host: "127.0.0.1".to_string(),
            port: 5432,
            database_name: "shopfront".to_string(),
            max_connections: 5,
        }
    }
}

/// Search index connection and reindex worker pool settings
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Base URL of the index server (e.g., http://127.0.0.1:9200)
    pub host: String,
    /// Name of the index shop documents are written to
    pub index_name: String,
    /// HTTP request timeout in seconds
    pub timeout_secs: u64,
    /// Upper bound of in-flight document writes while reindexing
    pub concurrency: usize,
    /// Attempts per document before it is reported as failed
    pub retry_attempts: usize,
    /// Base delay for the exponential backoff between attempts
    pub retry_backoff_ms: u64,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            host: "http://127.0.0.1:9200".to_string(),
            index_name: "shops".to_string(),
            timeout_secs: 10,
            concurrency: 8,
            retry_attempts: 3,
            retry_backoff_ms: 100,
        }
    }
}

impl DatabaseSettings {
    // Connection string: postgresql://<username>:<password>@<host>:<port>/<database_name>
    pub fn connection_string(&self) -> String {
        format!(
            "postgresql://{}:{}@{}:{}/{}",
            self.username, self.password, self.host, self.port, self.database_name,
        )
    }

    pub fn connection_string_without_db(&self) -> String {
        format!(
            "postgresql://{}:{}@{}:{}",
            self.username, self.password, self.host, self.port,
        )
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // configuration.yaml is optional, every field has a default.
    // APP__DATABASE__HOST=db overrides database.host
    config::Config::builder()
        .add_source(config::File::with_name("configuration").required(false))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("__")
                .separator("__"),
        )
        .build()?
        .try_deserialize()
}
