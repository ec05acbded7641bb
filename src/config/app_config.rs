const DEFAULT_PORT: u16 = 8081;
const DEFAULT_LOG_FILTER: &str = "info";

/// Runtime settings read once at startup.
///
/// `DATABASE_URL` wins when present. Otherwise the URL is assembled from the
/// `POSTGRES_*` variables; no password is assumed when `POSTGRES_PASSWORD` is
/// unset.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub database_url: String,
    pub log_filter: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = lookup("PORT")
            .and_then(|value| value.parse().ok())
            .unwrap_or(DEFAULT_PORT);
        let database_url = lookup("DATABASE_URL")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| assemble_database_url(&lookup));
        let log_filter = lookup("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Self {
            port,
            database_url,
            log_filter,
        }
    }
}

fn assemble_database_url(lookup: &impl Fn(&str) -> Option<String>) -> String {
    let host = lookup("POSTGRES_HOST").unwrap_or_else(|| "127.0.0.1".to_string());
    let port = lookup("POSTGRES_PORT").unwrap_or_else(|| "5432".to_string());
    let user = lookup("POSTGRES_USER").unwrap_or_else(|| "postgres".to_string());
    let database = lookup("POSTGRES_DATABASE").unwrap_or_else(|| "suppliers".to_string());

    let credentials = match lookup("POSTGRES_PASSWORD").filter(|value| !value.is_empty()) {
        Some(password) => format!("{user}:{password}"),
        None => user,
    };

    format!("postgres://{credentials}@{host}:{port}/{database}")
}
