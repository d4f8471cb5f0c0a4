use thiserror::Error;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_CATALOGUE_BOOK_URL: &str = "http://localhost:8088/books/{id}";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("PORT must be a valid number, got '{0}'")]
    InvalidPort(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    /// Catalogue book endpoint; `{id}` is replaced by the book id.
    pub catalogue_book_url: String,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match lookup("PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        let catalogue_book_url =
            lookup("CATALOGUE_BOOK_URL").unwrap_or_else(|| DEFAULT_CATALOGUE_BOOK_URL.to_string());

        Ok(Self {
            database_url,
            host,
            port,
            catalogue_book_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn settings(vars: &[(&str, &str)]) -> Result<Settings, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_only_database_url_is_set() {
        let s = settings(&[("DATABASE_URL", "postgres://localhost/orders")]).unwrap();

        assert_eq!(s.host, DEFAULT_HOST);
        assert_eq!(s.port, DEFAULT_PORT);
        assert_eq!(s.catalogue_book_url, DEFAULT_CATALOGUE_BOOK_URL);
    }

    #[test]
    fn explicit_values_win() {
        let s = settings(&[
            ("DATABASE_URL", "postgres://db/orders"),
            ("HOST", "127.0.0.1"),
            ("PORT", "9090"),
            ("CATALOGUE_BOOK_URL", "http://catalogue/books/{id}"),
        ])
        .unwrap();

        assert_eq!(s.port, 9090);
        assert_eq!(s.host, "127.0.0.1");
        assert_eq!(s.catalogue_book_url, "http://catalogue/books/{id}");
    }

    #[test]
    fn database_url_is_required() {
        assert_eq!(settings(&[]), Err(ConfigError::Missing("DATABASE_URL")));
    }

    #[test]
    fn port_must_be_numeric() {
        let err = settings(&[("DATABASE_URL", "x"), ("PORT", "eighty")]).unwrap_err();
        assert_eq!(err, ConfigError::InvalidPort("eighty".to_string()));
    }
}
