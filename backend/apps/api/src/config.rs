//! API Configuration
//!
//! Everything is read from the environment (after `.env` is loaded).

use std::net::SocketAddr;

use anyhow::Context;
use axum::http::{HeaderValue, Method, header};
use books::BooksConfig;
use tower_http::cors::{AllowHeaders, AllowMethods, Any, CorsLayer};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Origins allowed by CORS
#[derive(Debug, Clone, PartialEq)]
pub enum AllowedOrigins {
    /// `*`; credentials are not allowed in this mode
    Any,
    List(Vec<HeaderValue>),
}

/// API server configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// `DATABASE_URL` (required)
    pub database_url: String,
    /// `BIND_ADDR`
    pub bind_addr: SocketAddr,
    /// `DATABASE_MAX_CONNECTIONS`
    pub database_max_connections: u32,
    /// `FRONTEND_ORIGINS`, comma separated
    pub frontend_origins: AllowedOrigins,
    /// `BOOKS_DEFAULT_COUNTRY`
    pub default_country: Option<String>,
}

impl ApiConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url =
            lookup("DATABASE_URL").context("DATABASE_URL must be set in environment")?;

        let bind_addr: SocketAddr = lookup("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse()
            .context("BIND_ADDR must be a socket address such as 0.0.0.0:3000")?;

        let database_max_connections: u32 = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw
                .parse()
                .context("DATABASE_MAX_CONNECTIONS must be a positive integer")?,
            None => DEFAULT_MAX_CONNECTIONS,
        };
        anyhow::ensure!(
            database_max_connections > 0,
            "DATABASE_MAX_CONNECTIONS must be a positive integer"
        );

        let frontend_origins =
            parse_origins(&lookup("FRONTEND_ORIGINS").unwrap_or_else(|| "*".to_string()));

        let default_country = lookup("BOOKS_DEFAULT_COUNTRY")
            .map(|country| country.trim().to_string())
            .filter(|country| !country.is_empty());

        Ok(Self {
            database_url,
            bind_addr,
            database_max_connections,
            frontend_origins,
            default_country,
        })
    }

    pub fn books_config(&self) -> BooksConfig {
        match &self.default_country {
            Some(country) => BooksConfig::default().with_default_country(country.clone()),
            None => BooksConfig::default(),
        }
    }

    pub fn cors_layer(&self) -> CorsLayer {
        let cors = CorsLayer::new()
            .allow_methods(AllowMethods::list([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ]))
            .allow_headers(AllowHeaders::list([
                header::CONTENT_TYPE,
                header::AUTHORIZATION,
                header::ACCEPT,
            ]));

        match &self.frontend_origins {
            AllowedOrigins::Any => cors.allow_origin(Any),
            AllowedOrigins::List(origins) => cors
                .allow_origin(origins.clone())
                .allow_credentials(true),
        }
    }
}

fn parse_origins(raw: &str) -> AllowedOrigins {
    let entries: Vec<&str> = raw
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .collect();

    if entries.is_empty() || entries.contains(&"*") {
        return AllowedOrigins::Any;
    }

    let origins = entries
        .into_iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    AllowedOrigins::List(origins)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> anyhow::Result<ApiConfig> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ApiConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[("DATABASE_URL", "postgres://localhost/books")]).unwrap();

        assert_eq!(config.database_url, "postgres://localhost/books");
        assert_eq!(config.bind_addr, "0.0.0.0:3000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.database_max_connections, 5);
        assert_eq!(config.frontend_origins, AllowedOrigins::Any);
        assert!(config.default_country.is_none());
        assert_eq!(
            config.books_config().defaults.country.as_deref(),
            Some("United States")
        );
    }

    #[test]
    fn test_database_url_is_required() {
        let err = config_from(&[]).unwrap_err();
        assert!(err.to_string().contains("DATABASE_URL"));
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("DATABASE_URL", "postgres://db/books"),
            ("BIND_ADDR", "127.0.0.1:8080"),
            ("DATABASE_MAX_CONNECTIONS", "12"),
            ("FRONTEND_ORIGINS", "http://localhost:5173, https://books.example.com"),
            ("BOOKS_DEFAULT_COUNTRY", "India"),
        ])
        .unwrap();

        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.database_max_connections, 12);
        assert_eq!(
            config.frontend_origins,
            AllowedOrigins::List(vec![
                HeaderValue::from_static("http://localhost:5173"),
                HeaderValue::from_static("https://books.example.com"),
            ])
        );
        assert_eq!(config.books_config().defaults.country.as_deref(), Some("India"));
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(
            config_from(&[("DATABASE_URL", "postgres://db"), ("BIND_ADDR", "nowhere")]).is_err()
        );
        assert!(
            config_from(&[
                ("DATABASE_URL", "postgres://db"),
                ("DATABASE_MAX_CONNECTIONS", "many")
            ])
            .is_err()
        );
        assert!(
            config_from(&[
                ("DATABASE_URL", "postgres://db"),
                ("DATABASE_MAX_CONNECTIONS", "0")
            ])
            .is_err()
        );
    }

    #[test]
    fn test_wildcard_origin_wins() {
        assert_eq!(parse_origins("http://a.test,*"), AllowedOrigins::Any);
        assert_eq!(parse_origins(" "), AllowedOrigins::Any);
    }
}
