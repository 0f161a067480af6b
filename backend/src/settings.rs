//! Server settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `EMPLOYEES_*` environment variables or a
//! configuration file, in increasing order of precedence from file to CLI.

use std::io;
use std::net::{SocketAddr, ToSocketAddrs};

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_ADDRESS: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Configuration values controlling the HTTP listener and persistence.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "EMPLOYEES")]
pub struct ServerSettings {
    /// Host name or IP address to bind.
    pub address: Option<String>,
    /// TCP port to bind.
    pub port: Option<u16>,
    /// PostgreSQL connection URL. Without it the in-memory store is used.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    pub max_connections: Option<u32>,
    /// Apply embedded migrations before serving traffic.
    #[ortho_config(default = false)]
    pub run_migrations: bool,
}

impl ServerSettings {
    pub fn address(&self) -> &str {
        self.address.as_deref().unwrap_or(DEFAULT_ADDRESS)
    }

    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    pub fn max_connections(&self) -> u32 {
        self.max_connections.unwrap_or(DEFAULT_MAX_CONNECTIONS)
    }

    /// Database URL, ignoring blank values.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Resolve the listener address.
    ///
    /// # Errors
    ///
    /// Returns an [`io::Error`] when the address cannot be resolved.
    pub fn bind_addr(&self) -> io::Result<SocketAddr> {
        (self.address(), self.port())
            .to_socket_addrs()?
            .next()
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("address {} resolved to nothing", self.address()),
                )
            })
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for server settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 5] = [
        "EMPLOYEES_ADDRESS",
        "EMPLOYEES_PORT",
        "EMPLOYEES_DATABASE_URL",
        "EMPLOYEES_MAX_CONNECTIONS",
        "EMPLOYEES_RUN_MIGRATIONS",
    ];

    fn load_from_empty_args() -> ServerSettings {
        ServerSettings::load_from_iter([OsString::from("employees-backend")])
            .expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let settings = load_from_empty_args();

        assert_eq!(settings.address(), "0.0.0.0");
        assert_eq!(settings.port(), 8080);
        assert_eq!(settings.max_connections(), 10);
        assert!(settings.database_url().is_none());
        assert!(!settings.run_migrations);
        assert_eq!(
            settings.bind_addr().expect("bind address"),
            "0.0.0.0:8080".parse::<SocketAddr>().expect("socket address")
        );
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("EMPLOYEES_ADDRESS", Some("127.0.0.1".to_owned())),
            ("EMPLOYEES_PORT", Some("9090".to_owned())),
            (
                "EMPLOYEES_DATABASE_URL",
                Some("postgres://localhost/employees".to_owned()),
            ),
            ("EMPLOYEES_MAX_CONNECTIONS", Some("4".to_owned())),
            ("EMPLOYEES_RUN_MIGRATIONS", Some("true".to_owned())),
        ]);

        let settings = load_from_empty_args();

        assert_eq!(
            settings.bind_addr().expect("bind address"),
            "127.0.0.1:9090".parse::<SocketAddr>().expect("socket address")
        );
        assert_eq!(
            settings.database_url(),
            Some("postgres://localhost/employees")
        );
        assert_eq!(settings.max_connections(), 4);
        assert!(settings.run_migrations);
    }

    #[rstest]
    fn blank_database_url_selects_in_memory_store() {
        let mut vars = VARS.map(|name| (name, None::<String>));
        vars[2].1 = Some("   ".to_owned());
        let _guard = lock_env(vars);

        let settings = load_from_empty_args();

        assert!(settings.database_url().is_none());
    }
}
