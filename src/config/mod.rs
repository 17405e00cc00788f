use std::env;

use lazy_static::lazy_static;
use log::warn;

lazy_static! {
    pub static ref CONFIG: Config = Config::from_env();
}

pub const DEFAULT_SERVER_HOST: &str = "127.0.0.1";
pub const DEFAULT_SERVER_PORT: u16 = 8080;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        Self {
            server_host: env::var("SERVER_HOST")
                .unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            server_port: parse_port(env::var("SERVER_PORT").ok().as_deref()),
        }
    }

    /// Address the HTTP server binds to.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

/// Parse `SERVER_PORT`, falling back to the default when unset or invalid.
fn parse_port(raw: Option<&str>) -> u16 {
    match raw {
        None => DEFAULT_SERVER_PORT,
        Some(value) => value.trim().parse().unwrap_or_else(|_| {
            warn!(
                "SERVER_PORT '{}' is not a valid port, using {}",
                value, DEFAULT_SERVER_PORT
            );
            DEFAULT_SERVER_PORT
        }),
    }
}
