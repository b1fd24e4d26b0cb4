use anyhow::Context;
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::info;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_STATIC_DIR: &str = "static";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }
}

impl Config {
    /// Reads `HOST`, `PORT` and `STATIC_DIR` from the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Self::default();

        let host = lookup("HOST").unwrap_or_else(|| {
            info!("HOST not set, using default: {}", defaults.host);
            defaults.host
        });

        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("invalid PORT value: {raw}"))?,
            None => {
                info!("PORT not set, using default: {}", defaults.port);
                defaults.port
            }
        };

        let static_dir = lookup("STATIC_DIR").map(PathBuf::from).unwrap_or_else(|| {
            info!(
                "STATIC_DIR not set, using default: {}",
                defaults.static_dir.display()
            );
            defaults.static_dir
        });

        Ok(Self {
            host,
            port,
            static_dir,
        })
    }

    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid listen address {}:{}", self.host, self.port))
    }
}
