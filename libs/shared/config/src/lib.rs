use std::env;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;

use tracing::warn;

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_CATALOG_PATH: &str = "knowledge_base.json";

/// How `/book_appointment` treats incomplete payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BookingPolicy {
    /// Typed payload; required fields must be present.
    #[default]
    Strict,
    /// Any JSON accepted; missing fields are filled with demo defaults.
    Lenient,
}

impl FromStr for BookingPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(BookingPolicy::Strict),
            "lenient" => Ok(BookingPolicy::Lenient),
            other => Err(format!("unknown booking policy '{}'", other)),
        }
    }
}

impl fmt::Display for BookingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookingPolicy::Strict => write!(f, "strict"),
            BookingPolicy::Lenient => write!(f, "lenient"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    pub catalog_path: PathBuf,
    pub booking_policy: BookingPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
            booking_policy: BookingPolicy::Strict,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup so parsing can be
    /// exercised without touching the process environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = match lookup("HOST") {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                warn!("HOST '{}' is not a valid IP address, using {}", raw, defaults.host);
                defaults.host
            }),
            None => defaults.host,
        };

        let port = match lookup("PORT") {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                warn!("PORT '{}' is not a valid port, using {}", raw, defaults.port);
                defaults.port
            }),
            None => defaults.port,
        };

        let catalog_path = lookup("CATALOG_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| {
                warn!("CATALOG_PATH not set, using {}", DEFAULT_CATALOG_PATH);
                defaults.catalog_path.clone()
            });

        let booking_policy = match lookup("BOOKING_POLICY") {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                warn!("{}, falling back to {}", e, defaults.booking_policy);
                defaults.booking_policy
            }),
            None => defaults.booking_policy,
        };

        Self {
            host,
            port,
            catalog_path,
            booking_policy,
        }
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
