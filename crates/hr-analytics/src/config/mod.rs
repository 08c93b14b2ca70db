use std::env;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

const ENV_STAGE: &str = "APP_ENV";
const ENV_HOST: &str = "APP_HOST";
const ENV_PORT: &str = "APP_PORT";
const ENV_LOG_LEVEL: &str = "APP_LOG_LEVEL";
const ENV_DATASET: &str = "HR_DATASET_PATH";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_LOG_LEVEL: &str = "info";

/// Deployment stage the analytics service runs in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AppEnvironment {
    #[default]
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Everything the HR analytics service reads from `.env` and the process environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub dataset: DatasetConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            environment: var(ENV_STAGE)
                .map(|stage| AppEnvironment::parse(&stage))
                .unwrap_or_default(),
            server: ServerConfig::from_env()?,
            telemetry: TelemetryConfig {
                log_level: var(ENV_LOG_LEVEL).unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            },
            dataset: DatasetConfig::from_env()?,
        })
    }
}

fn var(key: &str) -> Option<String> {
    env::var(key).ok()
}

/// Address the HTTP API listens on.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let port = match var(ENV_PORT) {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            host: var(ENV_HOST).unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
        })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip = if self.host.eq_ignore_ascii_case("localhost") {
            IpAddr::V4(Ipv4Addr::LOCALHOST)
        } else {
            self.host
                .parse()
                .map_err(|source| ConfigError::InvalidHost {
                    host: self.host.clone(),
                    source,
                })?
        };

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Default `EnvFilter` directive when `RUST_LOG` is unset.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Employee CSV export loaded into the store at startup, if any.
#[derive(Debug, Clone, Default)]
pub struct DatasetConfig {
    pub path: Option<PathBuf>,
}

impl DatasetConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let path = match var(ENV_DATASET) {
            Some(raw) if raw.trim().is_empty() => return Err(ConfigError::EmptyDatasetPath),
            Some(raw) => Some(PathBuf::from(raw.trim())),
            None => None,
        };
        Ok(Self { path })
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort(String),
    InvalidHost {
        host: String,
        source: std::net::AddrParseError,
    },
    EmptyDatasetPath,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort(raw) => {
                write!(f, "{ENV_PORT} must be a port number (found '{raw}')")
            }
            ConfigError::InvalidHost { host, .. } => {
                write!(f, "{ENV_HOST} must be an IP address or localhost (found '{host}')")
            }
            ConfigError::EmptyDatasetPath => {
                write!(f, "{ENV_DATASET} is set but empty; unset it or point it at a CSV file")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source, .. } => Some(source),
            ConfigError::InvalidPort(_) | ConfigError::EmptyDatasetPath => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, MutexGuard, OnceLock};

    /// Serializes tests that touch process-wide variables and starts each from a clean slate.
    fn clean_env() -> MutexGuard<'static, ()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        let lock = GUARD
            .get_or_init(|| Mutex::new(()))
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        for key in [ENV_STAGE, ENV_HOST, ENV_PORT, ENV_LOG_LEVEL, ENV_DATASET] {
            env::remove_var(key);
        }
        lock
    }

    #[test]
    fn defaults_apply_without_variables() {
        let _env = clean_env();
        let config = AppConfig::load().expect("defaults load");

        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(
            config.server.socket_addr().expect("default address"),
            SocketAddr::from(([127, 0, 0, 1], DEFAULT_PORT))
        );
        assert_eq!(config.telemetry.log_level, "info");
        assert!(config.dataset.path.is_none());
    }

    #[test]
    fn stage_aliases_are_recognised() {
        assert_eq!(AppEnvironment::parse(" PROD "), AppEnvironment::Production);
        assert_eq!(AppEnvironment::parse("ci"), AppEnvironment::Test);
        assert_eq!(AppEnvironment::parse("staging"), AppEnvironment::Development);
    }

    #[test]
    fn localhost_binds_loopback() {
        let _env = clean_env();
        env::set_var(ENV_HOST, "localhost");
        env::set_var(ENV_PORT, "8081");

        let config = AppConfig::load().expect("config loads");
        assert_eq!(
            config.server.socket_addr().expect("localhost resolves"),
            SocketAddr::from(([127, 0, 0, 1], 8081))
        );
    }

    #[test]
    fn bad_port_and_host_name_the_offending_value() {
        let _env = clean_env();
        env::set_var(ENV_PORT, "eighty");
        let error = AppConfig::load().expect_err("port must be numeric");
        assert!(matches!(&error, ConfigError::InvalidPort(raw) if raw == "eighty"));
        assert!(error.to_string().contains("'eighty'"));

        env::remove_var(ENV_PORT);
        env::set_var(ENV_HOST, "hr.internal");
        let config = AppConfig::load().expect("host is checked at bind time");
        let error = config.server.socket_addr().expect_err("not an ip");
        assert!(error.to_string().contains("'hr.internal'"));
    }

    #[test]
    fn dataset_path_is_trimmed_and_blank_is_rejected() {
        let _env = clean_env();
        env::set_var(ENV_DATASET, " data/employees.csv ");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(
            config.dataset.path,
            Some(PathBuf::from("data/employees.csv"))
        );

        env::set_var(ENV_DATASET, "   ");
        let error = AppConfig::load().expect_err("blank path rejected");
        assert!(matches!(error, ConfigError::EmptyDatasetPath));
    }
}
