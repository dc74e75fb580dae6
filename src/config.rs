use lp_core::LadderPolicy;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{name} must be a valid {expected}, got '{value}'")]
    Invalid {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogConfig {
    pub file_path: String,
    pub archive_pattern: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub db_path: String,
    pub http_port: u16,
    pub ladder_policy: LadderPolicy,
    pub log: LogConfig,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |name: &'static str| lookup(name).ok_or(ConfigError::Missing(name));

        let http_port = required("LP_HTTP_API_PORT")?;
        let http_port = http_port.parse::<u16>().map_err(|_| ConfigError::Invalid {
            name: "LP_HTTP_API_PORT",
            expected: "u16",
            value: http_port,
        })?;

        let demotion = match lookup("LP_LADDER_DEMOTION") {
            None => false,
            Some(value) => match value.trim().to_lowercase().as_str() {
                "" | "0" | "false" => false,
                "1" | "true" => true,
                _ => {
                    return Err(ConfigError::Invalid {
                        name: "LP_LADDER_DEMOTION",
                        expected: "boolean",
                        value,
                    });
                }
            },
        };

        Ok(Self {
            db_path: required("LP_TRACKER_DB")?,
            http_port,
            ladder_policy: LadderPolicy::from_demotion_flag(demotion),
            log: LogConfig {
                file_path: required("LOG_FILE_PATH")?,
                archive_pattern: required("LOG_ARCHIVE_PATTERN")?,
            },
        })
    }
}
