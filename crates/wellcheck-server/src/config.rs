use std::env;
use std::net::SocketAddr;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use wellcheck_export::view::CrisisResources;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// One JSON object per event.
    #[default]
    Json,
    Pretty,
}

impl FromStr for LogFormat {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" | "text" => Ok(LogFormat::Pretty),
            other => Err(eyre::eyre!("unknown log format '{other}' (expected json or pretty)")),
        }
    }
}

/// Runtime settings, read from `WELLCHECK_*` environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    pub log_format: LogFormat,
    pub crisis: CrisisResources,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 5000)),
            log_format: LogFormat::default(),
            crisis: CrisisResources::default(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup. Unset or blank keys keep their
    /// defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let bind = match get("WELLCHECK_BIND") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|e| eyre::eyre!("invalid WELLCHECK_BIND '{raw}': {e}"))?,
            None => defaults.bind,
        };

        let log_format = match get("WELLCHECK_LOG_FORMAT") {
            Some(raw) => raw.parse()?,
            None => defaults.log_format,
        };

        let crisis = CrisisResources {
            local: get("WELLCHECK_CRISIS_LOCAL").unwrap_or(defaults.crisis.local),
            global: get("WELLCHECK_CRISIS_GLOBAL").unwrap_or(defaults.crisis.global),
        };

        Ok(Self {
            bind,
            log_format,
            crisis,
        })
    }
}
