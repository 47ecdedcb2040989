//! Конфигурация процесса sidecar
//!
//! The action set is fixed; only process-level behaviour (exit code policy,
//! diagnostic logging) is tunable, and only through the environment.

use std::sync::OnceLock;

/// Env var enabling non-zero exit codes for failed requests
pub const STRICT_EXIT_ENV: &str = "SIDECAR_STRICT_EXIT";

/// Env var holding the `EnvFilter` directive for diagnostic logs
pub const LOG_FILTER_ENV: &str = "SIDECAR_LOG";

/// Глобальная конфигурация (синглтон)
static GLOBAL_CONFIG: OnceLock<Config> = OnceLock::new();

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Exit with code 1 when the response reports `success: false`.
    /// Off by default: callers only inspect the JSON body.
    pub strict_exit: bool,

    /// Log filter directive, e.g. `debug` or `sidecar::api=trace`.
    /// `None` keeps stderr silent.
    pub log_filter: Option<String>,
}

impl Config {
    /// Создать конфигурацию из переменных окружения
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Config::from_env`], reading values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(val) = lookup(STRICT_EXIT_ENV) {
            if let Some(parsed) = parse_flag(&val) {
                config.strict_exit = parsed;
            }
        }

        if let Some(val) = lookup(LOG_FILTER_ENV) {
            let trimmed = val.trim();
            if !trimmed.is_empty() {
                config.log_filter = Some(trimmed.to_string());
            }
        }

        config
    }

    /// Получить глобальный экземпляр конфигурации
    ///
    /// Falls back to defaults if nothing was initialized first.
    pub fn global() -> &'static Config {
        GLOBAL_CONFIG.get_or_init(Config::default)
    }

    /// Set the global config, once per process.
    ///
    /// # Errors
    ///
    /// Returns an error if the global config is already set.
    pub fn init_with(config: Config) -> Result<(), &'static str> {
        GLOBAL_CONFIG
            .set(config)
            .map_err(|_| "Config already initialized")
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
