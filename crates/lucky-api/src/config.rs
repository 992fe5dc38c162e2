//! Server configuration read from environment variables.

use std::net::SocketAddr;
use std::time::Duration as StdDuration;

use chrono::Duration;

use crate::error::AppError;
use crate::i18n::Language;

/// Runtime configuration for the API server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Interface to bind (`HOST`, default `0.0.0.0`).
    pub host: String,
    /// Port to bind (`PORT`, default `3000`).
    pub port: u16,
    /// Language used when a request does not ask for one (`DEFAULT_LANGUAGE`).
    pub default_language: Language,
    /// Fixed RNG seed (`RNG_SEED`); OS entropy when unset.
    pub rng_seed: Option<u64>,
    /// How long a session may go unsaved before it is evicted
    /// (`SESSION_IDLE_SECS`, default one hour).
    pub session_idle: Duration,
}

impl AppConfig {
    /// Reads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is present but malformed.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, which returns a variable's value
    /// if it is set.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is present but malformed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = lookup("PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse()
            .map_err(|e| AppError::Config(format!("PORT must be a valid u16: {e}")))?;
        let default_language = match lookup("DEFAULT_LANGUAGE") {
            Some(raw) => raw
                .parse()
                .map_err(|e| AppError::Config(format!("DEFAULT_LANGUAGE: {e}")))?,
            None => Language::default(),
        };
        let rng_seed = lookup("RNG_SEED")
            .map(|raw| raw.parse::<u64>())
            .transpose()
            .map_err(|e| AppError::Config(format!("RNG_SEED must be a valid u64: {e}")))?;
        let session_idle = match lookup("SESSION_IDLE_SECS") {
            Some(raw) => parse_idle_secs(&raw)?,
            None => Duration::hours(1),
        };

        Ok(Self {
            host,
            port,
            default_language,
            rng_seed,
            session_idle,
        })
    }

    /// How often the idle-session sweep runs: a quarter of the idle timeout,
    /// but at least once a second.
    #[must_use]
    pub fn sweep_interval(&self) -> StdDuration {
        let secs = u64::try_from(self.session_idle.num_seconds() / 4).unwrap_or(0);
        StdDuration::from_secs(secs.max(1))
    }

    /// The socket address to listen on.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `host` and `port` do not form an address.
    pub fn socket_addr(&self) -> Result<SocketAddr, AppError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| AppError::Config(format!("invalid HOST:PORT combination: {e}")))
    }
}

fn parse_idle_secs(raw: &str) -> Result<Duration, AppError> {
    let invalid = || AppError::Config(format!("SESSION_IDLE_SECS must be a positive u64: {raw}"));
    let secs: i64 = raw.parse().map_err(|_| invalid())?;
    if secs <= 0 {
        return Err(invalid());
    }
    Duration::try_seconds(secs).ok_or_else(invalid)
}
