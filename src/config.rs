//! Process configuration from flags with environment fallbacks.
//! Used by: main, state, token::service.

use std::net::{IpAddr, SocketAddr};

use clap::Parser;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing HTTP port")]
    MissingPort,

    #[error("invalid port number: {0}")]
    InvalidPort(String),

    #[error("invalid bind address: {0}")]
    InvalidBind(String),

    #[error("missing key")]
    MissingKey,

    #[error("missing token duration")]
    MissingDuration,

    #[error("invalid token duration: {0}")]
    InvalidDuration(String),
}

/// Raw command line. Flags take precedence over the `JWT_*` variables.
#[derive(Parser, Debug)]
#[command(about = "Issue and validate HMAC-signed bearer tokens", long_about = None)]
pub struct Args {
    /// The port to listen on
    #[arg(long, env = "JWT_PORT")]
    pub port: Option<String>,

    /// The address to bind
    #[arg(long, env = "JWT_BIND", default_value = "0.0.0.0")]
    pub bind: String,

    /// The token key
    #[arg(long, env = "JWT_KEY", hide_env_values = true)]
    pub key: Option<String>,

    /// The token validity duration (in seconds)
    #[arg(long, env = "JWT_DURATION")]
    pub duration: Option<String>,

    /// The token issuer
    #[arg(long, env = "JWT_ISSUER")]
    pub issuer: Option<String>,

    /// The token audience
    #[arg(long, env = "JWT_AUDIENCE")]
    pub audience: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub token: TokenConfig,
}

impl Config {
    pub fn from_args(args: Args) -> Result<Self, ConfigError> {
        let port = non_empty(args.port).ok_or(ConfigError::MissingPort)?;
        let port: u16 = port
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidPort(port.clone()))?;
        let ip: IpAddr = args
            .bind
            .parse()
            .map_err(|_| ConfigError::InvalidBind(args.bind.clone()))?;

        let key = non_empty(args.key).ok_or(ConfigError::MissingKey)?;
        let duration = non_empty(args.duration).ok_or(ConfigError::MissingDuration)?;
        let secs: i64 = duration
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidDuration(duration.clone()))?;

        Ok(Self {
            addr: SocketAddr::new(ip, port),
            token: TokenConfig::new(key, secs, args.issuer, args.audience)?,
        })
    }

    pub fn load() -> Result<Self, ConfigError> {
        Self::from_args(Args::parse())
    }
}

/// Validated token policy: a non-empty secret and a positive lifetime.
#[derive(Clone)]
pub struct TokenConfig {
    key: String,
    expiration_secs: i64,
    issuer: Option<String>,
    audience: Option<String>,
}

impl TokenConfig {
    pub fn new(
        key: String,
        expiration_secs: i64,
        issuer: Option<String>,
        audience: Option<String>,
    ) -> Result<Self, ConfigError> {
        if key.is_empty() {
            return Err(ConfigError::MissingKey);
        }
        if expiration_secs <= 0 {
            return Err(ConfigError::InvalidDuration(expiration_secs.to_string()));
        }
        Ok(Self {
            key,
            expiration_secs,
            issuer: non_empty(issuer),
            audience: non_empty(audience),
        })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn expiration_secs(&self) -> i64 {
        self.expiration_secs
    }

    pub fn issuer(&self) -> Option<&str> {
        self.issuer.as_deref()
    }

    pub fn audience(&self) -> Option<&str> {
        self.audience.as_deref()
    }
}

impl std::fmt::Debug for TokenConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenConfig")
            .field("key", &"<redacted>")
            .field("expiration_secs", &self.expiration_secs)
            .field("issuer", &self.issuer)
            .field("audience", &self.audience)
            .finish()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
