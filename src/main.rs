//! Stateless issuing and validation of HMAC-signed bearer tokens.
//! Used by: binary entrypoint.

pub mod config;
pub mod error;
pub mod handlers;
pub mod server;
pub mod state;
pub mod token;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = match config::Config::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            return Err(e.into());
        }
    };

    let state = state::build_state(&config.token);
    tracing::info!(
        issuer = config.token.issuer().unwrap_or_default(),
        audience = config.token.audience().unwrap_or_default(),
        lifetime_secs = config.token.expiration_secs(),
        "starting jwt-service on {}",
        config.addr
    );

    server::run(state, config.addr).await?;
    Ok(())
}
