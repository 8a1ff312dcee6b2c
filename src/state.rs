//! Shared application state.

use std::sync::Arc;

use crate::config::TokenConfig;
use crate::token::TokenService;

pub struct AppStateInner {
    pub tokens: TokenService,
}

pub type AppState = Arc<AppStateInner>;

pub fn build_state(config: &TokenConfig) -> AppState {
    Arc::new(AppStateInner {
        tokens: TokenService::new(config),
    })
}

#[cfg(test)]
pub fn build_test_state() -> crate::error::Result<AppState> {
    let config = TokenConfig::new(
        "abcdefghijklmnopqrstuvwxyz0123456789".into(),
        42,
        Some("test_issuer".into()),
        Some("test_audience".into()),
    )?;
    Ok(build_state(&config))
}
