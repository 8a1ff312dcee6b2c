//! Bearer token claims, signing, verification, and the service tying them together.
//! Used by: handlers, state.

pub mod claims;
pub mod service;
pub mod sign;
pub mod verify;

pub use claims::Claims;
pub use service::TokenService;
pub use verify::Verification;
