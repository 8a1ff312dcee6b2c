//! HTTP handler modules.
//! Used by: server.

pub mod bearer;
pub mod check;
pub mod decode;
pub mod health;
pub mod issue;
