// Base64 sidecar
// One JSON request on stdin, one JSON response on stdout

#![warn(clippy::all)]

// Модули
pub mod api;
pub mod config;
pub mod protocol;
pub mod utils;

// Re-exports для удобства
pub use api::SidecarAPI;
pub use config::Config;
pub use protocol::{Action, Request, Response};
pub use utils::error::{Result, SidecarError};
