pub mod b64;
pub mod error;
pub mod logging;
