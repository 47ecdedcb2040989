// Протокол sidecar: один JSON-запрос на stdin, один JSON-ответ на stdout

pub mod messages;
pub mod wire;

pub use messages::{Action, Request, Response};
