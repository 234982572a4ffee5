mod dial_target;
pub use dial_target::{WsAddrError, WsDialTarget};
mod scheme;
pub use scheme::Scheme;
