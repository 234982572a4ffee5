mod builder;
pub use builder::TransportBuilder;
mod tls;
pub use tls::{ClientTls, ClientTlsError};
mod transport;
pub use transport::Transport;

pub use maws_core::{Scheme, WsAddrError, WsDialTarget};
pub use multiaddr::Multiaddr;
