use std::sync::Arc;

use maws_core::{WsAddrError, WsDialTarget};
use multiaddr::Multiaddr;
use url::Url;

use crate::{ClientTls, ClientTlsError, TransportBuilder};

/// A WebSocket transport handle.
///
/// The handle owns the configuration shared by every dial (an optional TLS
/// client configuration) and exposes the address translation operations
/// bound to it. It is cheap to clone and safe to share between tasks;
/// nothing in it is mutated after construction.
#[derive(Clone)]
pub struct Transport {
    pub(crate) tls_config: Option<Arc<rustls::ClientConfig>>,
}

impl std::fmt::Debug for Transport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transport")
            .field("has_tls_config", &self.tls_config.is_some())
            .finish()
    }
}

impl Transport {
    /// Create a handle with all-default configuration.
    ///
    /// A default handle translates and checks addresses like any other;
    /// [`Transport::client_tls`] will refuse secured targets until a TLS
    /// client configuration is provided via [`Transport::builder`].
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> TransportBuilder {
        TransportBuilder::new()
    }

    /// Whether this transport knows how to dial `addr`.
    ///
    /// Equivalent to [`Transport::dial_target`] succeeding on `addr`. This
    /// performs no I/O and keeps no state between calls; an address a peer
    /// advertises for some other transport is simply reported as not
    /// dialable so the caller can move on to its next address.
    pub fn can_dial(&self, addr: &Multiaddr) -> bool {
        match WsDialTarget::from_multiaddr(addr) {
            Ok(_) => true,
            Err(reason) => {
                tracing::trace!("multiaddr {} is not dialable: {}", addr, reason);
                false
            }
        }
    }

    /// Translate `addr` into a dial target.
    pub fn dial_target(&self, addr: &Multiaddr) -> Result<WsDialTarget, WsAddrError> {
        WsDialTarget::from_multiaddr(addr)
    }

    /// Translate `addr` into the URL a WebSocket dialer should connect to.
    pub fn dial_url(&self, addr: &Multiaddr) -> Result<Url, WsAddrError> {
        self.dial_target(addr)?.to_url()
    }

    /// Select the TLS client parameters for `target`.
    ///
    /// Returns `None` for plain `ws` targets. For `wss` targets this is the
    /// shared client configuration together with the server name to present
    /// in the handshake. The server name is the target host, which is the
    /// SNI override when the address carried one.
    pub fn client_tls(&self, target: &WsDialTarget) -> Result<Option<ClientTls>, ClientTlsError> {
        if !target.scheme().is_secure() {
            return Ok(None);
        }
        let config = self
            .tls_config
            .clone()
            .ok_or(ClientTlsError::NoClientConfig)?;
        let server_name = rustls::pki_types::ServerName::try_from(target.host().to_string())
            .map_err(ClientTlsError::InvalidServerName)?;
        Ok(Some(ClientTls::new(config, server_name)))
    }
}

impl Default for Transport {
    fn default() -> Self {
        Self::new()
    }
}
