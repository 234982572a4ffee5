use std::sync::Arc;

use rustls::pki_types::{InvalidDnsNameError, ServerName};

/// The TLS client parameters for one secured dial.
///
/// Returned by [`Transport::client_tls`](crate::Transport::client_tls). The
/// configuration is the one shared by the transport handle; the server name
/// is per-target.
#[derive(Debug, Clone)]
pub struct ClientTls {
    config: Arc<rustls::ClientConfig>,
    server_name: ServerName<'static>,
}

impl ClientTls {
    pub(crate) fn new(config: Arc<rustls::ClientConfig>, server_name: ServerName<'static>) -> Self {
        Self {
            config,
            server_name,
        }
    }

    pub fn config(&self) -> &Arc<rustls::ClientConfig> {
        &self.config
    }

    /// The server name to present in the TLS handshake.
    pub fn server_name(&self) -> &ServerName<'static> {
        &self.server_name
    }
}

/// Error returned when the TLS client parameters for a secured target
/// cannot be assembled.
#[derive(Debug)]
pub enum ClientTlsError {
    /// The transport handle was built without a TLS client configuration.
    NoClientConfig,
    /// The target host is not usable as a TLS server name.
    InvalidServerName(InvalidDnsNameError),
}

impl std::fmt::Display for ClientTlsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClientTlsError::NoClientConfig => {
                write!(f, "no TLS client configuration was provided for this transport")
            }
            ClientTlsError::InvalidServerName(e) => {
                write!(f, "target host is not a valid TLS server name: {}", e)
            }
        }
    }
}

impl std::error::Error for ClientTlsError {}
