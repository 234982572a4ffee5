use std::sync::Arc;

use crate::Transport;

/// Builder for [`Transport`].
///
/// All configuration is optional and `build` cannot fail. The TLS client
/// configuration is only consulted when preparing a secured dial, never
/// during address translation.
#[derive(Default)]
pub struct TransportBuilder {
    tls_config: Option<Arc<rustls::ClientConfig>>,
}

impl TransportBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `config` as the shared TLS client configuration for secured
    /// dials.
    pub fn with_tls_config(mut self, config: Arc<rustls::ClientConfig>) -> Self {
        self.tls_config = Some(config);
        self
    }

    pub fn build(self) -> Transport {
        Transport {
            tls_config: self.tls_config,
        }
    }
}
