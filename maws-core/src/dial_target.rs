use std::net::Ipv6Addr;

use multiaddr::{Multiaddr, Protocol};
use thiserror::Error;
use url::Url;

use crate::Scheme;

/// A resolved WebSocket dial target.
///
/// Produced by walking a multiaddr such as
/// `/ip4/127.0.0.1/tcp/8080/tls/sni/example.com/ws` left to right. The host
/// is the single value a dialer should use for this target: the SNI
/// override when the address carried one, the literal network address
/// otherwise. A target is immutable once produced.
///
/// ## Examples
///
/// ```rust
/// use maws_core::{Scheme, WsDialTarget};
///
/// let addr = "/dns/example.com/tcp/443/tls/ws".parse().unwrap();
/// let target = WsDialTarget::from_multiaddr(&addr).unwrap();
///
/// assert_eq!(target.host(), "example.com");
/// assert_eq!(target.port(), 443);
/// assert_eq!(target.scheme(), Scheme::Wss);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WsDialTarget {
    host: String,
    port: u16,
    scheme: Scheme,
}

impl WsDialTarget {
    /// Translate a multiaddr into a dial target.
    ///
    /// The walk is a single pass. Network-address and `tcp` components fill
    /// in the host and port (first occurrence wins), `tls` marks the target
    /// as secured and may be immediately followed by an `sni` override, and
    /// `ws`/`wss` terminate the walk. `wss` is the legacy combined form of
    /// `/tls/ws` and carries no SNI option of its own. Components this
    /// transport does not understand are skipped.
    pub fn from_multiaddr(addr: &Multiaddr) -> Result<Self, WsAddrError> {
        let mut host: Option<String> = None;
        let mut port: Option<u16> = None;
        let mut secure = false;
        let mut sni: Option<String> = None;

        let mut components = addr.iter().peekable();
        while let Some(component) = components.next() {
            match component {
                Protocol::Ip4(ip) => {
                    if host.is_none() {
                        host = Some(ip.to_string());
                    }
                }
                Protocol::Ip6(ip) => {
                    if host.is_none() {
                        host = Some(ip.to_string());
                    }
                }
                Protocol::Dns(name) | Protocol::Dns4(name) | Protocol::Dns6(name) => {
                    if host.is_none() {
                        host = Some(name.into_owned());
                    }
                }
                Protocol::Tcp(p) => {
                    if port.is_none() {
                        port = Some(p);
                    }
                }
                Protocol::Tls => {
                    secure = true;
                    // an sni component only has meaning directly after tls
                    if let Some(Protocol::Sni(_)) = components.peek() {
                        if let Some(Protocol::Sni(name)) = components.next() {
                            sni = Some(name.into_owned());
                        }
                    }
                }
                Protocol::Wss(_) => {
                    return Self::finish(host, port, true, sni);
                }
                Protocol::Ws(_) => {
                    return Self::finish(host, port, secure, sni);
                }
                _ => {}
            }
        }

        Err(WsAddrError::NotWebSocket)
    }

    fn finish(
        host: Option<String>,
        port: Option<u16>,
        secure: bool,
        sni: Option<String>,
    ) -> Result<Self, WsAddrError> {
        let host = host.ok_or(WsAddrError::MissingHost)?;
        let port = port.ok_or(WsAddrError::MissingPort)?;
        Ok(WsDialTarget {
            host: sni.unwrap_or(host),
            port,
            scheme: if secure { Scheme::Wss } else { Scheme::Ws },
        })
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    /// Render the target as a `ws://` or `wss://` URL for a dialing
    /// collaborator.
    ///
    /// IPv6 hosts are bracketed. The `url` crate knows `ws` and `wss` as
    /// special schemes, so [`Url::port`] elides the default ports 80 and
    /// 443; [`WsDialTarget::port`] always holds the literal value from the
    /// address.
    pub fn to_url(&self) -> Result<Url, WsAddrError> {
        let url = if self.host.parse::<Ipv6Addr>().is_ok() {
            format!("{}://[{}]:{}/", self.scheme, self.host, self.port)
        } else {
            format!("{}://{}:{}/", self.scheme, self.host, self.port)
        };
        Ok(Url::parse(&url)?)
    }
}

/// The reasons a multiaddr cannot be translated into a [`WsDialTarget`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WsAddrError {
    /// The address is a valid multiaddr describing some other transport.
    #[error("not a websocket multiaddr: no /ws or /wss component")]
    NotWebSocket,
    /// A `/ws` or `/wss` component was reached before any network address.
    #[error("websocket multiaddr has no host component")]
    MissingHost,
    /// A `/ws` or `/wss` component was reached before any tcp component.
    #[error("websocket multiaddr has no tcp port component")]
    MissingPort,
    /// The resolved target does not form a valid URL.
    #[error("websocket multiaddr does not form a dialable url: {0}")]
    InvalidUrl(#[from] url::ParseError),
}
