use std::sync::Arc;

use maws::{Multiaddr, Scheme, Transport, WsAddrError};
use rustls::pki_types::ServerName;

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn addr(s: &str) -> Multiaddr {
    s.parse().expect("valid multiaddr")
}

/// Helper: a TLS client configuration that is valid to construct but never
/// used for an actual handshake in these tests.
fn tls_config() -> Arc<rustls::ClientConfig> {
    Arc::new(
        rustls::ClientConfig::builder()
            .with_root_certificates(rustls::RootCertStore::empty())
            .with_no_client_auth(),
    )
}

#[test]
fn can_dial() {
    init_logging();
    let transport = Transport::new();

    let cases = [
        ("/ip4/49.12.172.37/tcp/32530/tls/sni/example.com/ws", true),
        ("/ip4/127.0.0.1/tcp/8080/tls/ws", true),
        ("/ip4/127.0.0.1/tcp/8080/ws", true),
        ("/ip4/127.0.0.1/tcp/8080/wss", true),
        ("/ip4/127.0.0.1/tcp/8080", false),
        ("/ip4/127.0.0.1/udp/8080/quic-v1", false),
    ];
    for (s, dialable) in cases {
        assert_eq!(transport.can_dial(&addr(s)), dialable, "{}", s);
    }
}

// can_dial is exactly "the parser does not fail", for eligible, malformed
// and unrelated addresses alike.
#[test]
fn can_dial_matches_parser() {
    init_logging();
    let transport = Transport::new();

    let cases = [
        "/ip4/127.0.0.1/tcp/8080/tls/sni/example.com/ws",
        "/ip4/127.0.0.1/tcp/8080/ws",
        "/ip4/1.2.3.4/ws",
        "/tcp/8080/ws",
        "/ip4/127.0.0.1/tcp/8080",
        "/dns/example.com/tcp/443/wss",
    ];
    for s in cases {
        let a = addr(s);
        assert_eq!(transport.can_dial(&a), transport.dial_target(&a).is_ok(), "{}", s);
    }
}

#[test]
fn dial_url_for_plain_target() {
    let transport = Transport::new();
    let url = transport.dial_url(&addr("/ip4/127.0.0.1/tcp/8080/ws")).unwrap();
    assert_eq!(url.as_str(), "ws://127.0.0.1:8080/");
}

#[test]
fn dial_url_reports_parse_errors() {
    let transport = Transport::new();
    assert_eq!(
        transport.dial_url(&addr("/ip4/127.0.0.1/tcp/8080")),
        Err(WsAddrError::NotWebSocket)
    );
}

#[test]
fn no_client_tls_for_plain_target() {
    let transport = Transport::builder().with_tls_config(tls_config()).build();
    let target = transport
        .dial_target(&addr("/ip4/127.0.0.1/tcp/8080/ws"))
        .unwrap();
    assert!(transport.client_tls(&target).unwrap().is_none());
}

#[test]
fn client_tls_requires_a_config() {
    let transport = Transport::new();
    let target = transport
        .dial_target(&addr("/ip4/127.0.0.1/tcp/8080/wss"))
        .unwrap();
    assert!(matches!(
        transport.client_tls(&target),
        Err(maws::ClientTlsError::NoClientConfig)
    ));
}

#[test]
fn client_tls_presents_sni_override() {
    let config = tls_config();
    let transport = Transport::builder().with_tls_config(config.clone()).build();
    let target = transport
        .dial_target(&addr("/dns/example.com/tcp/443/tls/sni/api.example.com/ws"))
        .unwrap();
    assert_eq!(target.scheme(), Scheme::Wss);

    let tls = transport.client_tls(&target).unwrap().unwrap();
    assert_eq!(
        tls.server_name(),
        &ServerName::try_from("api.example.com".to_string()).unwrap()
    );
    assert!(Arc::ptr_eq(tls.config(), &config));
}

#[test]
fn client_tls_accepts_ip_hosts() {
    let transport = Transport::builder().with_tls_config(tls_config()).build();
    let target = transport
        .dial_target(&addr("/ip4/49.12.172.37/tcp/32530/wss"))
        .unwrap();
    let tls = transport.client_tls(&target).unwrap().unwrap();
    assert!(matches!(tls.server_name(), ServerName::IpAddress(_)));
}

#[test]
fn shared_handle_is_consistent_across_clones() {
    let transport = Transport::builder().with_tls_config(tls_config()).build();
    let clone = transport.clone();
    let a = addr("/ip4/127.0.0.1/tcp/8080/tls/ws");
    assert_eq!(transport.dial_target(&a), clone.dial_target(&a));
    assert!(clone.can_dial(&a));
}
