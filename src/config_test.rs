use super::*;

#[test]
fn defaults_point_at_local_backend() {
    let config = AppConfig::default();
    assert_eq!(config.api_base, "http://localhost:5000/api");
    assert_eq!(config.realtime_origin, "http://localhost:5000");
}

#[test]
fn values_are_trimmed_of_whitespace_and_trailing_slash() {
    let config = AppConfig::from_values(Some(" https://api.pulse.dev/api/ "), Some("https://rt.pulse.dev/"));
    assert_eq!(config.api_base, "https://api.pulse.dev/api");
    assert_eq!(config.realtime_origin, "https://rt.pulse.dev");
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let config = AppConfig::from_values(Some("   "), Some(""));
    assert_eq!(config, AppConfig::default());
}

#[test]
fn socket_url_uses_socket_io_websocket_endpoint() {
    let config = AppConfig::default();
    assert_eq!(
        config.socket_url().as_deref(),
        Some("ws://localhost:5000/socket.io/?EIO=4&transport=websocket")
    );
}

#[test]
fn socket_url_rejects_unknown_scheme() {
    let config = AppConfig::from_values(None, Some("ftp://example.com"));
    assert_eq!(config.socket_url(), None);
}
