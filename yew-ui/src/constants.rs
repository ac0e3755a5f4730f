use once_cell::sync::Lazy;
use sensordash_client::transport::TransportKind;
use sensordash_types::truthy;

// These are read at compile time, please rebuild if you change them.
pub static API_BASE_URL: Lazy<String> = Lazy::new(|| {
    std::option_env!("SENSORDASH_API_URL")
        .unwrap_or("")
        .to_string()
});

pub static WEBSOCKET_URL: Lazy<String> = Lazy::new(|| {
    std::option_env!("SENSORDASH_WS_URL")
        .unwrap_or("ws://127.0.0.1:5000/stream")
        .to_string()
});

pub static PUSH_ENABLED: Lazy<bool> =
    Lazy::new(|| truthy(std::option_env!("SENSORDASH_PUSH_ENABLED")));

/// The page runs exactly one transport strategy; push must be opted into.
pub fn transport_kind() -> TransportKind {
    if *PUSH_ENABLED {
        TransportKind::Push
    } else {
        TransportKind::Poll
    }
}
