//! Per-client rate limiting using the token bucket algorithm.

use axum::http::Request;
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::net::IpAddr;
use std::sync::Arc;
use tower_governor::{
    GovernorError, GovernorLayer,
    governor::GovernorConfigBuilder,
    key_extractor::{KeyExtractor, PeerIpKeyExtractor, SmartIpKeyExtractor},
};

/// Resolves the client IP used as the rate limit key.
///
/// Reads `X-Forwarded-For` / `X-Real-IP` / `Forwarded` only when
/// `behind_proxy` is set; otherwise uses the socket peer address.
#[derive(Debug, Clone, Copy)]
pub struct ClientIpKeyExtractor {
    behind_proxy: bool,
}

impl KeyExtractor for ClientIpKeyExtractor {
    type Key = IpAddr;

    fn extract<T>(&self, req: &Request<T>) -> Result<Self::Key, GovernorError> {
        if self.behind_proxy {
            SmartIpKeyExtractor.extract(req)
        } else {
            PeerIpKeyExtractor.extract(req)
        }
    }
}

/// Rate limiter settings.
#[derive(Debug, Clone, Copy)]
pub struct RateLimitSettings {
    /// Requests of quota restored per second, at most 1000.
    pub per_second: u64,
    /// Requests a client may issue in a burst.
    pub burst: u32,
    pub behind_proxy: bool,
}

/// Creates a rate limiter for the public endpoints.
///
/// Requests exceeding the limit receive `429 Too Many Requests`. The router
/// must be served with `into_make_service_with_connect_info::<SocketAddr>`
/// so the peer address is available.
///
/// # Errors
///
/// Returns `None` if `per_second` is zero or above 1000, or `burst` is zero.
pub fn layer(
    settings: RateLimitSettings,
) -> Option<GovernorLayer<ClientIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>> {
    let replenish_ms = 1000u64.checked_div(settings.per_second)?;

    let governor_conf = GovernorConfigBuilder::default()
        .key_extractor(ClientIpKeyExtractor {
            behind_proxy: settings.behind_proxy,
        })
        .per_millisecond(replenish_ms)
        .burst_size(settings.burst)
        .finish()?;

    Some(GovernorLayer::new(Arc::new(governor_conf)))
}
