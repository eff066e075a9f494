//! HTTP route handlers for the dashboard API.

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use axum::extract::{ConnectInfo, Path, Request, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::Html;
use axum::routing::get;
use axum::{Json, Router};
use tower_http::cors::CorsLayer;

use crate::ipinfo::IpReport;
use crate::probe::{LatencyProber, ProbeResult, ProbeTarget};
use crate::server::state::AppState;

type ApiError = (StatusCode, Json<serde_json::Value>);

/// Build the main Axum router with all routes.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .nest("/api", api_routes())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/targets", get(get_targets))
        .route("/ping", get(ping_all))
        .route("/ping/{name}", get(ping_one))
        .route("/ip", get(get_ip))
}

/// GET / — the dashboard page, embedded at build time.
async fn index() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}

/// GET /api/targets — configured resolver targets.
async fn get_targets(State(state): State<Arc<AppState>>) -> Json<Vec<ProbeTarget>> {
    Json(state.targets.clone())
}

/// GET /api/ping/{name} — measure a single named target.
async fn ping_one(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<ProbeResult>, ApiError> {
    let target = state.find_target(&name).ok_or_else(|| {
        (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "error": format!("unknown target: {name}") })),
        )
    })?;

    Ok(Json(state.prober.measure(target).await))
}

/// GET /api/ping — measure all targets concurrently.
async fn ping_all(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let results = state.prober.measure_all(&state.targets).await;
    let summary = LatencyProber::summarize(&results);

    Json(serde_json::json!({
        "results": results,
        "summary": summary,
    }))
}

/// GET /api/ip — look up the visitor's apparent address and relay the report.
async fn get_ip(
    State(state): State<Arc<AppState>>,
    request: Request,
) -> Result<Json<IpReport>, ApiError> {
    let peer = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| *addr);

    let ip = client_ip(request.headers(), peer).ok_or_else(|| {
        (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "error": "client address could not be determined" })),
        )
    })?;

    if ip.is_loopback() || ip.is_unspecified() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "error": "no public address to look up" })),
        ));
    }

    state.ipinfo.lookup(ip).await.map(Json).map_err(|e| {
        tracing::warn!("IP lookup failed for {ip}: {e}");
        (
            StatusCode::BAD_GATEWAY,
            Json(serde_json::json!({ "error": e.to_string() })),
        )
    })
}

/// Determine the visitor's apparent address.
///
/// Proxy headers take precedence over the socket peer: `X-Forwarded-For`
/// (first hop), then `X-Real-IP`.
fn client_ip(headers: &HeaderMap, peer: Option<SocketAddr>) -> Option<IpAddr> {
    if let Some(forwarded) = headers.get("x-forwarded-for").and_then(|v| v.to_str().ok()) {
        if let Some(first) = forwarded.split(',').next() {
            if let Ok(ip) = first.trim().parse() {
                return Some(ip);
            }
        }
    }

    if let Some(real) = headers.get("x-real-ip").and_then(|v| v.to_str().ok()) {
        if let Ok(ip) = real.trim().parse() {
            return Some(ip);
        }
    }

    peer.map(|addr| addr.ip())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn peer() -> Option<SocketAddr> {
        Some("192.0.2.10:443".parse().unwrap())
    }

    #[test]
    fn test_client_ip_prefers_forwarded_for() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-forwarded-for",
            HeaderValue::from_static("203.0.113.7, 10.0.0.1"),
        );
        headers.insert("x-real-ip", HeaderValue::from_static("198.51.100.2"));

        let ip = client_ip(&headers, peer());
        assert_eq!(ip, Some("203.0.113.7".parse().unwrap()));
    }

    #[test]
    fn test_client_ip_falls_back_to_real_ip() {
        let mut headers = HeaderMap::new();
        headers.insert("x-real-ip", HeaderValue::from_static("198.51.100.2"));

        let ip = client_ip(&headers, peer());
        assert_eq!(ip, Some("198.51.100.2".parse().unwrap()));
    }

    #[test]
    fn test_client_ip_ignores_malformed_headers() {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", HeaderValue::from_static("not-an-ip"));

        let ip = client_ip(&headers, peer());
        assert_eq!(ip, Some("192.0.2.10".parse().unwrap()));
    }

    #[test]
    fn test_client_ip_none_without_any_source() {
        let headers = HeaderMap::new();
        assert!(client_ip(&headers, None).is_none());
    }
}
