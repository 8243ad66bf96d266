use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use serde_json::json;
use std::{
    path::PathBuf,
    sync::{
        atomic::{AtomicU64, Ordering as AtomicOrdering},
        Arc,
    },
    time::{Instant, SystemTime, UNIX_EPOCH},
};
use tower_http::services::{ServeDir, ServeFile};

use crate::telemetry::{log_event_at, LogLevel};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_SITE_DIR: &str = "dist";
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;
const PORT_BOUNDS: (u16, u16) = (1, u16::MAX);
const REQUEST_ID_HEADER: &str = "x-request-id";
const FINGERPRINT_MIN_HEX: usize = 16;

const CACHE_NO_CACHE: &str = "no-cache";
const CACHE_IMMUTABLE: &str = "public, max-age=31536000, immutable";
const CACHE_SHORT: &str = "public, max-age=3600";

static REQUEST_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

#[derive(Clone, Debug, PartialEq)]
pub struct HostConfig {
    pub port: u16,
    pub site_dir: PathBuf,
    pub log_level: LogLevel,
}

impl HostConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = parse_u16_with_bounds(lookup("PORT"), DEFAULT_PORT, PORT_BOUNDS);
        let site_dir = non_empty(lookup("SITE_DIR"))
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SITE_DIR));
        let log_level = non_empty(lookup("LOG_LEVEL"))
            .and_then(|value| LogLevel::parse(&value))
            .unwrap_or(DEFAULT_LOG_LEVEL);

        Self {
            port,
            site_dir,
            log_level,
        }
    }
}

#[derive(Clone)]
pub struct HostState {
    config: Arc<HostConfig>,
}

impl HostState {
    pub fn new(config: HostConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

#[derive(Serialize)]
struct HealthPayload {
    ok: bool,
    site_dir: String,
    ts: u64,
}

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = HostConfig::from_env();
    let bind_address = format!("0.0.0.0:{}", config.port);
    let state = HostState::new(config.clone());

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    log_event_at(
        config.log_level,
        LogLevel::Info,
        "server_listening",
        json!({
            "url": format!("http://127.0.0.1:{}", config.port),
            "site_dir": config.site_dir.display().to_string(),
        }),
    );

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log_event_at(config.log_level, LogLevel::Info, "server_stopped", json!({}));
    Ok(())
}

pub fn router(state: HostState) -> Router {
    let site_dir = state.config.site_dir.clone();
    let static_service =
        ServeDir::new(&site_dir).not_found_service(ServeFile::new(site_dir.join("index.html")));

    Router::new()
        .route("/healthz", get(healthz))
        .fallback_service(static_service)
        .layer(middleware::from_fn_with_state(state.clone(), track_request))
        .with_state(state)
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}

async fn healthz(State(state): State<HostState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthPayload {
            ok: true,
            site_dir: state.config.site_dir.display().to_string(),
            ts: now_unix_seconds(),
        }),
    )
}

async fn track_request(State(state): State<HostState>, request: Request, next: Next) -> Response {
    let started = Instant::now();
    let request_id = resolve_request_id(request.headers());
    let method = request.method().to_string();
    let path = request.uri().path().to_string();

    let mut response = next.run(request).await;

    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let headers = response.headers_mut();
    if !headers.contains_key(header::CACHE_CONTROL) {
        headers.insert(
            header::CACHE_CONTROL,
            cache_control(cache_policy(&path, &content_type)),
        );
    }
    if let Ok(request_id_header) = HeaderValue::from_str(&request_id) {
        headers.insert(REQUEST_ID_HEADER, request_id_header);
    }

    let status = response.status();
    let level = if status.is_server_error() {
        LogLevel::Warn
    } else {
        LogLevel::Debug
    };
    log_event_at(
        state.config.log_level,
        level,
        "http_request",
        json!({
            "request_id": request_id,
            "method": method,
            "path": path,
            "status": status.as_u16(),
            "duration_ms": started.elapsed().as_millis() as u64,
        }),
    );

    response
}

fn cache_control(value: &str) -> HeaderValue {
    HeaderValue::from_str(value).unwrap_or_else(|_| HeaderValue::from_static(CACHE_NO_CACHE))
}

/// HTML must revalidate so new builds are picked up; fingerprinted bundle
/// files never change under the same name.
fn cache_policy(path: &str, content_type: &str) -> &'static str {
    if content_type.starts_with("text/html") || content_type.starts_with("application/json") {
        return CACHE_NO_CACHE;
    }

    let file_name = path.rsplit('/').next().unwrap_or_default();
    if is_fingerprinted(file_name) {
        CACHE_IMMUTABLE
    } else {
        CACHE_SHORT
    }
}

fn is_fingerprinted(file_name: &str) -> bool {
    let stem = file_name
        .split_once('.')
        .map(|(stem, _)| stem)
        .unwrap_or(file_name);
    let stem = stem.strip_suffix("_bg").unwrap_or(stem);

    stem.rsplit_once('-')
        .map(|(_, hash)| {
            hash.len() >= FINGERPRINT_MIN_HEX && hash.chars().all(|c| c.is_ascii_hexdigit())
        })
        .unwrap_or(false)
}

fn parse_u16_with_bounds(value: Option<String>, default: u16, bounds: (u16, u16)) -> u16 {
    value
        .and_then(|value| value.trim().parse::<u16>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn now_unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_millis())
        .unwrap_or(0)
}

fn now_unix_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_secs())
        .unwrap_or(0)
}

fn generate_request_id() -> String {
    let counter = REQUEST_ID_COUNTER.fetch_add(1, AtomicOrdering::Relaxed);
    format!("req-{}-{counter}", now_unix_millis())
}

fn resolve_request_id(headers: &HeaderMap) -> String {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|raw| raw.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToString::to_string)
        .unwrap_or_else(generate_request_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{collections::HashMap, net::SocketAddr};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    fn config_from(pairs: &[(&str, &str)]) -> HostConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        HostConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn config_defaults_when_unset() {
        let config = config_from(&[]);

        assert_eq!(config.port, 8080);
        assert_eq!(config.site_dir, PathBuf::from("dist"));
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn config_rejects_out_of_range_and_garbage() {
        let config = config_from(&[("PORT", "0"), ("SITE_DIR", "   "), ("LOG_LEVEL", "loud")]);
        assert_eq!(config, config_from(&[]));

        let config = config_from(&[("PORT", " 3000 "), ("SITE_DIR", "public"), ("LOG_LEVEL", "debug")]);
        assert_eq!(config.port, 3000);
        assert_eq!(config.site_dir, PathBuf::from("public"));
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn trunk_bundle_names_are_fingerprinted() {
        assert!(is_fingerprinted("liquid-portfolio-3f2a9c1d4b5e6f70_bg.wasm"));
        assert!(is_fingerprinted("liquid-portfolio-3f2a9c1d4b5e6f70.js"));
        assert!(is_fingerprinted("styles-0123456789abcdef.css"));
        assert!(!is_fingerprinted("logo.svg"));
        assert!(!is_fingerprinted("liquid-portfolio.js"));
        assert!(!is_fingerprinted("read-me-first.txt"));
    }

    #[test]
    fn html_revalidates_and_bundles_are_immutable() {
        assert_eq!(cache_policy("/", "text/html; charset=utf-8"), CACHE_NO_CACHE);
        assert_eq!(cache_policy("/healthz", "application/json"), CACHE_NO_CACHE);
        assert_eq!(
            cache_policy("/styles-0123456789abcdef.css", "text/css"),
            CACHE_IMMUTABLE
        );
        assert_eq!(cache_policy("/images/logo.svg", "image/svg+xml"), CACHE_SHORT);
    }

    #[test]
    fn incoming_request_id_is_kept() {
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static(" edge-42 "));
        assert_eq!(resolve_request_id(&headers), "edge-42");

        let generated = resolve_request_id(&HeaderMap::new());
        assert!(generated.starts_with("req-"), "got {generated}");
    }

    fn scratch_site(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "liquid-portfolio-{name}-{}-{}",
            std::process::id(),
            now_unix_millis()
        ));
        std::fs::create_dir_all(&dir).expect("create scratch site");
        std::fs::write(dir.join("index.html"), "<div id=\"app\">portfolio shell</div>")
            .expect("write index");
        std::fs::write(dir.join("app-0123456789abcdef.js"), "export {};").expect("write bundle");
        dir
    }

    async fn spawn_host(site_dir: PathBuf) -> SocketAddr {
        let state = HostState::new(HostConfig {
            port: 0,
            site_dir,
            log_level: LogLevel::Warn,
        });
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind ephemeral port");
        let address = listener.local_addr().expect("local address");
        tokio::spawn(async move {
            let _ = axum::serve(listener, router(state)).await;
        });
        address
    }

    async fn raw_get(address: SocketAddr, path: &str) -> String {
        let mut stream = tokio::net::TcpStream::connect(address)
            .await
            .expect("connect to host");
        let request = format!("GET {path} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n");
        stream
            .write_all(request.as_bytes())
            .await
            .expect("send request");

        let mut raw = Vec::new();
        stream.read_to_end(&mut raw).await.expect("read response");
        String::from_utf8_lossy(&raw).to_ascii_lowercase()
    }

    #[tokio::test]
    async fn healthz_reports_ok() {
        let address = spawn_host(scratch_site("health")).await;

        let response = raw_get(address, "/healthz").await;
        assert!(response.starts_with("http/1.1 200"), "{response}");
        assert!(response.contains("\"ok\":true"), "{response}");
        assert!(response.contains("cache-control: no-cache"), "{response}");
        assert!(response.contains("x-request-id: req-"), "{response}");
    }

    #[tokio::test]
    async fn serves_bundles_and_falls_back_to_index() {
        let site = scratch_site("static");
        let address = spawn_host(site.clone()).await;

        let bundle = raw_get(address, "/app-0123456789abcdef.js").await;
        assert!(bundle.starts_with("http/1.1 200"), "{bundle}");
        assert!(bundle.contains("immutable"), "{bundle}");

        let unknown = raw_get(address, "/no/such/page").await;
        assert!(unknown.contains("portfolio shell"), "{unknown}");
        assert!(unknown.contains("cache-control: no-cache"), "{unknown}");

        let _ = std::fs::remove_dir_all(site);
    }
}
