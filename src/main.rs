// Native builds run an optional static host for `dist/`; the page itself needs no server.
#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    liquid_portfolio::server::run().await
}

#[cfg(target_arch = "wasm32")]
fn main() {
    use liquid_portfolio::telemetry::{log_event, LogLevel};

    if let Err(error) = liquid_portfolio::frontend::run() {
        log_event(
            LogLevel::Warn,
            "mount_failed",
            serde_json::json!({ "error": error.as_string().unwrap_or_default() }),
        );
    }
}
