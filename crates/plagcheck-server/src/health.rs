//! Container health check behind the `--health-check` flag.

use std::time::Duration;

/// Default port when `PLAGCHECK_PORT` is unset or malformed.
pub const DEFAULT_PORT: u16 = 8080;

const HEALTH_TIMEOUT: Duration = Duration::from_secs(1);

/// Port to check, taken from `PLAGCHECK_PORT`.
pub fn health_check_port() -> u16 {
    std::env::var("PLAGCHECK_PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT)
}

/// GETs `/healthz` on the local server. Returns the process exit code:
/// 0 when the server answers with a success status, 1 otherwise.
pub async fn run_health_check(port: u16) -> i32 {
    let url = format!("http://127.0.0.1:{port}/healthz");

    let client = match reqwest::Client::builder().timeout(HEALTH_TIMEOUT).build() {
        Ok(client) => client,
        Err(_) => return 1,
    };

    match client.get(&url).send().await {
        Ok(res) if res.status().is_success() => 0,
        _ => 1,
    }
}
