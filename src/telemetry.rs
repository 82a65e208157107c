// src/telemetry.rs
//! Tracing setup and log helpers.
//!
//! User text is never logged. Inputs are identified by a short sha256 prefix.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub const ENV_LOG_JSON: &str = "ANALYZER_LOG_JSON";
pub const ENV_DEV_LOG: &str = "ANALYZER_DEV_LOG";

const DEFAULT_FILTER: &str = "analyzer=info,api=info,session=info,warn";

/// Dev logging: ANALYZER_DEV_LOG=1 AND dev env (debug build or SHUTTLE_ENV in {local,development,dev})
pub fn dev_logging_enabled() -> bool {
    let on = std::env::var(ENV_DEV_LOG).ok().as_deref() == Some("1");
    if !on {
        return false;
    }
    if cfg!(debug_assertions) {
        return true;
    }
    matches!(
        std::env::var("SHUTTLE_ENV")
            .unwrap_or_default()
            .to_ascii_lowercase()
            .as_str(),
        "local" | "development" | "dev"
    )
}

/// Install the global subscriber. JSON lines when ANALYZER_LOG_JSON=1,
/// compact text otherwise; dev logging lowers the default level to debug.
/// Safe to call more than once (later calls are no-ops).
pub fn init_tracing() {
    let fallback = if dev_logging_enabled() {
        "analyzer=debug,api=debug,session=debug,info"
    } else {
        DEFAULT_FILTER
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let json = std::env::var(ENV_LOG_JSON).ok().as_deref() == Some("1");
    let registry = tracing_subscriber::registry().with(filter);
    let _ = if json {
        registry.with(fmt::layer().json()).try_init()
    } else {
        registry.with(fmt::layer().compact()).try_init()
    };
}

/// First 6 bytes of sha256, hex encoded.
pub fn anon_hash(text: &str) -> String {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    let digest = hasher.finalize();
    let mut out = String::with_capacity(12);
    for b in digest.iter().take(6) {
        use std::fmt::Write as _;
        let _ = write!(&mut out, "{:02x}", b);
    }
    out
}
