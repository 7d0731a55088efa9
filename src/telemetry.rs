// src/telemetry.rs
// Tracing setup for the binary and the anonymized id helper used in logs.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub const ENV_LOG_JSON: &str = "REZONING_LOG_JSON";
const DEFAULT_FILTER: &str = "rezoning=info,warn";

/// Short, stable id for a document so logs never carry raw text.
pub fn anon_hash(text: &str) -> String {
    use sha2::{Digest, Sha256};
    let digest = Sha256::digest(text.as_bytes());
    digest[..6].iter().map(|b| format!("{b:02x}")).collect()
}

/// Install the global subscriber. Logs go to stderr so stdout stays clean for
/// CSV/JSON output. `RUST_LOG` overrides the default filter; `REZONING_LOG_JSON=1`
/// switches to JSON lines. Calling it twice is a no-op.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let json = std::env::var(ENV_LOG_JSON).ok().is_some_and(|v| v == "1");

    let registry = tracing_subscriber::registry().with(filter);
    let _ = if json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        registry
            .with(fmt::layer().compact().with_writer(std::io::stderr))
            .try_init()
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anon_hash_is_short_and_stable() {
        let a = anon_hash("Plaza Road");
        assert_eq!(a.len(), 12);
        assert_eq!(a, anon_hash("Plaza Road"));
        assert_ne!(a, anon_hash("Plaza Road "));
        assert_eq!(anon_hash(""), "e3b0c44298fc");
    }
}
