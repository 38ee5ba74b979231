//! # Observability & Tracing
//!
//! Log lines use the compact format without module paths. Actors tag their lines with
//! `entity_type` instead.
//!
//! ```bash
//! RUST_LOG=debug storefront                       # full payloads
//! RUST_LOG=storefront=info,tower_http=debug storefront
//! ```
//!
//! Without `RUST_LOG`, the service logs `info` and above for itself and for HTTP requests.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "storefront=info,actor_framework=info,tower_http=info";

pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        )
        .with_target(false)
        .compact()
        .init();
}
