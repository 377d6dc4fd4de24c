//! Configuration module for the asset tracker.

// Can all be private now because we have a public re-export.
mod debug;
mod proxy;
mod upstream;

// Re-export commonly used items
pub use debug::DF;
pub use proxy::{DEFAULT_PROXY_URL, PROXY, ProxyConfig};
pub use upstream::{UPSTREAM, UpstreamConfig};
