mod provider;

pub use provider::{AssetSource, ProxySource};
