use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;

use asset_tracker::config::{PROXY, UPSTREAM};
use asset_tracker::server::{ProxyServer, ProxyState};

#[derive(Parser, Debug)]
#[command(author, version, about = "Listings proxy that keeps the provider API key server-side")]
struct ProxyCli {
    /// Address to listen on
    #[arg(long, default_value = PROXY.bind_addr)]
    bind: String,

    /// Override the upstream listings endpoint (for testing against a stub)
    #[arg(long)]
    upstream_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let (global_level, my_code_level) = if cfg!(debug_assertions) {
        (log::LevelFilter::Warn, log::LevelFilter::Info)
    } else {
        (log::LevelFilter::Error, log::LevelFilter::Error)
    };

    let mut builder = env_logger::Builder::new();

    builder
        .filter(None, global_level)
        .filter(Some("asset_tracker"), my_code_level)
        .filter(Some("asset_proxy"), my_code_level)
        .init();

    let args = ProxyCli::parse();

    let api_key = std::env::var(UPSTREAM.api_key_env).ok();
    if api_key.is_none() {
        // Keep serving: every request will get a clean 500 body instead.
        log::warn!("{} is not set; requests will fail with 500", UPSTREAM.api_key_env);
    }

    let state = ProxyState {
        api_key,
        upstream_url: args
            .upstream_url
            .unwrap_or_else(|| UPSTREAM.listings_url.to_string()),
        client: reqwest::Client::new(),
    };

    let addr: SocketAddr = args
        .bind
        .parse()
        .with_context(|| format!("invalid bind address {}", args.bind))?;

    ProxyServer::new(state, addr).start().await
}
