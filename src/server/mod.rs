mod routes;

pub use routes::{ErrorResponse, ProxyState, listings};

use std::net::SocketAddr;

use anyhow::Result;
use axum::{Router, routing::get};

use crate::config::PROXY;

/// The server-side boundary: one GET route that forwards the listings call
/// with the provider API key attached.
pub struct ProxyServer {
    state: ProxyState,
    addr: SocketAddr,
}

impl ProxyServer {
    pub fn new(state: ProxyState, addr: SocketAddr) -> Self {
        Self { state, addr }
    }

    pub async fn start(self) -> Result<()> {
        let app = Router::new()
            .route(PROXY.route, get(listings))
            .with_state(self.state);

        log::info!("asset proxy listening on {}", self.addr);

        let listener = tokio::net::TcpListener::bind(&self.addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}
