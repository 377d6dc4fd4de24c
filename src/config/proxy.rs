pub struct ProxyConfig {
    pub bind_addr: &'static str,
    pub route: &'static str,
}

pub const PROXY: ProxyConfig = ProxyConfig {
    bind_addr: "127.0.0.1:3000",
    route: "/api/crypto",
};

/// Where the GUI looks for the proxy unless told otherwise via --proxy-url.
pub const DEFAULT_PROXY_URL: &str = "http://localhost:3000";
