/// Fixed pagination for the single listings call. The upstream returns
/// everything in one page; there is no follow-up paging.
pub struct ListingsQuery {
    pub start: u32,
    pub limit: u32,
    pub convert: &'static str,
}

/// Everything needed to talk to the market-data provider. The API key itself
/// never lives here: the proxy reads it from the environment at startup.
pub struct UpstreamConfig {
    pub listings_url: &'static str,
    pub api_key_env: &'static str,
    pub api_key_header: &'static str,
    pub query: ListingsQuery,
}

pub const UPSTREAM: UpstreamConfig = UpstreamConfig {
    listings_url: "https://pro-api.coinmarketcap.com/v1/cryptocurrency/listings/latest",
    api_key_env: "CMC_API_KEY",
    api_key_header: "X-CMC_PRO_API_KEY",
    query: ListingsQuery {
        start: 1,
        limit: 5000,
        convert: "USD",
    },
};
