use anyhow::{Context, Result};
use serde::Deserialize;

/// One immutable entry of a listings snapshot.
///
/// The snapshot is fetched once per session; the table derives its displayed
/// view from these records and never mutates them.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetRecord {
    pub id: u64,
    pub name: String,
    pub symbol: String,
    /// Spot price in the acquisition currency (USD).
    pub price: f64,
    /// Signed percent change over the trailing 24 hours.
    pub percent_change_24h: f64,
}

// Wire shape of the provider's listings endpoint:
// { "data": [ { id, name, symbol, quote: { "USD": { price, percent_change_24h } } } ] }

#[derive(Deserialize)]
struct ListingsPayload {
    data: Vec<RawAsset>,
}

#[derive(Deserialize)]
struct RawAsset {
    id: u64,
    name: String,
    symbol: String,
    quote: RawQuote,
}

#[derive(Deserialize)]
struct RawQuote {
    #[serde(rename = "USD")]
    usd: RawUsdQuote,
}

#[derive(Deserialize)]
struct RawUsdQuote {
    price: f64,
    percent_change_24h: f64,
}

/// Decode the listings payload into flat records.
///
/// A payload that deviates from the expected shape is an error for the whole
/// snapshot. No partially-decoded records ever leak out.
pub fn parse_listings(json: &str) -> Result<Vec<AssetRecord>> {
    let payload: ListingsPayload =
        serde_json::from_str(json).context("malformed listings payload")?;

    Ok(payload
        .data
        .into_iter()
        .map(|raw| AssetRecord {
            id: raw.id,
            name: raw.name,
            symbol: raw.symbol,
            price: raw.quote.usd.price,
            percent_change_24h: raw.quote.usd.percent_change_24h,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "data": [
            {
                "id": 1,
                "name": "Bitcoin",
                "symbol": "BTC",
                "quote": { "USD": { "price": 98000.5, "percent_change_24h": -2.31 } }
            },
            {
                "id": 1027,
                "name": "Ethereum",
                "symbol": "ETH",
                "quote": { "USD": { "price": 3400.0, "percent_change_24h": 1.05 } }
            }
        ]
    }"#;

    #[test]
    fn decodes_nested_quote_shape() {
        let records = parse_listings(SAMPLE).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, 1);
        assert_eq!(records[0].symbol, "BTC");
        assert_eq!(records[0].price, 98000.5);
        assert_eq!(records[1].name, "Ethereum");
        assert_eq!(records[1].percent_change_24h, 1.05);
    }

    #[test]
    fn empty_data_array_is_an_empty_snapshot() {
        let records = parse_listings(r#"{ "data": [] }"#).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn missing_quote_currency_is_an_error() {
        let json = r#"{ "data": [ { "id": 1, "name": "Bitcoin", "symbol": "BTC", "quote": {} } ] }"#;
        let err = parse_listings(json).unwrap_err();
        assert!(err.to_string().contains("malformed"));
    }

    #[test]
    fn non_json_body_is_an_error() {
        assert!(parse_listings("<html>rate limited</html>").is_err());
    }
}
