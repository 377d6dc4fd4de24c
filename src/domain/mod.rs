mod asset;

pub use asset::{AssetRecord, parse_listings};
