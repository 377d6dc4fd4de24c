// All user-facing strings and icon glyphs in one place.

pub struct UiText {
    pub window_title: &'static str,
    pub app_title: &'static str,
    pub app_subtitle: &'static str,
    pub search_hint: &'static str,

    pub header_id: &'static str,
    pub header_name: &'static str,
    pub header_price: &'static str,
    pub header_change: &'static str,

    // (Sort arrows)
    pub icon_sort: &'static str,
    pub icon_sort_asc: &'static str,
    pub icon_sort_desc: &'static str,

    pub icon_search: &'static str,
    pub icon_up: &'static str,
    pub icon_down: &'static str,

    pub loading_title: &'static str,
    pub empty_results: &'static str,
    pub error_prefix: &'static str,
}

pub const UI_TEXT: UiText = UiText {
    window_title: "Asset Tracker",
    app_title: "AssetTracker",
    app_subtitle: "Track your favourite crypto assets",
    search_hint: "Search",

    header_id: "#",
    header_name: "Name",
    header_price: "Price",
    header_change: "24h%",

    icon_sort: "↕",
    icon_sort_asc: "⬆",
    icon_sort_desc: "⬇",

    icon_search: "🔍",
    icon_up: "⬆",
    icon_down: "⬇",

    loading_title: "Loading assets...",
    empty_results: "No assets match your search",
    error_prefix: "Error:",
};
