// src/config/consts.rs

// Sources
pub const OI_SPURTS_URL: &str = "https://www.moneycontrol.com/stocks/marketstats/futures/oi-spurts/fno/";
pub const UNUSUAL_VOLUME_URL: &str = "https://www.tradingview.com/markets/stocks-india/market-movers-unusual-volume/";

// Net config
// Both sites turn away clients without a browser-looking agent.
pub const USER_AGENT: &str = "Mozilla/5.0";
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

// Cache
pub const CACHE_TTL_SECS: u64 = 600;

// Window
pub const WINDOW_TITLE: &str = "Stock Screener - Volume & OI Spurt Detector";
pub const WINDOW_W: f32 = 1200.0;
pub const WINDOW_H: f32 = 800.0;
