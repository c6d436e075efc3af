// src/config/consts.rs

// Site
pub const BASE_URL: &str = "https://www.banggood.com";
pub const CATEGORIES: &[(&str, &str)] = &[
    ("Sports", "https://www.banggood.com/Wholesale-Sports-and-Outdoors-ca-6001.html"),
    ("Electronics", "https://www.banggood.com/Wholesale-Consumer-Electronics-ca-4001.html"),
    ("Tools", "https://www.banggood.com/Wholesale-Tools-ca-3001.html"),
    ("Toys", "https://www.banggood.com/Wholesale-Toys-Hobbies-and-Robot-ca-7001.html"),
    ("Automobiles", "https://www.banggood.com/Wholesale-Automobiles-and-Motorcycles-ca-8001.html"),
];

// Net config
pub const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36";
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

// Product card selectors, first match wins
pub const CARD_SELECTORS: &[&str] = &[".product-item", ".p-wrap"];
pub const PRICE_SELECTORS: &[&str] = &[".price", ".price-box"];

// Placeholders
pub const NA: &str = "N/A";
pub const RATING_PLACEHOLDER: &str = NA;
pub const REVIEWS_PLACEHOLDER: &str = "0";
pub const NO_URL: &str = "NO_URL_FOUND";

// Local files
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = ".store/pipeline.log";
pub const DATA_DIR: &str = "data";
pub const RAW_FILE: &str = "banggood_5_categories.csv";
pub const TRANSFORMED_FILE: &str = "banggood_transformed_data.csv";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_CHARTS_SUBDIR: &str = "charts";
pub const DEFAULT_FILE: &str = "products";

// Database
pub const DEFAULT_DB_FILE: &str = "banggood.db";
pub const TABLE_NAME: &str = "BanggoodProducts";

// Concurrency
pub const WORKERS: usize = 2;
pub const REQUEST_PAUSE_MS: u64 = 2_000; // be polite
pub const STAGGER_MS: u64 = 500; // fixed per-category offset, 0..500 ms

// Analysis
pub const TOP_N: usize = 5;
pub const PRICE_CLIP_QUANTILE: f64 = 0.95;
