/// Configuration default values
///
/// This module contains all the default values for configuration options,
/// making them easily changeable in one central location.
// Output defaults
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";
pub const DEFAULT_OUTPUT_PATH: &str = "playlist.m3u";
pub const ENV_PREFIX: &str = "IPTV_AGG_";

// Region defaults. Structured-feed regions use lowercase codes.
pub const DEFAULT_TARGET_REGIONS: &[&str] = &[
    "BR", "US", "GB", "CA", "AU", "NZ", "PT", "AO", "MZ", "CV", "us", "gb", "ca",
];

// Fetch defaults
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

// Structured feed defaults
pub const DEFAULT_STRUCTURED_FEED_URL: &str = "https://i.mjh.nz/SamsungTVPlus/.channels.json.gz";
pub const DEFAULT_STREAM_BASE_URL: &str = "https://jmp2.uk/";
pub const DEFAULT_SLUG_TEMPLATE: &str = "stvp-{id}";
pub const SLUG_ID_PLACEHOLDER: &str = "{id}";

// Health check defaults
pub const DEFAULT_PROBE_TIMEOUT_SECS: u64 = 8;
pub const DEFAULT_PROGRESS_INTERVAL: usize = 100;
pub const MIN_PROBE_WORKERS: usize = 4;

// Playlist defaults
pub const DEFAULT_MAX_ROW_ITEMS: usize = 150;
