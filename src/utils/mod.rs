pub mod decompression;
pub mod http_client;
pub mod url;

pub use decompression::{CompressionFormat, DecompressionService};
pub use http_client::{HttpFetch, StandardHttpClient};
pub use url::UrlUtils;
