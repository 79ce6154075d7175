use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use tracing::debug;

use crate::errors::{AppResult, SourceError, SourceResult};
use crate::utils::url::UrlUtils;
use crate::utils::{CompressionFormat, DecompressionService};

/// HTTP download seam used by the fetcher. Payloads come back already
/// decompressed.
#[async_trait]
pub trait HttpFetch: Send + Sync {
    /// Fetch URL and return decompressed text content
    async fn fetch_text(&self, url: &str) -> SourceResult<String>;

    /// Fetch URL and return raw decompressed bytes
    async fn fetch_bytes(&self, url: &str) -> SourceResult<Vec<u8>>;
}

/// Default implementation of `HttpFetch` using reqwest
pub struct StandardHttpClient {
    client: Client,
}

impl StandardHttpClient {
    /// Client with a total request timeout and a fixed `User-Agent`
    pub fn new(timeout: Duration, user_agent: &str) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    async fn get(&self, url: &str) -> SourceResult<Response> {
        let safe_url = UrlUtils::obfuscate_credentials(url);
        let response = self.client.get(url).send().await.map_err(|e| {
            SourceError::network(&safe_url, UrlUtils::obfuscate_credentials(&e.to_string()))
        })?;

        if !response.status().is_success() {
            return Err(SourceError::Http {
                status: response.status().as_u16(),
                url: safe_url,
            });
        }
        Ok(response)
    }

    /// Read the full body and decompress it when it carries gzip magic bytes
    async fn process_response_to_bytes(response: Response, url: &str) -> SourceResult<Vec<u8>> {
        let bytes = response.bytes().await.map_err(|e| {
            SourceError::network(
                UrlUtils::obfuscate_credentials(url),
                format!("Failed to read response: {e}"),
            )
        })?;

        debug!("Fetched {} bytes of raw content", bytes.len());

        let compression_format = DecompressionService::detect_compression_format(&bytes);
        match compression_format {
            CompressionFormat::Uncompressed => Ok(bytes.to_vec()),
            _ => {
                debug!("Content is {:?} compressed, decompressing", compression_format);
                DecompressionService::decompress(&bytes).map_err(|e| {
                    SourceError::decode(
                        UrlUtils::obfuscate_credentials(url),
                        format!("Failed to decompress content: {e}"),
                    )
                })
            }
        }
    }
}

#[async_trait]
impl HttpFetch for StandardHttpClient {
    async fn fetch_text(&self, url: &str) -> SourceResult<String> {
        debug!("Fetching text content from: {}", UrlUtils::obfuscate_credentials(url));

        let bytes = self.fetch_bytes(url).await?;
        let content = match String::from_utf8(bytes) {
            Ok(content) => content,
            Err(e) => {
                debug!("Content from {} is not valid UTF-8, decoding lossily", UrlUtils::obfuscate_credentials(url));
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }
        };

        debug!("Fetched {} characters of text content", content.len());
        Ok(content)
    }

    async fn fetch_bytes(&self, url: &str) -> SourceResult<Vec<u8>> {
        let response = self.get(url).await?;
        Self::process_response_to_bytes(response, url).await
    }
}
