//! Asset source backed by the dashboard's list-assets HTTP endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::{debug, warn};

use assetdrive_core::config::source::SourceConfig;
use assetdrive_core::error::{AppError, ErrorKind};
use assetdrive_core::result::AppResult;
use assetdrive_core::traits::{AssetRecord, AssetSource};

use super::AssetListBody;

/// Asset source calling `GET {base_url}{assets_path}?search=…`.
#[derive(Debug, Clone)]
pub struct HttpAssetSource {
    client: Client,
    endpoint: Url,
}

impl HttpAssetSource {
    /// Create an HTTP source from source configuration.
    pub fn from_config(config: &SourceConfig) -> AppResult<Self> {
        let endpoint = join_endpoint(&config.base_url, &config.assets_path)?;
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::with_source(ErrorKind::Configuration, "Failed to build HTTP client", e)
            })?;
        Ok(Self { client, endpoint })
    }

    /// The listing endpoint without a query.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// The URL requested for a given search term.
    pub fn listing_url(&self, search: Option<&str>) -> Url {
        let mut url = self.endpoint.clone();
        if let Some(term) = search.map(str::trim).filter(|s| !s.is_empty()) {
            url.query_pairs_mut().append_pair("search", term);
        }
        url
    }
}

#[async_trait]
impl AssetSource for HttpAssetSource {
    fn source_type(&self) -> &str {
        "http"
    }

    async fn list_assets(&self, search: Option<&str>) -> AppResult<Vec<AssetRecord>> {
        let url = self.listing_url(search);
        debug!(url = %url, "Requesting asset list");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(status = %status, "Asset host returned an error status");
            return Err(AppError::external_service(format!(
                "Asset host returned HTTP {status}"
            )));
        }

        let body: AssetListBody = response.json().await?;
        let records = body.into_records();
        debug!(records = records.len(), "Received asset list");
        Ok(records)
    }
}

fn join_endpoint(base_url: &str, assets_path: &str) -> AppResult<Url> {
    let joined = format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        assets_path.trim_start_matches('/')
    );
    Url::parse(&joined).map_err(|e| {
        AppError::with_source(
            ErrorKind::Configuration,
            format!("Invalid asset endpoint URL: {joined}"),
            e,
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(base_url: &str, assets_path: &str) -> SourceConfig {
        SourceConfig {
            base_url: base_url.to_string(),
            assets_path: assets_path.to_string(),
            timeout_seconds: 2,
            ..Default::default()
        }
    }

    #[test]
    fn test_endpoint_joins_slashes() {
        let source = HttpAssetSource::from_config(&config("http://host:3000/", "/api/assets")).unwrap();
        assert_eq!(source.endpoint().as_str(), "http://host:3000/api/assets");
    }

    #[test]
    fn test_listing_url_encodes_search() {
        let source = HttpAssetSource::from_config(&config("http://host", "api/assets")).unwrap();
        assert_eq!(
            source.listing_url(Some("red car")).as_str(),
            "http://host/api/assets?search=red+car"
        );
        assert_eq!(source.listing_url(Some(" ")).as_str(), "http://host/api/assets");
        assert_eq!(source.listing_url(None).as_str(), "http://host/api/assets");
    }

    #[test]
    fn test_invalid_base_url_is_configuration_error() {
        let err = HttpAssetSource::from_config(&config("not a url", "/x")).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Configuration);
    }

    #[tokio::test]
    async fn test_unreachable_host_is_an_error() {
        let source = HttpAssetSource::from_config(&config("http://127.0.0.1:9", "/api/assets")).unwrap();
        let err = source.list_assets(None).await.unwrap_err();
        assert!(err.is_external());
    }
}
