//! HTTP implementation of the metadata client.
//!
//! Records are served as JSON documents at `<endpoint>/<identifier>`. A 404
//! from the service means the record does not exist and is reported as
//! `Ok(None)`; any other failure is surfaced as an [`Error`].

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};
use url::Url;

use crate::models::{
    CountryMetadata, GlobalMetadata, LocalityMetadata, ProvinceMetadata, SublocalityMetadata,
};
use crate::{Error, MetadataClient};

#[cfg(test)]
#[path = "remote_tests.rs"]
mod tests;

/// Default endpoint of the public address metadata service.
const DEFAULT_ENDPOINT: &str = "https://chromium-i18n.appspot.com/ssl-address";

/// Configuration for the remote metadata client.
#[derive(Debug, Clone)]
pub struct RemoteClientConfig {
    /// Base URL of the metadata service. Record identifiers are appended to
    /// this URL as path segments.
    pub endpoint: Url,
}

impl RemoteClientConfig {
    /// Creates a configuration for the given service endpoint.
    pub fn new(endpoint: Url) -> Self {
        Self { endpoint }
    }
}

impl Default for RemoteClientConfig {
    fn default() -> Self {
        Self {
            endpoint: Url::parse(DEFAULT_ENDPOINT).expect("default endpoint URL is valid"),
        }
    }
}

/// A client that fetches metadata records over HTTP.
///
/// # Examples
///
/// ```no_run
/// use metadata_client::{MetadataClient, RemoteClientConfig, RemoteMetadataClient};
///
/// # async fn example() -> Result<(), metadata_client::Error> {
/// let client = RemoteMetadataClient::new(RemoteClientConfig::default());
/// let country = client.query_country("data/CA").await?;
///
/// if let Some(country) = country {
///     println!("Canada uses format {:?}", country.format);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct RemoteMetadataClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl RemoteMetadataClient {
    /// Creates a client for the configured service endpoint.
    pub fn new(config: RemoteClientConfig) -> Self {
        Self::with_http_client(reqwest::Client::new(), config)
    }

    /// Creates a client that issues requests through the given HTTP client.
    ///
    /// Use this to share connection pools or to apply custom timeouts and
    /// proxy settings.
    pub fn with_http_client(http: reqwest::Client, config: RemoteClientConfig) -> Self {
        Self {
            http,
            endpoint: config.endpoint,
        }
    }

    /// Resolves the URL for a record identifier against the endpoint.
    fn record_url(&self, id: &str) -> Result<Url, Error> {
        let base = self.endpoint.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{base}/{id}"))?)
    }

    #[instrument(skip(self))]
    async fn get<T: DeserializeOwned>(&self, id: &str) -> Result<Option<T>, Error> {
        let url = self.record_url(id)?;
        let response = self.http.get(url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            debug!(id, "metadata record not found");
            return Ok(None);
        }

        let body = response.error_for_status()?.text().await?;
        let record = serde_json::from_str(&body)?;

        debug!(id, "retrieved metadata record");
        Ok(Some(record))
    }
}

#[async_trait]
impl MetadataClient for RemoteMetadataClient {
    async fn query_global(&self, id: &str) -> Result<Option<GlobalMetadata>, Error> {
        self.get(id).await
    }

    async fn query_country(&self, id: &str) -> Result<Option<CountryMetadata>, Error> {
        self.get(id).await
    }

    async fn query_province(&self, id: &str) -> Result<Option<ProvinceMetadata>, Error> {
        self.get(id).await
    }

    async fn query_locality(&self, id: &str) -> Result<Option<LocalityMetadata>, Error> {
        self.get(id).await
    }

    async fn query_sublocality(&self, id: &str) -> Result<Option<SublocalityMetadata>, Error> {
        self.get(id).await
    }
}
