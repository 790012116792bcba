//! HTTP seed source.

use super::SeedSource;
use crate::error::{Error, Result};
use crate::key::SeedLocation;
use url::Url;

/// Fetches seed locations with a GET against a base URL.
///
/// `/data/orders.json` on base `http://localhost:4200` resolves to
/// `http://localhost:4200/data/orders.json`. A base with a path keeps it:
/// `https://cdn.example.com/backoffice/` + `/data/orders.json` resolves to
/// `https://cdn.example.com/backoffice/data/orders.json`.
///
/// No retry and no timeout beyond the client defaults: a failed fetch is
/// reported once and the cache degrades to an empty list.
#[derive(Clone, Debug)]
pub struct HttpSeedSource {
    client: reqwest::Client,
    base: Url,
}

impl HttpSeedSource {
    /// Create a source for `base_url`.
    ///
    /// # Errors
    /// Returns `Error::ConfigError` if `base_url` is not a valid absolute URL
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a source reusing an existing client.
    ///
    /// # Errors
    /// Returns `Error::ConfigError` if `base_url` is not a valid absolute URL
    pub fn with_client(client: reqwest::Client, base_url: &str) -> Result<Self> {
        let mut base = Url::parse(base_url)?;
        if base.cannot_be_a_base() {
            return Err(Error::ConfigError(format!(
                "Seed base URL cannot be a base: {}",
                base_url
            )));
        }
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(HttpSeedSource { client, base })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Absolute URL for `location`.
    ///
    /// # Errors
    /// Returns `Error::ConfigError` if the location cannot be joined
    pub fn resolve(&self, location: &SeedLocation) -> Result<Url> {
        Ok(self.base.join(location.relative())?)
    }
}

impl SeedSource for HttpSeedSource {
    async fn fetch(&self, location: &SeedLocation) -> Result<Vec<u8>> {
        let url = self.resolve(location)?;
        debug!("HTTP seed GET {}", url);

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::SeedStatus {
                status: status.as_u16(),
                location: location.to_string(),
            });
        }

        let body = response.bytes().await?;
        debug!("HTTP seed GET {} -> {} bytes", url, body.len());
        Ok(body.to_vec())
    }
}
