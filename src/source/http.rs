use async_trait::async_trait;
use reqwest::{Client, Url};
use std::time::Duration;

use crate::config::SourceConfig;
use crate::model::Item;
use crate::source::error::FetchError;
use crate::source::record::{into_items, UniversityRecord};
use crate::source::ItemSource;

const SEARCH_PATH: &str = "search";

/// Fetches the directory over HTTP.
pub struct HttpSource {
    client: Client,
    base_url: String,
    country: String,
    name: Option<String>,
    timeout: Duration,
}

impl HttpSource {
    pub fn new(config: &SourceConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            country: config.country.clone(),
            name: config.name.clone(),
            timeout: Duration::from_secs(config.timeout_seconds),
        })
    }

    /// `{base_url}/search?country=..[&name=..]`
    pub fn search_url(&self) -> Result<Url, FetchError> {
        let endpoint = format!("{}/{}", self.base_url, SEARCH_PATH);
        let mut params = vec![("country", self.country.as_str())];
        if let Some(name) = self.name.as_deref() {
            params.push(("name", name));
        }
        Url::parse_with_params(&endpoint, &params).map_err(|e| FetchError::InvalidUrl {
            url: endpoint.clone(),
            reason: e.to_string(),
        })
    }

    fn transport_error(&self, url: &Url, err: reqwest::Error) -> FetchError {
        if err.is_timeout() {
            FetchError::Timeout {
                seconds: self.timeout.as_secs(),
            }
        } else if err.is_connect() {
            FetchError::Connect {
                url: url.to_string(),
                source: err,
            }
        } else {
            FetchError::Transport(err)
        }
    }
}

#[async_trait]
impl ItemSource for HttpSource {
    async fn fetch(&self) -> Result<Vec<Item>, FetchError> {
        let url = self.search_url()?;
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url.clone())
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| self.transport_error(&url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout {
                    seconds: self.timeout.as_secs(),
                }
            } else {
                FetchError::Body(e)
            }
        })?;

        let records: Vec<UniversityRecord> = serde_json::from_slice(&body)?;
        Ok(into_items(records))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_url_encodes_country_and_name() {
        let config = SourceConfig {
            base_url: "http://example.test/".to_string(),
            country: "United States".to_string(),
            name: Some("Tech".to_string()),
            ..SourceConfig::default()
        };
        let source = HttpSource::new(&config).unwrap();
        let url = source.search_url().unwrap();
        assert_eq!(url.path(), "/search");
        assert_eq!(url.query(), Some("country=United+States&name=Tech"));
    }

    #[test]
    fn search_url_without_name_filter() {
        let source = HttpSource::new(&SourceConfig::default()).unwrap();
        let url = source.search_url().unwrap();
        assert_eq!(
            url.as_str(),
            "http://universities.hipolabs.com/search?country=Indonesia"
        );
    }
}
