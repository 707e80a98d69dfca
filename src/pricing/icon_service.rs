use anyhow::{anyhow, Result};
use async_trait::async_trait;
use futures::future::join_all;
use log::{debug, warn};
use reqwest::Client;
use std::time::Duration;

/// Icon used when a token has no icon of its own
pub const GENERIC_ICON: &str = "GENERIC";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconSource {
    Token(String),
    Generic(String),
}

impl IconSource {
    pub fn url(&self) -> &str {
        match self {
            IconSource::Token(url) | IconSource::Generic(url) => url,
        }
    }
}

#[async_trait]
pub trait IconService: Send + Sync {
    /// Find a loadable icon for `currency`, falling back to the generic one
    async fn resolve_icon(&self, currency: &str) -> Result<IconSource>;
}

/// Probes `{base_url}/{currency}.svg` over HTTP
pub struct HttpIconService {
    http_client: Client,
    base_url: String,
}

impl HttpIconService {
    pub fn new(base_url: &str) -> Self {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn icon_url(&self, currency: &str) -> String {
        format!("{}/{}.svg", self.base_url, currency)
    }

    async fn probe(&self, url: &str) -> Result<()> {
        let response = self.http_client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(anyhow!("{} returned {}", url, response.status()));
        }

        Ok(())
    }
}

#[async_trait]
impl IconService for HttpIconService {
    async fn resolve_icon(&self, currency: &str) -> Result<IconSource> {
        let url = self.icon_url(currency);

        match self.probe(&url).await {
            Ok(()) => Ok(IconSource::Token(url)),
            Err(e) => {
                debug!("Icon for {} unavailable ({}), using generic icon", currency, e);

                let generic = self.icon_url(GENERIC_ICON);
                self.probe(&generic).await?;

                Ok(IconSource::Generic(generic))
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct IconPreloadReport {
    pub icons: Vec<(String, IconSource)>,
    pub failed: Vec<String>,
}

impl IconPreloadReport {
    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }

    pub fn fallback_count(&self) -> usize {
        self.icons
            .iter()
            .filter(|(_, source)| matches!(source, IconSource::Generic(_)))
            .count()
    }
}

/// Resolves icons for all currencies concurrently
pub async fn preload_icons<S>(service: &S, currencies: &[String]) -> IconPreloadReport
where
    S: IconService + ?Sized,
{
    let probes = currencies.iter().map(|currency| async move {
        let result = service.resolve_icon(currency).await;
        (currency.clone(), result)
    });

    let mut report = IconPreloadReport::default();

    for (currency, result) in join_all(probes).await {
        match result {
            Ok(source) => {
                debug!("Icon for {} resolved to {}", currency, source.url());
                report.icons.push((currency, source));
            }
            Err(e) => {
                warn!("No icon could be loaded for {}: {}", currency, e);
                report.failed.push(currency);
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_token_icon_found() {
        let mut server = mockito::Server::new_async().await;
        let _eth = server
            .mock("GET", "/ETH.svg")
            .with_status(200)
            .with_body("<svg/>")
            .create_async()
            .await;

        let service = HttpIconService::new(&format!("{}/", server.url()));
        let source = service.resolve_icon("ETH").await.unwrap();

        assert_eq!(source, IconSource::Token(format!("{}/ETH.svg", server.url())));
    }

    #[tokio::test]
    async fn test_falls_back_to_generic_icon() {
        let mut server = mockito::Server::new_async().await;
        let _missing = server
            .mock("GET", "/FOO.svg")
            .with_status(404)
            .create_async()
            .await;
        let generic = server
            .mock("GET", "/GENERIC.svg")
            .with_status(200)
            .with_body("<svg/>")
            .create_async()
            .await;

        let service = HttpIconService::new(&server.url());
        let source = service.resolve_icon("FOO").await.unwrap();

        generic.assert_async().await;
        assert_eq!(
            source,
            IconSource::Generic(format!("{}/GENERIC.svg", server.url()))
        );
    }

    #[tokio::test]
    async fn test_preload_reports_unresolvable_icons() {
        let mut server = mockito::Server::new_async().await;
        let _eth = server
            .mock("GET", "/ETH.svg")
            .with_status(200)
            .create_async()
            .await;
        let _other = server
            .mock("GET", mockito::Matcher::Regex(r"^/(FOO|GENERIC)\.svg$".to_string()))
            .with_status(404)
            .expect_at_least(1)
            .create_async()
            .await;

        let service = HttpIconService::new(&server.url());
        let currencies = vec!["ETH".to_string(), "FOO".to_string()];
        let report = preload_icons(&service, &currencies).await;

        assert!(report.has_failures());
        assert_eq!(report.failed, vec!["FOO".to_string()]);
        assert_eq!(report.icons.len(), 1);
        assert_eq!(report.fallback_count(), 0);
    }
}
