use crate::entity::{PriceRecord, SwapError};
use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{error, info};
use reqwest::Client;
use std::path::PathBuf;

/// Price list compiled into the binary, used when no other source is configured
const BUNDLED_PRICES: &str = include_str!("../../assets/prices.json");

/// Source of the raw price records loaded at startup
#[async_trait]
pub trait PriceSource: Send + Sync {
    /// Get every record of the source, duplicates included
    async fn fetch_prices(&self) -> Result<Vec<PriceRecord>>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum PriceSourceKind {
    Bundled,
    File(PathBuf),
    Url(String),
}

impl PriceSourceKind {
    /// "bundled" (or empty), an http(s) URL, or a file path
    pub fn parse(source: &str) -> Self {
        let source = source.trim();

        if source.is_empty() || source.eq_ignore_ascii_case("bundled") {
            PriceSourceKind::Bundled
        } else if source.starts_with("http://") || source.starts_with("https://") {
            PriceSourceKind::Url(source.to_string())
        } else {
            PriceSourceKind::File(PathBuf::from(source))
        }
    }
}

/// Repository for the static JSON price list
pub struct StaticPriceRepository {
    http_client: Client,
    kind: PriceSourceKind,
}

impl StaticPriceRepository {
    pub fn new(kind: PriceSourceKind) -> Self {
        Self {
            http_client: Client::new(),
            kind,
        }
    }

    pub fn from_source(source: &str) -> Self {
        Self::new(PriceSourceKind::parse(source))
    }

    async fn fetch_url(&self, url: &str) -> Result<String, SwapError> {
        let response = self.http_client.get(url).send().await.map_err(|e| {
            error!("Failed to fetch prices from {}: {}", url, e);
            e
        })?;

        info!("Price source response: {} for {}", response.status(), url);

        if !response.status().is_success() {
            return Err(SwapError::PriceSource(format!(
                "{} returned {}",
                url,
                response.status()
            )));
        }

        Ok(response.text().await?)
    }
}

/// Parses a JSON array of `{currency, price, ...}` objects
pub fn parse_prices(body: &str) -> Result<Vec<PriceRecord>, SwapError> {
    Ok(serde_json::from_str(body)?)
}

#[async_trait]
impl PriceSource for StaticPriceRepository {
    async fn fetch_prices(&self) -> Result<Vec<PriceRecord>> {
        let body = match &self.kind {
            PriceSourceKind::Bundled => BUNDLED_PRICES.to_string(),
            PriceSourceKind::File(path) => tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read price file {}", path.display()))?,
            PriceSourceKind::Url(url) => self
                .fetch_url(url)
                .await
                .with_context(|| format!("Failed to fetch price list from {}", url))?,
        };

        let records = parse_prices(&body).context("Failed to parse price list")?;
        info!("Loaded {} price records from {:?}", records.len(), self.kind);

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_source_kind() {
        assert_eq!(PriceSourceKind::parse(""), PriceSourceKind::Bundled);
        assert_eq!(PriceSourceKind::parse("Bundled"), PriceSourceKind::Bundled);
        assert_eq!(
            PriceSourceKind::parse("https://example.com/prices.json"),
            PriceSourceKind::Url("https://example.com/prices.json".to_string())
        );
        assert_eq!(
            PriceSourceKind::parse("./data/prices.json"),
            PriceSourceKind::File(PathBuf::from("./data/prices.json"))
        );
    }

    #[test]
    fn test_parse_prices_ignores_extra_fields() {
        let body = r#"[
            {"currency": "ETH", "date": "2023-08-29T07:10:52.000Z", "price": 1645.93},
            {"currency": "USDC", "date": "2023-08-29T07:10:40.000Z", "price": 0.99}
        ]"#;

        let records = parse_prices(body).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0], PriceRecord::new("ETH", 1645.93));
    }

    #[test]
    fn test_parse_prices_rejects_garbage() {
        assert!(matches!(parse_prices("{not json"), Err(SwapError::Json(_))));
    }

    #[tokio::test]
    async fn test_bundled_prices_contain_defaults() {
        let repository = StaticPriceRepository::new(PriceSourceKind::Bundled);

        let records = repository.fetch_prices().await.unwrap();

        assert!(records.iter().any(|r| r.currency == "ETH"));
        assert!(records.iter().any(|r| r.currency == "USDC"));
        assert!(records.iter().all(|r| r.price > 0.0));
    }

    #[tokio::test]
    async fn test_file_source() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"currency": "ETH", "price": 2000}}, {{"currency": "ETH", "price": 2100}}]"#
        )
        .unwrap();

        let repository = StaticPriceRepository::from_source(file.path().to_str().unwrap());
        let records = repository.fetch_prices().await.unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[1].price, 2100.0);
    }

    #[tokio::test]
    async fn test_missing_file_fails() {
        let repository = StaticPriceRepository::from_source("/definitely/not/here/prices.json");

        assert!(repository.fetch_prices().await.is_err());
    }

    #[tokio::test]
    async fn test_url_source() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/prices.json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"[{"currency": "SWTH", "price": 0.004}]"#)
            .create_async()
            .await;

        let repository = StaticPriceRepository::from_source(&format!("{}/prices.json", server.url()));
        let records = repository.fetch_prices().await.unwrap();

        mock.assert_async().await;
        assert_eq!(records, vec![PriceRecord::new("SWTH", 0.004)]);
    }

    #[tokio::test]
    async fn test_url_source_error_status() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/prices.json")
            .with_status(500)
            .create_async()
            .await;

        let repository = StaticPriceRepository::from_source(&format!("{}/prices.json", server.url()));

        assert!(repository.fetch_prices().await.is_err());
    }
}
