use crate::pricing::{preload_icons, IconPreloadReport, IconService, PriceSource, PriceStore};
use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{debug, info};
use std::sync::Arc;
use std::time::Duration;

#[async_trait]
pub trait PriceInteractor: Send + Sync {
    async fn load_prices(&self) -> Result<PriceStore>;

    async fn preload_icons(&self, prices: &PriceStore) -> IconPreloadReport;
}

pub struct PriceInteractorImpl {
    price_source: Arc<dyn PriceSource + Send + Sync>,
    icon_service: Option<Arc<dyn IconService + Send + Sync>>,
    load_delay: Duration,
}

impl PriceInteractorImpl {
    pub fn new(
        price_source: Arc<dyn PriceSource + Send + Sync>,
        icon_service: Option<Arc<dyn IconService + Send + Sync>>,
        load_delay: Duration,
    ) -> Self {
        Self {
            price_source,
            icon_service,
            load_delay,
        }
    }
}

#[async_trait]
impl PriceInteractor for PriceInteractorImpl {
    async fn load_prices(&self) -> Result<PriceStore> {
        // Simulated network latency
        tokio::time::sleep(self.load_delay).await;

        let records = self
            .price_source
            .fetch_prices()
            .await
            .context("Failed to load token prices")?;

        let store = PriceStore::from_records(records);
        info!("Price list ready with {} currencies", store.len());

        Ok(store)
    }

    async fn preload_icons(&self, prices: &PriceStore) -> IconPreloadReport {
        let Some(icon_service) = &self.icon_service else {
            debug!("Icon preloading disabled");
            return IconPreloadReport::default();
        };

        let currencies: Vec<String> = prices.currencies().map(str::to_string).collect();
        let report = preload_icons(icon_service.as_ref(), &currencies).await;

        info!(
            "Preloaded {} icons ({} generic, {} missing)",
            report.icons.len(),
            report.fallback_count(),
            report.failed.len()
        );

        report
    }
}
