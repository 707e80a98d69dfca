use std::sync::Arc;

use crate::app_config::AppConfig;
use crate::interactor::{PriceInteractorImpl, SimulatedSwapInteractor};
use crate::pricing::{HttpIconService, IconService, PriceSource, StaticPriceRepository};
use crate::presenter::SwapPresenterImpl;
use crate::view::SwapView;

/// ServiceContainer provides access to core application dependencies
pub struct ServiceContainer {
    // Interactors
    price_interactor: Arc<PriceInteractorImpl>,
    swap_interactor: Arc<SimulatedSwapInteractor>,

    // Configuration
    config: AppConfig,
}

impl ServiceContainer {
    /// Create a new service container from the loaded configuration
    pub fn new(config: AppConfig) -> Self {
        let price_source = Arc::new(StaticPriceRepository::from_source(&config.price_source))
            as Arc<dyn PriceSource + Send + Sync>;

        Self::with_price_source(config, price_source)
    }

    /// Same as [`ServiceContainer::new`] with a caller-provided price source
    pub fn with_price_source(
        config: AppConfig,
        price_source: Arc<dyn PriceSource + Send + Sync>,
    ) -> Self {
        let icon_service = config.preload_icons.then(|| {
            Arc::new(HttpIconService::new(&config.icon_base_url))
                as Arc<dyn IconService + Send + Sync>
        });

        let price_interactor = Arc::new(PriceInteractorImpl::new(
            price_source,
            icon_service,
            config.price_load_delay(),
        ));

        let swap_interactor = Arc::new(SimulatedSwapInteractor::new(
            config.conversion_latency(),
            config.swap_delay(),
        ));

        Self {
            price_interactor,
            swap_interactor,
            config,
        }
    }

    // Accessor methods

    pub fn price_interactor(&self) -> Arc<PriceInteractorImpl> {
        self.price_interactor.clone()
    }

    pub fn swap_interactor(&self) -> Arc<SimulatedSwapInteractor> {
        self.swap_interactor.clone()
    }

    /// Wire the swap form against `view`
    pub fn swap_presenter<V>(
        &self,
        view: Arc<V>,
    ) -> SwapPresenterImpl<SimulatedSwapInteractor, PriceInteractorImpl, V>
    where
        V: SwapView + 'static,
    {
        SwapPresenterImpl::new(
            self.swap_interactor(),
            self.price_interactor(),
            view,
            &self.config,
        )
    }
}
