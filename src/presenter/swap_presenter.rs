use crate::app_config::AppConfig;
use crate::entity::{
    ConversionRequest, Notification, NotificationKind, Side, SwapError, SwapFormState,
};
use crate::interactor::{PriceInteractor, SwapInteractor};
use crate::pricing::PriceStore;
use crate::services::Debouncer;
use crate::utils::is_positive_amount;
use crate::view::SwapView;
use anyhow::Result;
use async_trait::async_trait;
use log::{debug, error, info, warn};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, RwLock};

pub const PRICE_LOAD_FAILED: &str = "Failed to load token prices";
pub const ICON_LOAD_FAILED: &str = "Failed to load some token icons";

#[async_trait]
pub trait SwapPresenter: Send + Sync {
    async fn load_prices(&self) -> Result<()>;
    async fn change_from_amount(&self, amount: &str) -> Result<()>;
    async fn select_currency(&self, side: Side, currency: &str) -> Result<()>;
    async fn flip(&self) -> Result<()>;
    async fn swap(&self) -> Result<()>;
    async fn show_form(&self) -> Result<()>;
    async fn show_prices(&self) -> Result<()>;
    async fn show_usage(&self, commands: &[(&'static str, &'static str)]) -> Result<()>;
    async fn state(&self) -> SwapFormState;
    async fn shutdown(&self);
}

// Everything the command loop and the debouncer task share.
// Locks are never held across a view call or a simulated delay.
struct FormContext<S, P, V> {
    swap_interactor: Arc<S>,
    price_interactor: Arc<P>,
    view: Arc<V>,
    state: Mutex<SwapFormState>,
    prices: RwLock<Arc<PriceStore>>,
    notification_duration: Duration,
}

impl<S, P, V> FormContext<S, P, V>
where
    S: SwapInteractor,
    P: PriceInteractor,
    V: SwapView,
{
    async fn notify(&self, kind: NotificationKind, message: impl Into<String> + Send) -> Result<()> {
        self.view
            .display_notification(Notification::new(kind, message, self.notification_duration))
            .await
    }

    async fn snapshot(&self) -> SwapFormState {
        self.state.lock().await.clone()
    }

    async fn run_conversion(&self, request: ConversionRequest) -> Result<()> {
        if !is_positive_amount(&request.amount) {
            let snapshot = {
                let mut state = self.state.lock().await;
                state.clear_to_amount();
                state.clone()
            };
            return self.view.display_form(&snapshot).await;
        }

        self.state.lock().await.begin_conversion();
        self.view.display_conversion_pending(&request).await?;

        let outcome = self.swap_interactor.quote(&request).await;

        let (applied, snapshot) = {
            let mut state = self.state.lock().await;
            let applied = state.finish_conversion(&request, &outcome);
            (applied, state.clone())
        };

        if !applied {
            debug!(
                "Dropping conversion of {} for {:?}, the form has changed",
                request.amount,
                request.pair()
            );
        } else if let Err(e) = &outcome {
            warn!("Conversion of {} {:?} failed: {}", request.amount, request.pair(), e);
            self.notify(NotificationKind::Error, e.to_string()).await?;
        }

        self.view.display_form(&snapshot).await
    }
}

pub struct SwapPresenterImpl<S, P, V> {
    context: Arc<FormContext<S, P, V>>,
    debouncer: Mutex<Debouncer<ConversionRequest>>,
}

impl<S, P, V> SwapPresenterImpl<S, P, V>
where
    S: SwapInteractor + 'static,
    P: PriceInteractor + 'static,
    V: SwapView + 'static,
{
    pub fn new(
        swap_interactor: Arc<S>,
        price_interactor: Arc<P>,
        view: Arc<V>,
        config: &AppConfig,
    ) -> Self {
        let context = Arc::new(FormContext {
            swap_interactor,
            price_interactor,
            view,
            state: Mutex::new(SwapFormState::new(
                &config.default_from_currency,
                &config.default_to_currency,
            )),
            prices: RwLock::new(Arc::new(PriceStore::empty())),
            notification_duration: config.notification_duration(),
        });

        let handler_context = context.clone();
        let debouncer = Debouncer::spawn(config.debounce(), move |request: ConversionRequest| {
            let context = handler_context.clone();
            async move {
                if let Err(e) = context.run_conversion(request).await {
                    error!("Error applying conversion: {:#}", e);
                }
            }
        });

        Self {
            context,
            debouncer: Mutex::new(debouncer),
        }
    }
}

#[async_trait]
impl<S, P, V> SwapPresenter for SwapPresenterImpl<S, P, V>
where
    S: SwapInteractor + 'static,
    P: PriceInteractor + 'static,
    V: SwapView + 'static,
{
    async fn load_prices(&self) -> Result<()> {
        let context = &self.context;

        context.state.lock().await.set_loading(true);
        context.view.display_loading().await?;

        match context.price_interactor.load_prices().await {
            Ok(store) => {
                let store = Arc::new(store);
                *context.prices.write().await = store.clone();

                let snapshot = {
                    let mut state = context.state.lock().await;
                    state.set_loading(false);
                    state.clone()
                };
                context.view.display_form(&snapshot).await?;

                let report = context.price_interactor.preload_icons(&store).await;
                if report.has_failures() {
                    context
                        .notify(NotificationKind::Warning, ICON_LOAD_FAILED)
                        .await?;
                }
            }
            Err(e) => {
                error!("Error fetching prices: {:#}", e);

                let snapshot = {
                    let mut state = context.state.lock().await;
                    state.set_loading(false);
                    state.clone()
                };
                context
                    .notify(NotificationKind::Error, PRICE_LOAD_FAILED)
                    .await?;
                context.view.display_form(&snapshot).await?;
            }
        }

        Ok(())
    }

    async fn change_from_amount(&self, amount: &str) -> Result<()> {
        let prices = self.context.prices.read().await.clone();

        let request = {
            let mut state = self.context.state.lock().await;
            state.set_from_amount(amount);
            state.conversion_request(prices)
        };

        self.debouncer.lock().await.call(request);

        Ok(())
    }

    async fn select_currency(&self, side: Side, currency: &str) -> Result<()> {
        let prices = self.context.prices.read().await.clone();

        let Some(resolved) = prices.resolve_currency(currency) else {
            warn!("Rejected unknown {} currency {:?}", side, currency);
            return self
                .context
                .notify(NotificationKind::Error, format!("Unknown currency: {}", currency))
                .await;
        };

        let (outcome, snapshot) = {
            let mut state = self.context.state.lock().await;
            let outcome = state.select_currency(side, resolved, &prices);
            (outcome, state.clone())
        };

        if let Err(e) = outcome {
            self.context
                .notify(NotificationKind::Error, e.to_string())
                .await?;
        }

        self.context.view.display_form(&snapshot).await
    }

    async fn flip(&self) -> Result<()> {
        let snapshot = {
            let mut state = self.context.state.lock().await;
            state.flip();
            state.clone()
        };

        self.context.view.display_form(&snapshot).await
    }

    async fn swap(&self) -> Result<()> {
        let context = &self.context;

        let begun = context.state.lock().await.begin_swap();
        let order = match begun {
            Ok(order) => order,
            Err(e) => {
                warn!("Swap rejected: {}", e);
                return context.notify(NotificationKind::Error, e.to_string()).await;
            }
        };

        if let Err(e) = context.view.display_swap_pending(&order).await {
            error!("Failed to display pending swap: {:#}", e);
        }

        let result = context.swap_interactor.execute_swap(&order).await;
        let success = matches!(&result, Ok(r) if r.success);

        let snapshot = {
            let mut state = context.state.lock().await;
            state.finish_swap(success);
            state.clone()
        };

        match result {
            Ok(r) if r.success => {
                info!(
                    "Swap completed: {} {} -> {} {}",
                    r.amount_in, r.from_currency, r.amount_out, r.to_currency
                );
                context
                    .notify(
                        NotificationKind::Success,
                        format!(
                            "Swapped {} {} for {} {}",
                            r.amount_in, r.from_currency, r.amount_out, r.to_currency
                        ),
                    )
                    .await?;
            }
            Ok(r) => {
                let reason = r
                    .error_message
                    .unwrap_or_else(|| "Unknown error".to_string());
                error!("Swap rejected by backend: {}", reason);
                context
                    .notify(NotificationKind::Error, SwapError::SwapFailed(reason).to_string())
                    .await?;
            }
            Err(e) => {
                error!("Swap failed: {:#}", e);
                context
                    .notify(
                        NotificationKind::Error,
                        SwapError::SwapFailed(e.to_string()).to_string(),
                    )
                    .await?;
            }
        }

        context.view.display_form(&snapshot).await
    }

    async fn show_form(&self) -> Result<()> {
        let snapshot = self.context.snapshot().await;
        self.context.view.display_form(&snapshot).await
    }

    async fn show_prices(&self) -> Result<()> {
        let prices = self.context.prices.read().await.clone();
        self.context.view.display_prices(&prices).await
    }

    async fn show_usage(&self, commands: &[(&'static str, &'static str)]) -> Result<()> {
        self.context.view.display_usage(commands).await
    }

    async fn state(&self) -> SwapFormState {
        self.context.snapshot().await
    }

    async fn shutdown(&self) {
        self.debouncer.lock().await.stop().await;
        info!("Swap form shut down");
    }
}
