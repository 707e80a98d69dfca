//! Token swap form
//!
//! Loads a static price list, converts amounts between two selected
//! currencies by price ratio and simulates swaps with notifications.
pub mod app_config;
pub mod commands;
pub mod di;
pub mod entity;
pub mod interactor;
pub mod presenter;
pub mod pricing;
pub mod router;
pub mod services;
pub mod utils;
pub mod view;

// Re-export commonly used items
pub use app_config::AppConfig;
pub use di::ServiceContainer;
pub use entity::*;
pub use interactor::{PriceInteractor, PriceInteractorImpl, SimulatedSwapInteractor, SwapInteractor};
pub use presenter::{SwapPresenter, SwapPresenterImpl};
pub use pricing::{convert, try_convert, PriceSource, PriceStore, StaticPriceRepository};
pub use router::{Flow, TerminalRouter};
pub use services::{Debouncer, NotificationCenter};
pub use view::{SwapView, TerminalSwapView};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
