pub mod conversion;
pub mod icon_service;
pub mod price_repository;
pub mod price_store;

pub use conversion::{convert, try_convert, AmountInput, CONVERSION_DECIMALS};
pub use icon_service::{preload_icons, HttpIconService, IconPreloadReport, IconService, IconSource};
pub use price_repository::{PriceSource, PriceSourceKind, StaticPriceRepository};
pub use price_store::PriceStore;
