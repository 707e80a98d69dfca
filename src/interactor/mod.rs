pub mod price_interactor;
pub mod swap_interactor;

pub use price_interactor::{PriceInteractor, PriceInteractorImpl};
pub use swap_interactor::{SimulatedSwapInteractor, SwapInteractor};
