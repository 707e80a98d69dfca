mod notification;
mod price_record;
mod swap;
mod swap_error;
mod swap_form;
mod swap_result;
mod token_selection;

pub use notification::{Notification, NotificationKind, DEFAULT_NOTIFICATION_DURATION};
pub use price_record::PriceRecord;
pub use swap::{ConversionRequest, SwapOrder};
pub use swap_error::{ConversionError, SwapError};
pub use swap_form::SwapFormState;
pub use swap_result::SwapResult;
pub use token_selection::{Side, TokenSelection};
