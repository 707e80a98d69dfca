pub mod debouncer;
pub mod notification_center;

pub use debouncer::Debouncer;
pub use notification_center::NotificationCenter;
