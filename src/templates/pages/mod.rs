pub mod admin;
pub mod batch_tracker;
pub mod home;
pub mod order;

pub use admin::{admin_page, AdminNotice};
pub use batch_tracker::batch_tracker_page;
pub use home::home_page;
pub use order::{order_page, OrderVm};
