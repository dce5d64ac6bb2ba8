pub mod order_status;
pub mod status_filter;

pub use order_status::OrderStatus;
pub use status_filter::StatusFilter;
