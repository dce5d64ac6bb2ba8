//! Order tickets read from the spreadsheet service

pub mod aggregate;
pub mod board;
pub mod request;
pub mod response;
pub mod store;
pub mod view;

pub use aggregate::{Order, OrderId};
pub use board::{LoadPhase, OrderBoard, ToggleOutcome};
pub use request::{OrdersQuery, UpdateStatusRequest};
pub use response::OrdersEnvelope;
pub use store::{OrderStore, StatusChange};
pub use view::{compute_view, DisplayCard, TicketView};
