pub mod error;
pub mod labels;
pub mod wire;

pub use error::GatewayError;
