pub mod sidebar;

pub use sidebar::{Overlay, Sidebar};
