//! Shared types for the order ticket board.
//!
//! Everything here is target-independent so the board logic can be tested
//! natively, without a browser.

pub mod domain;
pub mod enums;
pub mod shared;
