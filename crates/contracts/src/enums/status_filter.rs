use super::OrderStatus;
use serde::{Deserialize, Serialize};

/// Status filter selected on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Pending,
    Delivered,
    Cancelled,
}

impl StatusFilter {
    /// Value of the `data-filter` attribute
    pub fn code(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Pending => "pending",
            StatusFilter::Delivered => "delivered",
            StatusFilter::Cancelled => "cancelled",
        }
    }

    /// Button caption
    pub fn display_name(&self) -> &'static str {
        match self {
            StatusFilter::All => "すべて",
            StatusFilter::Pending => "未提供",
            StatusFilter::Delivered => "提供済み",
            StatusFilter::Cancelled => "キャンセル",
        }
    }

    /// All filters in button order
    pub fn all() -> Vec<StatusFilter> {
        vec![
            StatusFilter::All,
            StatusFilter::Pending,
            StatusFilter::Delivered,
            StatusFilter::Cancelled,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "all" => Some(StatusFilter::All),
            "pending" => Some(StatusFilter::Pending),
            "delivered" => Some(StatusFilter::Delivered),
            "cancelled" => Some(StatusFilter::Cancelled),
            _ => None,
        }
    }

    /// The status a filtered view is restricted to; `None` for `All`.
    pub fn status(&self) -> Option<OrderStatus> {
        match self {
            StatusFilter::All => None,
            StatusFilter::Pending => Some(OrderStatus::Pending),
            StatusFilter::Delivered => Some(OrderStatus::Delivered),
            StatusFilter::Cancelled => Some(OrderStatus::Cancelled),
        }
    }
}
