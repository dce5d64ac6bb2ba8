use super::aggregate::{format_time_of_day, Order, OrderId};
use crate::enums::StatusFilter;
use chrono::{DateTime, TimeZone};
use std::fmt::Display;

/// One rendered ticket, i.e. one physical item to serve
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayCard {
    pub order_id: OrderId,
    /// Position of this ticket among the copies of its order
    pub copy_index: usize,
    pub time_label: String,
    pub location_label: String,
    pub product_name: String,
    pub status_label: &'static str,
    pub status_class: String,
}

/// Cards to render plus how many orders survived the filter.
///
/// `matched` drives the "no orders" message: orders with zero quantity
/// count as matched under the `All` filter even though they produce no card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketView {
    pub cards: Vec<DisplayCard>,
    pub matched: usize,
}

impl TicketView {
    pub fn is_empty(&self) -> bool {
        self.matched == 0
    }
}

/// Whether `order` is listed under `filter`
pub fn passes_filter(order: &Order, filter: StatusFilter) -> bool {
    match filter.status() {
        None => true,
        Some(status) => order.status == status && order.quantity > 0,
    }
}

/// Filter, sort newest first, and expand each order into `quantity` cards.
///
/// The sort is stable, so orders with equal timestamps keep sheet order.
/// Rows whose timestamp cannot be parsed go last.
pub fn compute_view<Tz>(orders: &[Order], filter: StatusFilter, tz: &Tz) -> TicketView
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut matched: Vec<(Option<DateTime<Tz>>, &Order)> = orders
        .iter()
        .filter(|order| passes_filter(order, filter))
        .map(|order| (order.placed_at_in(tz), order))
        .collect();

    matched.sort_by(|a, b| b.0.cmp(&a.0));

    let mut cards = Vec::new();
    for (placed_at, order) in &matched {
        let time_label = format_time_of_day(placed_at.as_ref());
        let location_label = order.location_label();
        for copy_index in 0..order.ticket_count() {
            cards.push(DisplayCard {
                order_id: order.id.clone(),
                copy_index,
                time_label: time_label.clone(),
                location_label: location_label.clone(),
                product_name: order.product_name.clone(),
                status_label: order.status.display_name(),
                status_class: order.status.css_class(),
            });
        }
    }

    TicketView {
        cards,
        matched: matched.len(),
    }
}
