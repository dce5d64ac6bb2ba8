use super::aggregate::{Order, OrderId};
use crate::enums::OrderStatus;

/// A status transition requested by a click, not yet confirmed by the service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusChange {
    pub id: OrderId,
    pub from: OrderStatus,
    pub to: OrderStatus,
}

/// Last fetched snapshot of all orders, in sheet order.
///
/// Replaced wholesale on every fetch; afterwards only the status field of
/// individual rows is overwritten.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderStore {
    orders: Vec<Order>,
}

impl OrderStore {
    pub fn new(orders: Vec<Order>) -> Self {
        Self { orders }
    }

    pub fn replace(&mut self, orders: Vec<Order>) {
        self.orders = orders;
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// First order with the given id
    pub fn find(&self, id: &OrderId) -> Option<&Order> {
        self.orders.iter().find(|o| &o.id == id)
    }

    /// Transition a click on `id` would request
    pub fn plan_toggle(&self, id: &OrderId) -> Option<StatusChange> {
        self.find(id).map(|order| StatusChange {
            id: order.id.clone(),
            from: order.status.clone(),
            to: order.status.rotate(),
        })
    }

    /// Overwrite the status of the first order with `id`.
    /// Returns `false` if no such order exists.
    pub fn apply_status(&mut self, id: &OrderId, new_status: OrderStatus) -> bool {
        match self.orders.iter_mut().find(|o| &o.id == id) {
            Some(order) => {
                order.status = new_status;
                true
            }
            None => false,
        }
    }
}
