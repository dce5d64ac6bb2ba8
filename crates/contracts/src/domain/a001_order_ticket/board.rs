use super::aggregate::{Order, OrderId};
use super::store::{OrderStore, StatusChange};
use super::view::{compute_view, TicketView};
use crate::enums::StatusFilter;
use crate::shared::GatewayError;
use chrono::TimeZone;
use std::fmt::Display;

/// Where the one-time initial load stands
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadPhase {
    #[default]
    Loading,
    Ready,
    /// The snapshot could not be fetched; the list stays empty
    Failed(GatewayError),
}

/// Result of finishing a click-driven status change
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The service accepted the request and the store was updated
    Applied(StatusChange),
    /// The request never reached the service; nothing changed
    Failed(GatewayError),
    /// The order disappeared from the store while the request was in flight
    Stale,
}

/// Application state of the order board: the snapshot, the active filter
/// and the load phase.
///
/// `revision` grows by one on every change that needs a re-render.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderBoard {
    store: OrderStore,
    filter: StatusFilter,
    phase: LoadPhase,
    revision: u64,
}

impl OrderBoard {
    pub fn store(&self) -> &OrderStore {
        &self.store
    }

    pub fn filter(&self) -> StatusFilter {
        self.filter
    }

    pub fn phase(&self) -> &LoadPhase {
        &self.phase
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Install the result of the initial fetch.
    ///
    /// A rejected envelope yields an empty, ready board; transport failures
    /// put the board into `Failed`.
    pub fn finish_load(&mut self, result: Result<Vec<Order>, GatewayError>) {
        match result {
            Ok(orders) => {
                self.store.replace(orders);
                self.phase = LoadPhase::Ready;
            }
            Err(err) if !err.is_transport() => {
                self.store.replace(Vec::new());
                self.phase = LoadPhase::Ready;
            }
            Err(err) => {
                self.store.replace(Vec::new());
                self.phase = LoadPhase::Failed(err);
            }
        }
        self.touch();
    }

    /// Switch the filter; the held snapshot is reused.
    pub fn set_filter(&mut self, filter: StatusFilter) {
        self.filter = filter;
        self.touch();
    }

    /// Change a click on `id` would request, or `None` for an unknown id
    pub fn plan_toggle(&self, id: &OrderId) -> Option<StatusChange> {
        self.store.plan_toggle(id)
    }

    /// Apply `change` if the write request went out.
    pub fn complete_toggle(
        &mut self,
        change: StatusChange,
        result: Result<(), GatewayError>,
    ) -> ToggleOutcome {
        if let Err(err) = result {
            return ToggleOutcome::Failed(err);
        }
        if !self.store.apply_status(&change.id, change.to.clone()) {
            return ToggleOutcome::Stale;
        }
        self.touch();
        ToggleOutcome::Applied(change)
    }

    /// Cards for the current filter
    pub fn view<Tz>(&self, tz: &Tz) -> TicketView
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        compute_view(self.store.orders(), self.filter, tz)
    }

    fn touch(&mut self) {
        self.revision += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::OrderStatus;
    use chrono::Utc;
    use serde_json::json;

    fn snapshot() -> Vec<Order> {
        serde_json::from_value(json!([
            {"ID": 1, "日時": "2024-05-01T10:00:00Z", "テーブル番号": "5", "商品名": "餃子", "数量": 2, "ステータス": "pending"},
            {"ID": 2, "日時": "2024-05-01T11:00:00Z", "テーブル番号": "Takeout", "商品名": "炒飯", "数量": 0, "ステータス": "delivered"}
        ]))
        .unwrap()
    }

    fn loaded() -> OrderBoard {
        let mut board = OrderBoard::default();
        board.finish_load(Ok(snapshot()));
        board
    }

    #[test]
    fn test_initial_state() {
        let board = OrderBoard::default();
        assert_eq!(board.phase(), &LoadPhase::Loading);
        assert_eq!(board.filter(), StatusFilter::All);
        assert!(board.store().is_empty());
    }

    #[test]
    fn test_finish_load_transport_failure() {
        let mut board = OrderBoard::default();
        board.finish_load(Err(GatewayError::Http(500)));

        assert_eq!(board.phase(), &LoadPhase::Failed(GatewayError::Http(500)));
        assert!(board.view(&Utc).cards.is_empty());
    }

    #[test]
    fn test_finish_load_rejected_is_empty_ready() {
        let mut board = OrderBoard::default();
        board.finish_load(Err(GatewayError::Rejected(Some("no sheet".to_string()))));

        assert_eq!(board.phase(), &LoadPhase::Ready);
        assert!(board.view(&Utc).is_empty());
    }

    #[test]
    fn test_successful_toggle_applies_and_bumps_revision_once() {
        let mut board = loaded();
        let before = board.revision();

        let change = board.plan_toggle(&OrderId::from("1")).unwrap();
        let outcome = board.complete_toggle(change.clone(), Ok(()));

        assert_eq!(outcome, ToggleOutcome::Applied(change));
        assert_eq!(board.revision(), before + 1);
        assert_eq!(
            board.store().find(&OrderId::from("1")).unwrap().status,
            OrderStatus::Delivered
        );
    }

    #[test]
    fn test_failed_toggle_leaves_state() {
        let mut board = loaded();
        let before = board.clone();

        let change = board.plan_toggle(&OrderId::from("1")).unwrap();
        let err = GatewayError::Network("TypeError: Failed to fetch".to_string());
        let outcome = board.complete_toggle(change, Err(err.clone()));

        assert_eq!(outcome, ToggleOutcome::Failed(err));
        assert_eq!(board, before);
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let board = loaded();
        assert_eq!(board.plan_toggle(&OrderId::from("99")), None);
    }

    #[test]
    fn test_toggle_stale_after_reload() {
        let mut board = loaded();
        let change = board.plan_toggle(&OrderId::from("1")).unwrap();
        board.finish_load(Ok(Vec::new()));
        let before = board.revision();

        assert_eq!(board.complete_toggle(change, Ok(())), ToggleOutcome::Stale);
        assert_eq!(board.revision(), before);
    }

    #[test]
    fn test_end_to_end_scenario() {
        let mut board = loaded();

        let view = board.view(&Utc);
        assert_eq!(view.cards.len(), 2);
        assert!(view.cards.iter().all(|c| c.order_id.as_str() == "1"));

        // Either card resolves to order 1
        let clicked = view.cards[1].order_id.clone();
        let change = board.plan_toggle(&clicked).unwrap();
        board.complete_toggle(change, Ok(()));
        assert_eq!(
            board.store().find(&OrderId::from("1")).unwrap().status,
            OrderStatus::Delivered
        );

        board.set_filter(StatusFilter::Pending);
        let view = board.view(&Utc);
        assert!(view.cards.is_empty());
        assert!(view.is_empty());
    }
}
