//! Fixed UI strings of the board

pub const PAGE_TITLE: &str = "注文管理";
pub const LOADING: &str = "注文データを読み込み中...";
pub const LOAD_FAILED: &str = "注文データの読み込みに失敗しました。再読み込みしてください。";
pub const NO_ORDERS: &str = "表示する注文がありません。";
pub const UPDATE_FAILED: &str = "ステータスの更新に失敗しました。";

/// Value of the table column marking a takeout order
pub const TAKEOUT_SENTINEL: &str = "Takeout";
pub const TAKEOUT: &str = "テイクアウト";
pub const TABLE_PREFIX: &str = "テーブル: ";

/// Shown instead of the time when the timestamp cannot be parsed
pub const UNKNOWN_TIME: &str = "--:--";
