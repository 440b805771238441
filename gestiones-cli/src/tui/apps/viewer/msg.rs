//! Messages for the worklist viewer.

use crate::api::{Item, StatusFilter};
use crate::tui::TextInputEvent;

use super::logic::sort::SortKey;

/// Every operator intent, timer tick, and async settlement.
#[derive(Debug, Clone)]
pub enum Msg {
    // === Fetch lifecycle ===
    /// Operator asked for a fetch; `force` bypasses the service cache.
    Fetch { force: bool },
    /// The awaited request settled.
    ItemsLoaded {
        generation: u64,
        result: Result<Vec<Item>, String>,
    },
    /// 100 ms cosmetic elapsed-time tick.
    ElapsedTick,
    /// 800 ms progress estimator tick.
    ProgressTick,
    /// The post-settlement delay elapsed; hide the indicator.
    SettleFinished { generation: u64 },

    // === Filters & search ===
    SetStatusFilter(StatusFilter),
    ToggleStatusFilter,
    FromDateInput(TextInputEvent),
    ToDateInput(TextInputEvent),
    SearchInput(TextInputEvent),
    ClearFilters,

    // === Table ===
    SortBy(SortKey),
    NextPage,
    PrevPage,

    // === Chrome ===
    FocusNext,
    FocusPrev,
    Quit,
}
