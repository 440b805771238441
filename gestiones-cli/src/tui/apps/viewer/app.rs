//! The worklist viewer app: fetch lifecycle controller and key routing.

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;

use crate::api::{Item, ItemQuery, StatusFilter};
use crate::tui::{App, Command, Subscription, TextInputEvent, TextInputState};

use super::logic::progress;
use super::logic::sort::SortKey;
use super::msg::Msg;
use super::state::{FetchPhase, Focus, State, ViewerParams};
use super::view;

/// Period of the cosmetic elapsed-time ticker.
const ELAPSED_TICK: Duration = Duration::from_millis(100);
/// Seconds added per elapsed tick. Not derived from wall-clock deltas, so
/// drift under scheduling pressure is expected.
const ELAPSED_STEP: f64 = 0.1;
/// Period of the progress estimator.
const PROGRESS_TICK: Duration = Duration::from_millis(800);
/// How long the full bar stays visible after settlement.
const SETTLE_DELAY: Duration = Duration::from_millis(200);

pub struct ViewerApp;

impl App for ViewerApp {
    type State = State;
    type Msg = Msg;
    type InitParams = ViewerParams;

    fn init(params: ViewerParams) -> (State, Command<Msg>) {
        let mut state = State::default();
        if let Some(status) = params.status {
            state.status_filter = status;
        }
        if let Some(from) = params.from_date {
            state.from_date = TextInputState::with_value(from);
        }
        if let Some(to) = params.to_date {
            state.to_date = TextInputState::with_value(to);
        }
        // Nothing is fetched until the operator asks.
        (state, Command::None)
    }

    fn update(state: &mut State, msg: Msg) -> Command<Msg> {
        match msg {
            Msg::Fetch { force } => {
                // Single-flight: the key bindings are withheld while loading,
                // but the controller is the authority.
                if state.phase != FetchPhase::Idle {
                    return Command::None;
                }
                let generation = state.begin_fetch(force);
                let query = state.query().force_refresh(force);
                Command::perform(run_fetch(query), move |result| Msg::ItemsLoaded {
                    generation,
                    result,
                })
            }

            Msg::ElapsedTick => {
                if state.phase == FetchPhase::InFlight {
                    state.elapsed += ELAPSED_STEP;
                }
                Command::None
            }

            Msg::ProgressTick => {
                if state.phase == FetchPhase::InFlight {
                    state.progress = progress::advance(state.progress);
                }
                Command::None
            }

            Msg::ItemsLoaded { generation, result } => {
                if generation != state.generation || state.phase != FetchPhase::InFlight {
                    // Settlement of a superseded request; nothing to apply.
                    log::debug!("dropping stale settlement (generation {generation})");
                    return Command::None;
                }
                // Leaving InFlight cancels both timers on the next
                // subscription reconcile; the phase guard above keeps any
                // already-queued tick from touching the indicators.
                state.phase = FetchPhase::Settling;
                state.progress = progress::PROGRESS_DONE;
                match result {
                    Ok(items) => {
                        log::info!("fetched {} records", items.len());
                        state.items = items;
                        state.error = None;
                    }
                    Err(message) => {
                        state.error = Some(message);
                    }
                }
                Command::perform(tokio::time::sleep(SETTLE_DELAY), move |_| {
                    Msg::SettleFinished { generation }
                })
            }

            Msg::SettleFinished { generation } => {
                if generation == state.generation && state.phase == FetchPhase::Settling {
                    state.phase = FetchPhase::Idle;
                }
                Command::None
            }

            Msg::SetStatusFilter(status) => {
                state.status_filter = status;
                Command::None
            }

            Msg::ToggleStatusFilter => {
                state.status_filter = state.status_filter.toggled();
                Command::None
            }

            Msg::FromDateInput(event) => {
                // Date edits keep the current page.
                state.from_date.handle_event(event, Some(10));
                Command::None
            }

            Msg::ToDateInput(event) => {
                state.to_date.handle_event(event, Some(10));
                Command::None
            }

            Msg::SearchInput(event) => {
                state.search.handle_event(event, None);
                state.current_page = 1;
                Command::None
            }

            Msg::ClearFilters => {
                state.clear_filters();
                Command::None
            }

            Msg::SortBy(key) => {
                state.sort = state.sort.toggle(key);
                Command::None
            }

            Msg::NextPage => {
                let pages = state.total_pages().max(1);
                state.current_page = (state.current_page + 1).min(pages);
                Command::None
            }

            Msg::PrevPage => {
                state.current_page = state.current_page.saturating_sub(1).max(1);
                Command::None
            }

            Msg::FocusNext => {
                state.focus = state.focus.next();
                Command::None
            }

            Msg::FocusPrev => {
                state.focus = state.focus.prev();
                Command::None
            }

            Msg::Quit => Command::Quit,
        }
    }

    fn view(state: &mut State, frame: &mut Frame) {
        view::render(state, frame);
    }

    fn subscriptions(state: &State) -> Vec<Subscription<Msg>> {
        let mut subs = Vec::new();

        if state.phase == FetchPhase::InFlight {
            subs.push(Subscription::interval(
                "elapsed-tick",
                ELAPSED_TICK,
                Msg::ElapsedTick,
            ));
            subs.push(Subscription::interval(
                "progress-tick",
                PROGRESS_TICK,
                Msg::ProgressTick,
            ));
        }

        subs.push(Subscription::keyboard(KeyCode::Esc, "Salir", Msg::Quit));
        subs.push(Subscription::keyboard(
            KeyCode::Tab,
            "Siguiente campo",
            Msg::FocusNext,
        ));
        subs.push(Subscription::keyboard(
            KeyCode::BackTab,
            "Campo anterior",
            Msg::FocusPrev,
        ));

        if !state.loading() {
            subs.push(Subscription::keyboard(
                KeyCode::Enter,
                "Consultar",
                Msg::Fetch { force: false },
            ));
            subs.push(Subscription::ctrl(
                KeyCode::Char('r'),
                "Recargar",
                Msg::Fetch { force: true },
            ));
        }
        subs.push(Subscription::ctrl(
            KeyCode::Char('l'),
            "Limpiar filtros",
            Msg::ClearFilters,
        ));
        subs.push(Subscription::keyboard(
            KeyCode::PageDown,
            "Página siguiente",
            Msg::NextPage,
        ));
        subs.push(Subscription::keyboard(
            KeyCode::PageUp,
            "Página anterior",
            Msg::PrevPage,
        ));

        match state.focus {
            Focus::Status => {
                subs.push(Subscription::keyboard(
                    KeyCode::Left,
                    "Pendientes",
                    Msg::SetStatusFilter(StatusFilter::Pendiente),
                ));
                subs.push(Subscription::keyboard(
                    KeyCode::Right,
                    "Procesados",
                    Msg::SetStatusFilter(StatusFilter::Procesados),
                ));
                subs.push(Subscription::keyboard(
                    KeyCode::Char(' '),
                    "Cambiar estado",
                    Msg::ToggleStatusFilter,
                ));
            }
            Focus::FromDate => subs.push(Subscription::keys(from_date_keys)),
            Focus::ToDate => subs.push(Subscription::keys(to_date_keys)),
            Focus::Search => subs.push(Subscription::keys(search_keys)),
            Focus::Table => {
                subs.push(Subscription::keyboard(
                    KeyCode::Char('t'),
                    "Ordenar por identificador",
                    Msg::SortBy(SortKey::Title),
                ));
                subs.push(Subscription::keyboard(
                    KeyCode::Char('o'),
                    "Ordenar por origen",
                    Msg::SortBy(SortKey::List),
                ));
                subs.push(Subscription::keyboard(
                    KeyCode::Char('f'),
                    "Ordenar por fecha",
                    Msg::SortBy(SortKey::Created),
                ));
                subs.push(Subscription::keyboard(
                    KeyCode::Char('e'),
                    "Ordenar por estatus",
                    Msg::SortBy(SortKey::Status),
                ));
                subs.push(Subscription::keyboard(
                    KeyCode::Left,
                    "Página anterior",
                    Msg::PrevPage,
                ));
                subs.push(Subscription::keyboard(
                    KeyCode::Right,
                    "Página siguiente",
                    Msg::NextPage,
                ));
            }
        }

        subs
    }

    fn title() -> &'static str {
        "Visor de Gestiones"
    }
}

fn from_date_keys(key: KeyEvent) -> Option<Msg> {
    TextInputEvent::from_key(key).map(Msg::FromDateInput)
}

fn to_date_keys(key: KeyEvent) -> Option<Msg> {
    TextInputEvent::from_key(key).map(Msg::ToDateInput)
}

fn search_keys(key: KeyEvent) -> Option<Msg> {
    TextInputEvent::from_key(key).map(Msg::SearchInput)
}

/// Execute one fetch. Transport failures and non-success responses collapse
/// into the single connectivity message; the cause goes to the log.
async fn run_fetch(query: ItemQuery) -> Result<Vec<Item>, String> {
    let client = crate::global_client();
    client.fetch_items(&query).await.map_err(|error| {
        log::warn!("fetch failed: {error:#}");
        "Error de conexión con el servidor".to_string()
    })
}
