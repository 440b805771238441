//! The application trait for Elm-style TUI apps.

use ratatui::Frame;

use super::command::Command;
use super::subscription::Subscription;

/// An interactive application driven by the [`Runtime`](super::Runtime).
///
/// State is mutated exclusively inside [`App::update`]; [`App::view`] draws
/// from it, and [`App::subscriptions`] declares the inputs (key chords,
/// timers) the app currently listens to. The runtime reconciles subscriptions
/// after every update, so a timer disappears the moment the state stops
/// asking for it.
pub trait App {
    type State;
    type Msg: Clone + Send + 'static;
    type InitParams;

    /// Initial state plus the command to run on startup.
    fn init(params: Self::InitParams) -> (Self::State, Command<Self::Msg>);

    /// Handle one message; the only place state mutates.
    fn update(state: &mut Self::State, msg: Self::Msg) -> Command<Self::Msg>;

    /// Draw the current state.
    fn view(state: &mut Self::State, frame: &mut Frame);

    /// Inputs the app wants delivered as messages, derived from state.
    fn subscriptions(state: &Self::State) -> Vec<Subscription<Self::Msg>>;

    fn title() -> &'static str;
}
