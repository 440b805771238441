//! Terminal runtime: drives an [`App`]'s event loop.
//!
//! Owns the terminal, the message channel, the blocking input reader, and
//! the interval tasks declared by the app's subscriptions. All state
//! mutation happens on this task, one message at a time; spawned futures and
//! timers only ever send messages back through the channel.

use std::collections::HashMap;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use super::app::App;
use super::command::Command;
use super::subscription::{Subscription, chord_matches};

pub struct Runtime;

impl Runtime {
    /// Run `A` until it returns [`Command::Quit`] (or the operator hits
    /// Ctrl+C).
    pub async fn run<A: App>(params: A::InitParams) -> Result<()> {
        log::info!("starting {}", A::title());
        let mut terminal = ratatui::init();
        let result = Self::event_loop::<A>(&mut terminal, params).await;
        ratatui::restore();
        result
    }

    async fn event_loop<A: App>(
        terminal: &mut ratatui::DefaultTerminal,
        params: A::InitParams,
    ) -> Result<()> {
        let (msg_tx, mut msg_rx) = mpsc::unbounded_channel::<A::Msg>();
        let mut input_rx = spawn_input_reader();
        let mut intervals: HashMap<&'static str, JoinHandle<()>> = HashMap::new();

        let (mut state, command) = A::init(params);
        let mut quit = dispatch::<A>(command, &msg_tx);
        reconcile_intervals(&A::subscriptions(&state), &mut intervals, &msg_tx);

        while !quit {
            terminal.draw(|frame| A::view(&mut state, frame))?;

            let msg = tokio::select! {
                event = input_rx.recv() => {
                    let Some(event) = event else { break };
                    match event {
                        Event::Key(key) if key.kind == KeyEventKind::Press => {
                            if key.code == KeyCode::Char('c')
                                && key.modifiers.contains(KeyModifiers::CONTROL)
                            {
                                break;
                            }
                            match route_key::<A>(&state, key) {
                                Some(msg) => msg,
                                None => continue,
                            }
                        }
                        // Resizes redraw on the next pass.
                        _ => continue,
                    }
                }
                msg = msg_rx.recv() => {
                    let Some(msg) = msg else { break };
                    msg
                }
            };

            let command = A::update(&mut state, msg);
            quit = dispatch::<A>(command, &msg_tx);
            reconcile_intervals(&A::subscriptions(&state), &mut intervals, &msg_tx);
        }

        // Late messages from in-flight futures are dropped with the channel.
        for handle in intervals.into_values() {
            handle.abort();
        }
        Ok(())
    }
}

/// Execute a command tree. Returns true when the app asked to quit.
fn dispatch<A: App>(command: Command<A::Msg>, msg_tx: &mpsc::UnboundedSender<A::Msg>) -> bool {
    match command {
        Command::None => false,
        Command::Quit => true,
        Command::Perform(future) => {
            let tx = msg_tx.clone();
            tokio::spawn(async move {
                let _ = tx.send(future.await);
            });
            false
        }
    }
}

/// Map a key press through the app's current subscriptions. Explicit chords
/// win over the catch-all handler.
fn route_key<A: App>(state: &A::State, key: KeyEvent) -> Option<A::Msg> {
    let subs = A::subscriptions(state);
    for sub in &subs {
        if let Subscription::Keyboard {
            code,
            modifiers,
            label,
            msg,
        } = sub
        {
            if chord_matches(*code, *modifiers, &key) {
                log::trace!("key {:?} -> {label}", key.code);
                return Some(msg.clone());
            }
        }
    }
    for sub in &subs {
        if let Subscription::Keys(handler) = sub {
            if let Some(msg) = handler(key) {
                return Some(msg);
            }
        }
    }
    None
}

/// Spawn/abort interval tasks so the running set matches the declared set.
/// Ids are aborted before any new spawn so a replaced id cannot double-fire;
/// ticks already queued for an aborted id are discarded by the app's own
/// guards.
fn reconcile_intervals<Msg: Clone + Send + 'static>(
    subs: &[Subscription<Msg>],
    intervals: &mut HashMap<&'static str, JoinHandle<()>>,
    msg_tx: &mpsc::UnboundedSender<Msg>,
) {
    let declared: Vec<(&'static str, Duration, Msg)> = subs
        .iter()
        .filter_map(|sub| match sub {
            Subscription::Interval { id, period, msg } => Some((*id, *period, msg.clone())),
            _ => None,
        })
        .collect();

    intervals.retain(|id, handle| {
        let keep = declared.iter().any(|(declared_id, _, _)| declared_id == id);
        if !keep {
            handle.abort();
        }
        keep
    });

    for (id, period, msg) in declared {
        if intervals.contains_key(id) {
            continue;
        }
        let tx = msg_tx.clone();
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first tick completes immediately; the ticks we forward
            // start one full period in.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                if tx.send(msg.clone()).is_err() {
                    break;
                }
            }
        });
        intervals.insert(id, handle);
    }
}

/// Blocking reader on a plain thread; crossterm's `read` has no async form
/// without the event-stream feature. The thread exits when the receiver is
/// dropped.
fn spawn_input_reader() -> mpsc::UnboundedReceiver<Event> {
    let (tx, rx) = mpsc::unbounded_channel();
    std::thread::spawn(move || {
        loop {
            match crossterm::event::read() {
                Ok(event) => {
                    if tx.send(event).is_err() {
                        break;
                    }
                }
                Err(error) => {
                    log::warn!("Input reader stopped: {error}");
                    break;
                }
            }
        }
    });
    rx
}
