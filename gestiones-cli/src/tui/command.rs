//! Commands: side effects requested by an app's `update`.

use std::future::Future;

use futures::future::BoxFuture;

/// A side effect to run after an update cycle.
pub enum Command<Msg> {
    /// Nothing to do.
    None,
    /// Tear down the runtime and leave the TUI.
    Quit,
    /// Run a future on the runtime and feed its output back as a message.
    Perform(BoxFuture<'static, Msg>),
}

impl<Msg: Send + 'static> Command<Msg> {
    /// Run `future` and map its output into a message.
    pub fn perform<T, Fut, F>(future: Fut, to_msg: F) -> Self
    where
        Fut: Future<Output = T> + Send + 'static,
        F: FnOnce(T) -> Msg + Send + 'static,
    {
        Command::Perform(Box::pin(async move { to_msg(future.await) }))
    }
}

impl<Msg> std::fmt::Debug for Command<Msg> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Quit => write!(f, "Quit"),
            Self::Perform(_) => write!(f, "Perform(..)"),
        }
    }
}
