//! Async session driver.
//!
//! A session is one tokio task that owns a `RoundEngine`. Front ends talk
//! to it through a cloneable [`SessionHandle`]; every mutation goes
//! through the task, so round state has a single owner even when several
//! callers share the handle.
//!
//! The task maps wall-clock time onto the engine's logical clock
//! (milliseconds since the session started). It ticks the engine before
//! each command and sleeps until the pending advancement is due, so a
//! guess resolves after the reveal delay with nobody polling.

mod actor;

use thiserror::Error;
use tokio::sync::{mpsc, oneshot};

use crate::core::EngineError;
use crate::rules::{Guess, GuessOutcome, RoundEngine};
use crate::store::ScoreStore;
use crate::view::RoundView;

/// Commands are answered one at a time; a short queue is plenty.
const COMMAND_BUFFER: usize = 16;

#[derive(Debug, Error)]
pub enum SessionError {
    /// The session task has stopped.
    #[error("session closed")]
    Closed,

    #[error(transparent)]
    Engine(#[from] EngineError),
}

pub type Result<T> = std::result::Result<T, SessionError>;

enum Command {
    Guess {
        guess: Guess,
        reply: oneshot::Sender<GuessOutcome>,
    },
    Restart {
        reply: oneshot::Sender<std::result::Result<(), EngineError>>,
    },
    View {
        reply: oneshot::Sender<RoundView>,
    },
}

/// Spawns session tasks.
pub struct Session;

impl Session {
    /// Move `engine` into a new task on the current tokio runtime.
    ///
    /// The task exits once every handle is dropped.
    pub fn spawn<S>(engine: RoundEngine<S>) -> SessionHandle
    where
        S: ScoreStore + Send + 'static,
    {
        let (sender, receiver) = mpsc::channel(COMMAND_BUFFER);
        tokio::spawn(actor::run(engine, receiver));
        SessionHandle { sender }
    }
}

/// Cloneable handle to a running session.
#[derive(Clone, Debug)]
pub struct SessionHandle {
    sender: mpsc::Sender<Command>,
}

impl SessionHandle {
    /// Submit a guess. Ignored unless the round is playing.
    pub async fn guess(&self, guess: Guess) -> Result<GuessOutcome> {
        let (reply, response) = oneshot::channel();
        self.send(Command::Guess { guess, reply }).await?;
        response.await.map_err(|_| SessionError::Closed)
    }

    /// Start a new round.
    pub async fn restart(&self) -> Result<()> {
        let (reply, response) = oneshot::channel();
        self.send(Command::Restart { reply }).await?;
        Ok(response.await.map_err(|_| SessionError::Closed)??)
    }

    /// Current snapshot.
    pub async fn view(&self) -> Result<RoundView> {
        let (reply, response) = oneshot::channel();
        self.send(Command::View { reply }).await?;
        response.await.map_err(|_| SessionError::Closed)
    }

    async fn send(&self, command: Command) -> Result<()> {
        self.sender.send(command).await.map_err(|_| SessionError::Closed)
    }
}
