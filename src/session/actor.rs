//! The session task.

use tokio::sync::mpsc;
use tokio::time::{sleep_until, Duration, Instant};
use tracing::{debug, warn};

use crate::rules::{Advancement, RoundEngine};
use crate::store::ScoreStore;

use super::Command;

pub(super) async fn run<S: ScoreStore>(mut engine: RoundEngine<S>, mut commands: mpsc::Receiver<Command>) {
    // The engine may have been ticked before it was handed over; wall time
    // counts on from its clock, never restarts it at 0.
    let started = Instant::now();
    let base_ms = engine.now_ms();

    loop {
        let deadline = engine
            .pending_due_at()
            .and_then(|due| started.checked_add(Duration::from_millis(due.saturating_sub(base_ms))));

        tokio::select! {
            command = commands.recv() => {
                let Some(command) = command else {
                    break;
                };
                tick(&mut engine, started, base_ms);
                handle(&mut engine, command);
            }
            _ = sleep_until(deadline.unwrap_or(started)), if deadline.is_some() => {
                tick(&mut engine, started, base_ms);
            }
        }
    }

    debug!(score = engine.state().score, "Session closed");
}

fn tick<S: ScoreStore>(engine: &mut RoundEngine<S>, started: Instant, base_ms: u64) {
    let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    let now_ms = base_ms.saturating_add(elapsed_ms);
    match engine.tick(now_ms) {
        Ok(Some(Advancement::Advanced { pair, score })) => {
            debug!(pair = %pair, score, "Session advanced");
        }
        Ok(Some(Advancement::Lost { score, new_best })) => {
            debug!(score, new_best, "Session round lost");
        }
        Ok(None) => {}
        Err(e) => warn!(error = %e, "Advancement failed"),
    }
}

fn handle<S: ScoreStore>(engine: &mut RoundEngine<S>, command: Command) {
    // A dropped receiver just means the caller stopped waiting.
    match command {
        Command::Guess { guess, reply } => {
            let _ = reply.send(engine.submit_guess(guess));
        }
        Command::Restart { reply } => {
            let _ = reply.send(engine.restart());
        }
        Command::View { reply } => {
            let _ = reply.send(engine.view());
        }
    }
}
