//! Timed multi-depth decision dispatch.
//!
//! One independent search per depth cutoff from 0 up to the requested
//! level, each on its own thread with an isolated `Bot` and transposition
//! table, all bounded by one shared deadline. The caller collects results
//! until every dispatched level has reported or the deadline passes; a
//! level that misses the deadline keeps running (no cancellation signal is
//! propagated) but its result is dropped. The winner is the HIGHEST level
//! that completed in time, independent of completion order.

use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crate::game_state::game_state::GameState;
use crate::search::alpha_beta::Bot;
use crate::search::decision::DecisionRecord;

/// Run searches at every level `0..=intelligence_level` under the shared
/// `time_limit` and return the deepest decision that finished in time.
///
/// Returns `None` when no level produced a decision before the deadline,
/// whether because all timed out, all failed, or the mover has no action.
/// Failures inside a search task are logged and otherwise treated exactly
/// like a timeout.
pub fn decide_within(
    state: &GameState,
    intelligence_level: u8,
    time_limit: Duration,
) -> Option<DecisionRecord> {
    let deadline = Instant::now() + time_limit;
    let (sender, receiver) = mpsc::channel();

    for level in 0..=intelligence_level {
        let sender = sender.clone();
        let state = state.clone();
        thread::spawn(move || {
            let outcome = Bot::new(level).decide(&state);
            // The receiver is gone once the caller hits the deadline; a
            // straggler's result is simply dropped.
            let _ = sender.send((level, outcome));
        });
    }
    drop(sender);

    let dispatched = intelligence_level as usize + 1;
    let mut reported = 0;
    let mut best: Option<(u8, DecisionRecord)> = None;

    while reported < dispatched {
        let now = Instant::now();
        if now >= deadline {
            break;
        }

        match receiver.recv_timeout(deadline - now) {
            Ok((level, Ok(Some(record)))) => {
                reported += 1;
                let deeper = best
                    .as_ref()
                    .map_or(true, |(kept_level, _)| level > *kept_level);
                if deeper {
                    best = Some((level, record));
                }
            }
            Ok((level, Ok(None))) => {
                reported += 1;
                log::debug!("depth level {level} found no available action");
            }
            Ok((level, Err(error))) => {
                reported += 1;
                log::error!("depth level {level} failed: {error}");
            }
            Err(mpsc::RecvTimeoutError::Timeout) => break,
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    if reported < dispatched {
        log::warn!(
            "{} of {} depth levels missed the {:.1}s time limit",
            dispatched - reported,
            dispatched,
            time_limit.as_secs_f64(),
        );
    }

    best.map(|(_, record)| record)
}
