//! Playback scheduling.
//!
//! A deadline-driven state machine with a single outstanding wake-up.
//! The host event loop supplies the clock: it calls [`Scheduler::poll`]
//! with the current `Instant` (typically after sleeping until
//! [`Scheduler::next_deadline`]), and the machine advances the cursor
//! by at most one position per elapsed deadline. Every transition that
//! could invalidate the armed wake-up (pause, seek, stop) bumps a
//! generation counter, so a stale deadline can never resurrect an old
//! cursor.

use crate::engine::config::TimingConfig;
use crate::engine::pacing;
use crate::engine::tokenizer::TokenStream;
use std::time::{Duration, Instant};

/// Playback states. Idle and Paused are equivalent for advancement;
/// only Running arms wake-ups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackPhase {
    Idle,
    Running,
    Paused,
}

/// Outcome of a poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Not running; nothing to do.
    Stopped,
    /// Running, but the armed deadline has not elapsed yet.
    Waiting,
    /// The cursor advanced to this index and the next wake-up is armed.
    Advanced(usize),
    /// The end of the stream was reached; playback stopped.
    Finished,
}

#[derive(Debug, Clone, Copy)]
struct Wakeup {
    deadline: Instant,
    generation: u64,
}

#[derive(Debug)]
pub struct Scheduler {
    phase: PlaybackPhase,
    pending: Option<Wakeup>,
    generation: u64,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler {
    pub fn new() -> Self {
        Self {
            phase: PlaybackPhase::Idle,
            pending: None,
            generation: 0,
        }
    }

    pub fn phase(&self) -> PlaybackPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == PlaybackPhase::Running
    }

    /// The armed wake-up deadline, if any; hosts sleep until this.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.map(|w| w.deadline)
    }

    /// Enter Running and arm the first wake-up. Refused (remaining
    /// Idle/Paused) when the stream is empty or the cursor is out of
    /// bounds.
    pub fn play(
        &mut self,
        tokens: &TokenStream,
        cursor: usize,
        config: &TimingConfig,
        now: Instant,
    ) -> bool {
        let Some(token) = tokens.get(cursor) else {
            return false;
        };
        self.phase = PlaybackPhase::Running;
        self.arm(now + Duration::from_millis(pacing::delay_ms(token, config)));
        true
    }

    /// Cancel the in-flight wait and hold position.
    pub fn pause(&mut self) {
        self.cancel();
        if self.phase == PlaybackPhase::Running {
            self.phase = PlaybackPhase::Paused;
        }
    }

    /// Cancel everything and return to Idle. Used when the token
    /// sequence is replaced, so no wake-up can act on stale indices.
    pub fn stop(&mut self) {
        self.cancel();
        self.phase = PlaybackPhase::Idle;
    }

    /// The cursor moved underneath us (seek or sentence navigation).
    /// Run/pause state is unchanged; if Running, the wait restarts from
    /// the new position at the new token's delay.
    pub fn cursor_moved(
        &mut self,
        tokens: &TokenStream,
        cursor: usize,
        config: &TimingConfig,
        now: Instant,
    ) {
        self.cancel();
        if self.phase == PlaybackPhase::Running {
            if let Some(token) = tokens.get(cursor) {
                self.arm(now + Duration::from_millis(pacing::delay_ms(token, config)));
            } else {
                self.phase = PlaybackPhase::Idle;
            }
        }
    }

    /// Advance the cursor if the armed deadline has elapsed.
    ///
    /// At most one advance happens per call; the next wake-up is armed
    /// from `now`, not from the old deadline, matching the original
    /// timer-chain behavior. Rate changes between polls therefore only
    /// affect the next armed delay, never an in-flight one.
    pub fn poll(
        &mut self,
        tokens: &TokenStream,
        cursor: &mut usize,
        config: &TimingConfig,
        now: Instant,
    ) -> Tick {
        if self.phase != PlaybackPhase::Running {
            return Tick::Stopped;
        }
        let Some(wakeup) = self.pending else {
            // Lost our wake-up without leaving Running; re-arm rather
            // than stall forever.
            self.cursor_moved(tokens, *cursor, config, now);
            return Tick::Waiting;
        };
        if wakeup.generation != self.generation || wakeup.deadline > now {
            return Tick::Waiting;
        }

        let next = *cursor + 1;
        match tokens.get(next) {
            Some(token) => {
                *cursor = next;
                self.arm(now + Duration::from_millis(pacing::delay_ms(token, config)));
                Tick::Advanced(next)
            }
            None => {
                // End of stream: clamp and stop without error.
                *cursor = tokens.len().saturating_sub(1);
                self.cancel();
                self.phase = PlaybackPhase::Idle;
                Tick::Finished
            }
        }
    }

    fn arm(&mut self, deadline: Instant) {
        self.generation += 1;
        self.pending = Some(Wakeup {
            deadline,
            generation: self.generation,
        });
    }

    fn cancel(&mut self) {
        self.generation += 1;
        self.pending = None;
    }
}
