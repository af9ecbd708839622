//! The owned reading context.
//!
//! [`Reader`] ties the engine components together around one token
//! stream and one cursor: the scheduler, navigator and frame composer
//! all observe the same position. Loading new markup atomically swaps
//! the stream, cancels any pending wake-up and resets the cursor, so
//! no component can see an index from the old document against the
//! new one.

use crate::engine::config::{DisplayMode, EngineConfig};
use crate::engine::error::EngineError;
use crate::engine::frame::{self, FrameSlot};
use crate::engine::navigator::{self, SectionContext};
use crate::engine::scheduler::{PlaybackPhase, Scheduler, Tick};
use crate::engine::sizing::{self, FontSizes};
use crate::engine::token::{TocEntry, Token};
use crate::engine::tokenizer::{self, TokenStream};
use std::time::Instant;

pub struct Reader {
    stream: TokenStream,
    cursor: usize,
    scheduler: Scheduler,
    config: EngineConfig,
}

impl Default for Reader {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl Reader {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            stream: TokenStream::default(),
            cursor: 0,
            scheduler: Scheduler::new(),
            config,
        }
    }

    /// Replace the document. Any pending advance is cancelled before
    /// the swap; the cursor resets to 0 and playback stops.
    pub fn load_markup(&mut self, markup: &str) {
        self.scheduler.stop();
        self.stream = tokenizer::tokenize_markup(markup);
        self.cursor = 0;
    }

    // Read-only views shared by the presentation layer.

    pub fn tokens(&self) -> &TokenStream {
        &self.stream
    }

    pub fn toc(&self) -> &[TocEntry] {
        &self.stream.toc
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn current_token(&self) -> Option<&Token> {
        self.stream.get(self.cursor)
    }

    pub fn phase(&self) -> PlaybackPhase {
        self.scheduler.phase()
    }

    pub fn is_playing(&self) -> bool {
        self.scheduler.is_running()
    }

    /// Fraction of the document consumed, in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        if self.stream.is_empty() {
            0.0
        } else {
            self.cursor as f64 / self.stream.len() as f64
        }
    }

    pub fn frame(&self) -> Vec<FrameSlot<'_>> {
        frame::compose(&self.stream, self.cursor, self.config.display_mode)
    }

    pub fn active_context(&self) -> SectionContext {
        navigator::active_context(&self.stream.toc, self.cursor)
    }

    pub fn font_sizes(&self) -> FontSizes {
        sizing::font_sizes(&self.stream.length_stats)
    }

    // Playback control.

    /// Start or resume playback.
    pub fn play(&mut self, now: Instant) -> Result<(), EngineError> {
        if self
            .scheduler
            .play(&self.stream, self.cursor, &self.config.timing, now)
        {
            Ok(())
        } else {
            Err(EngineError::NoDocument)
        }
    }

    pub fn pause(&mut self) {
        self.scheduler.pause();
    }

    /// Drive playback; hosts call this after sleeping until
    /// [`Reader::next_deadline`].
    pub fn poll(&mut self, now: Instant) -> Tick {
        self.scheduler
            .poll(&self.stream, &mut self.cursor, &self.config.timing, now)
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.scheduler.next_deadline()
    }

    /// Back to the beginning; run/pause state is unchanged.
    pub fn reset(&mut self, now: Instant) {
        self.seek(0, now);
    }

    /// Move the cursor, clamped into bounds. If playing, the wait
    /// restarts from the new token.
    pub fn seek(&mut self, index: usize, now: Instant) {
        self.cursor = index.min(self.stream.len().saturating_sub(1));
        self.scheduler
            .cursor_moved(&self.stream, self.cursor, &self.config.timing, now);
    }

    pub fn next_sentence(&mut self, now: Instant) {
        let target = navigator::next_sentence(&self.stream, self.cursor);
        self.seek(target, now);
    }

    pub fn previous_sentence(&mut self, now: Instant) {
        let target = navigator::previous_sentence(&self.stream, self.cursor);
        self.seek(target, now);
    }

    // Configuration.

    /// Change the rate. An already-armed wake-up keeps its old delay;
    /// the new rate applies from the next one.
    pub fn set_wpm(&mut self, wpm: u32) -> Result<(), EngineError> {
        self.config.timing.set_wpm(wpm)
    }

    pub fn adjust_wpm(&mut self, delta: i32) {
        self.config.timing.adjust_wpm(delta);
    }

    pub fn wpm(&self) -> u32 {
        self.config.timing.wpm
    }

    pub fn set_display_mode(&mut self, mode: DisplayMode) {
        self.config.display_mode = mode;
    }
}
