//! swiftread: an RSVP (rapid serial visual presentation) reading engine.
//!
//! The crate turns a restricted HTML-like markup string into an ordered
//! stream of styled tokens, paces through that stream at a configurable
//! words-per-minute rate modulated by punctuation, headings and word
//! length, and supports sentence/section navigation over the same
//! stream. Rendering, file-format ingestion and UI chrome live outside
//! this crate; a host drives the [`reader::Reader`] from its own event
//! loop and paints the composed frames however it likes.
//!
//! ```
//! use std::time::Instant;
//! use swiftread::reader::Reader;
//!
//! let mut reader = Reader::default();
//! reader.load_markup("<h1>Title</h1><p>The quick fox.</p>");
//! assert_eq!(reader.tokens().len(), 4);
//!
//! let now = Instant::now();
//! reader.play(now).unwrap();
//! assert!(reader.next_deadline().is_some());
//! ```

pub mod engine;
pub mod markup;
pub mod reader;

pub use engine::{
    DisplayMode, EngineConfig, EngineError, FrameSlot, PlaybackPhase, Script, SectionContext,
    StyleSet, StyleTag, Tick, TimingConfig, TocEntry, Token, TokenStream,
};
pub use reader::Reader;
