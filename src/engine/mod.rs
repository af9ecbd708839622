pub mod anchor;
pub mod config;
pub mod error;
pub mod frame;
pub mod navigator;
pub mod pacing;
pub mod scheduler;
pub mod script;
pub mod sizing;
pub mod token;
pub mod tokenizer;

pub use config::{DisplayMode, EngineConfig, TimingConfig};
pub use error::EngineError;
pub use frame::FrameSlot;
pub use navigator::SectionContext;
pub use scheduler::{PlaybackPhase, Scheduler, Tick};
pub use script::Script;
pub use token::{LengthStats, StyleSet, StyleTag, TocEntry, Token};
pub use tokenizer::{tokenize, tokenize_markup, TokenStream};
