use thiserror::Error;

/// Engine-level failures.
///
/// The engine clamps out-of-range seeks and tolerates malformed markup,
/// so the error surface is small: only configuration mistakes and
/// operations attempted without loaded content are reportable.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum EngineError {
    #[error("invalid reading rate: {0} wpm")]
    InvalidRate(u32),

    #[error("no document loaded")]
    NoDocument,
}
