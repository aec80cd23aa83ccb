use crate::prelude::*;

/// Inclusive range, in milliseconds, the pause between two sends is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, CopyGetters, derive_more::Display)]
#[display("[{min_ms}, {max_ms}] ms")]
pub struct PauseBounds {
    #[getset(get_copy = "pub")]
    min_ms: u64,

    #[getset(get_copy = "pub")]
    max_ms: u64,
}

impl PauseBounds {
    pub fn new(min_ms: u64, max_ms: u64) -> Result<Self> {
        if min_ms > max_ms {
            return Err(Error::InvalidPauseBounds { min_ms, max_ms });
        }
        Ok(Self { min_ms, max_ms })
    }
}

impl Default for PauseBounds {
    fn default() -> Self {
        Self {
            min_ms: DEFAULT_PAUSE_MIN_MS,
            max_ms: DEFAULT_PAUSE_MAX_MS,
        }
    }
}
