use rand::Rng;

use crate::prelude::*;

/// Private keys to sign with, in the order they will be used for the
/// current iteration.
#[derive(Clone, PartialEq, Eq, Default, Deref, AsRef, derive_more::Debug)]
#[debug("KeyList({} keys)", self.0.len())]
pub struct KeyList(Vec<String>);

impl KeyList {
    pub fn new(keys: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self(keys.into_iter().map(Into::into).collect())
    }

    /// One key per line, lines that are blank after trimming are skipped.
    pub fn from_lines(contents: &str) -> Self {
        Self::new(
            contents
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty()),
        )
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        shuffle(&mut self.0, rng);
    }
}
