use thiserror::Error;

/// Every tier of one image failed. Not an application error: the image
/// is simply not shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("all {attempted} image sources failed")]
pub struct ImageResourceExhausted {
    pub attempted: usize,
}

/// Which candidate one rendered image is currently using.
/// Only ever moves forward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFallbackState {
    tier_index: usize,
    candidates: Vec<String>,
}

impl ImageFallbackState {
    /// Start at the first candidate. An empty chain is exhausted from the outset.
    pub fn new(candidates: Vec<String>) -> Result<Self, ImageResourceExhausted> {
        if candidates.is_empty() {
            return Err(ImageResourceExhausted { attempted: 0 });
        }
        Ok(Self {
            tier_index: 0,
            candidates,
        })
    }

    /// URL of the tier in use
    pub fn current(&self) -> &str {
        &self.candidates[self.tier_index]
    }

    pub fn tier_index(&self) -> usize {
        self.tier_index
    }

    /// Move past a failed tier
    pub fn advance(self) -> Result<Self, ImageResourceExhausted> {
        let next = self.tier_index + 1;
        if next >= self.candidates.len() {
            return Err(ImageResourceExhausted {
                attempted: self.candidates.len(),
            });
        }
        Ok(Self {
            tier_index: next,
            candidates: self.candidates,
        })
    }
}
