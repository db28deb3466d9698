use tracing::{debug, warn};

use super::fallback::ImageFallbackState;

/// What a rendering site should currently show
#[derive(Debug, Clone)]
pub enum SlotPhase {
    /// Waiting for the tier in use to load
    Loading,
    /// The tier in use decoded; the rendering site holds the image
    Ready,
    /// Every tier failed; render nothing and request nothing
    Hidden,
}

/// A load the rendering site must start
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierRequest {
    pub tier: usize,
    pub url: String,
}

/// Bookkeeping for one rendered image.
///
/// Each site owns its own slot, so two images of the same entity negotiate
/// their tiers independently. Outcomes for any tier other than the one in
/// use are ignored, which keeps every tier to a single attempt.
#[derive(Debug, Clone)]
pub struct SpriteSlot {
    fallback: Option<ImageFallbackState>,
    phase: SlotPhase,
}

impl SpriteSlot {
    /// Mount a site for `candidates`, returning the first load to start
    pub fn mount(candidates: Vec<String>) -> (Self, Option<TierRequest>) {
        match ImageFallbackState::new(candidates) {
            Ok(state) => {
                let request = TierRequest {
                    tier: state.tier_index(),
                    url: state.current().to_string(),
                };
                let slot = Self {
                    fallback: Some(state),
                    phase: SlotPhase::Loading,
                };
                (slot, Some(request))
            }
            Err(_) => (
                Self {
                    fallback: None,
                    phase: SlotPhase::Hidden,
                },
                None,
            ),
        }
    }

    pub fn phase(&self) -> &SlotPhase {
        &self.phase
    }

    #[cfg(test)]
    pub fn is_hidden(&self) -> bool {
        matches!(self.phase, SlotPhase::Hidden)
    }

    /// URL of the tier in use, `None` once hidden
    #[cfg(test)]
    pub fn current_url(&self) -> Option<&str> {
        self.fallback.as_ref().map(ImageFallbackState::current)
    }

    fn is_pending(&self, tier: usize) -> bool {
        matches!(self.phase, SlotPhase::Loading)
            && self.fallback.as_ref().map(ImageFallbackState::tier_index) == Some(tier)
    }

    /// Accept a successful load of `tier`
    pub fn loaded(&mut self, tier: usize) -> bool {
        if !self.is_pending(tier) {
            return false;
        }
        self.phase = SlotPhase::Ready;
        true
    }

    /// Record a failed load of `tier` and return the next load to start, if any
    pub fn failed(&mut self, tier: usize) -> Option<TierRequest> {
        if !self.is_pending(tier) {
            return None;
        }

        let state = self.fallback.take()?;
        let failed_url = state.current().to_string();

        match state.advance() {
            Ok(next) => {
                debug!(failed = %failed_url, next = next.current(), "sprite tier failed, advancing");
                let request = TierRequest {
                    tier: next.tier_index(),
                    url: next.current().to_string(),
                };
                self.fallback = Some(next);
                Some(request)
            }
            Err(exhausted) => {
                warn!(failed = %failed_url, "{}; hiding image", exhausted);
                self.phase = SlotPhase::Hidden;
                None
            }
        }
    }
}
