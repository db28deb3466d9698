use std::collections::HashMap;

use iced::widget::image::Handle;
use tracing::debug;

use crate::sprites::loader::SpriteBytes;
use crate::sprites::slot::{SlotPhase, SpriteSlot, TierRequest};

/// Identifies one mounted image. Never reused, so outcomes addressed to an
/// unmounted image find nothing and are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotId(u64);

/// All images currently on screen: one per grid card plus the dialog image
#[derive(Debug, Default)]
pub struct SpriteBoard {
    next_id: u64,
    slots: HashMap<SlotId, SpriteSlot>,
    handles: HashMap<SlotId, Handle>,
    grid: Vec<SlotId>,
    detail: Option<SlotId>,
}

/// How a mounted image should be drawn
pub enum SlotView<'a> {
    Pending,
    Ready(&'a Handle),
    Hidden,
}

impl SpriteBoard {
    fn mount(&mut self, candidates: Vec<String>) -> (SlotId, Option<TierRequest>) {
        self.next_id += 1;
        let id = SlotId(self.next_id);
        let (slot, request) = SpriteSlot::mount(candidates);
        self.slots.insert(id, slot);
        (id, request)
    }

    fn unmount(&mut self, id: SlotId) {
        self.slots.remove(&id);
        self.handles.remove(&id);
    }

    /// Replace every grid image; one chain per card, in card order
    pub fn mount_grid(&mut self, chains: Vec<Vec<String>>) -> Vec<(SlotId, TierRequest)> {
        self.clear_grid();

        let mut requests = Vec::new();
        for chain in chains {
            let (id, request) = self.mount(chain);
            self.grid.push(id);
            requests.extend(request.map(|r| (id, r)));
        }
        requests
    }

    pub fn clear_grid(&mut self) {
        for id in std::mem::take(&mut self.grid) {
            self.unmount(id);
        }
    }

    pub fn mount_detail(&mut self, chain: Vec<String>) -> Option<(SlotId, TierRequest)> {
        self.clear_detail();
        let (id, request) = self.mount(chain);
        self.detail = Some(id);
        request.map(|r| (id, r))
    }

    pub fn clear_detail(&mut self) {
        if let Some(id) = self.detail.take() {
            self.unmount(id);
        }
    }

    pub fn loaded(&mut self, id: SlotId, tier: usize, sprite: SpriteBytes) {
        let Some(slot) = self.slots.get_mut(&id) else {
            return;
        };
        if slot.loaded(tier) {
            debug!(?id, tier, width = sprite.width, height = sprite.height, "sprite ready");
            self.handles.insert(id, Handle::from_bytes(sprite.bytes));
        }
    }

    /// Returns the next tier to load for `id`, if it has one left
    pub fn failed(&mut self, id: SlotId, tier: usize) -> Option<TierRequest> {
        self.slots.get_mut(&id)?.failed(tier)
    }

    pub fn grid_slot(&self, index: usize) -> Option<SlotId> {
        self.grid.get(index).copied()
    }

    pub fn detail_slot(&self) -> Option<SlotId> {
        self.detail
    }

    pub fn view(&self, id: SlotId) -> SlotView<'_> {
        match self.slots.get(&id).map(SpriteSlot::phase) {
            Some(SlotPhase::Ready) => self
                .handles
                .get(&id)
                .map_or(SlotView::Pending, SlotView::Ready),
            Some(SlotPhase::Loading) => SlotView::Pending,
            Some(SlotPhase::Hidden) | None => SlotView::Hidden,
        }
    }
}
