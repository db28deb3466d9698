use crate::catalog::model::EntityDetail;
use crate::config::{SpriteConfig, SpriteTier, ID_TOKEN};

/// Turns an entity into an ordered list of image locations.
///
/// Pure and deterministic: the same entity always yields the same chain,
/// best source first, placeholder last. Duplicate URLs collapse into the
/// first occurrence so no location is tried twice.
#[derive(Debug, Clone)]
pub struct SpriteResolver {
    config: SpriteConfig,
}

impl SpriteResolver {
    pub fn new(config: SpriteConfig) -> Self {
        Self { config }
    }

    /// Grid thumbnail chain for the entity with `entity_id`
    pub fn resolve(&self, entity_id: &str) -> Vec<String> {
        self.expand(&self.config.grid_chain, Some(entity_id), &[])
    }

    /// Detail dialog chain: record-supplied sprites first, then templates
    pub fn resolve_detail(&self, detail: &EntityDetail) -> Vec<String> {
        self.expand(
            &self.config.detail_chain,
            detail.id.as_deref(),
            &detail.sprite_candidates,
        )
    }

    fn expand(&self, chain: &[SpriteTier], entity_id: Option<&str>, record: &[String]) -> Vec<String> {
        let entity_id = entity_id.map(str::trim).filter(|id| !id.is_empty());
        let mut candidates: Vec<String> = Vec::new();

        for tier in chain {
            let urls: Vec<String> = match tier {
                SpriteTier::Record => record.to_vec(),
                SpriteTier::Artwork => entity_id
                    .map(|id| fill(&self.config.artwork_template, id))
                    .into_iter()
                    .collect(),
                SpriteTier::Sprite => entity_id
                    .map(|id| fill(&self.config.sprite_template, id))
                    .into_iter()
                    .collect(),
                SpriteTier::Placeholder => vec![self.config.placeholder.clone()],
            };

            for url in urls {
                if !url.is_empty() && !candidates.contains(&url) {
                    candidates.push(url);
                }
            }
        }

        candidates
    }
}

fn fill(template: &str, entity_id: &str) -> String {
    template.replace(ID_TOKEN, entity_id)
}
