/// Viewer configuration
///
/// Everything the core needs to know about the remote catalog: where it
/// lives, how many entries a page holds, and which sprite locations to
/// try for each rendering site. Defaults point at the public PokéAPI.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of entities requested per page
pub const PAGE_SIZE: u32 = 20;

pub const DEFAULT_API_BASE: &str = "https://pokeapi.co/api/v2";

pub const DEFAULT_ARTWORK_TEMPLATE: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/other/official-artwork/{id}.png";

pub const DEFAULT_SPRITE_TEMPLATE: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/{id}.png";

pub const DEFAULT_PLACEHOLDER: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/items/poke-ball.png";

/// Placeholder substituted with the entity id in sprite templates
pub const ID_TOKEN: &str = "{id}";

/// One link in a sprite fallback chain
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SpriteTier {
    /// URLs carried by the fetched record itself (detail view only)
    Record,
    /// High-fidelity artwork templated by id
    Artwork,
    /// Low-fidelity sprite templated by id
    Sprite,
    /// Fixed image shared by every entity
    Placeholder,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct SpriteConfig {
    pub artwork_template: String,
    pub sprite_template: String,
    pub placeholder: String,
    /// Fallback order for grid thumbnails
    pub grid_chain: Vec<SpriteTier>,
    /// Fallback order for the detail dialog
    pub detail_chain: Vec<SpriteTier>,
}

impl Default for SpriteConfig {
    fn default() -> Self {
        Self {
            artwork_template: DEFAULT_ARTWORK_TEMPLATE.to_string(),
            sprite_template: DEFAULT_SPRITE_TEMPLATE.to_string(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            grid_chain: vec![SpriteTier::Artwork, SpriteTier::Sprite, SpriteTier::Placeholder],
            detail_chain: vec![
                SpriteTier::Record,
                SpriteTier::Artwork,
                SpriteTier::Sprite,
                SpriteTier::Placeholder,
            ],
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct CatalogConfig {
    /// Base URL of the REST service, without trailing slash
    pub api_base: String,
    pub page_size: u32,
    pub sprites: SpriteConfig,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            page_size: PAGE_SIZE,
            sprites: SpriteConfig::default(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("api_base must not be empty")]
    EmptyApiBase,
    #[error("page_size must be at least 1")]
    ZeroPageSize,
    #[error("{field} must contain the {{id}} token")]
    MissingIdToken { field: &'static str },
    #[error("{field} must list at least one tier")]
    EmptyChain { field: &'static str },
}

impl CatalogConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_base.trim().is_empty() {
            return Err(ConfigError::EmptyApiBase);
        }
        if self.page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        if !self.sprites.artwork_template.contains(ID_TOKEN) {
            return Err(ConfigError::MissingIdToken {
                field: "artwork_template",
            });
        }
        if !self.sprites.sprite_template.contains(ID_TOKEN) {
            return Err(ConfigError::MissingIdToken {
                field: "sprite_template",
            });
        }
        if self.sprites.grid_chain.is_empty() {
            return Err(ConfigError::EmptyChain { field: "grid_chain" });
        }
        if self.sprites.detail_chain.is_empty() {
            return Err(ConfigError::EmptyChain {
                field: "detail_chain",
            });
        }
        Ok(())
    }
}
