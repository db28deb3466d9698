/// Catalog data model
///
/// These structs represent the data that flows between the network
/// layer and the view state. Wire DTOs are private and deliberately
/// lenient: absent or null fields fall back to empty values instead
/// of failing the whole response.

use serde::Deserialize;

/// One entry in a catalog page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogSummary {
    /// Entity name (e.g., "pikachu")
    pub name: String,
    /// Canonical record URL (e.g., ".../pokemon/25/")
    pub url: String,
}

impl CatalogSummary {
    /// Identifier taken from the trailing path segment of `url`
    pub fn id(&self) -> &str {
        id_from_url(&self.url)
    }
}

/// Extract the trailing path segment of a record URL.
/// A single trailing slash is ignored, so ".../pokemon/25/" yields "25".
pub fn id_from_url(url: &str) -> &str {
    let trimmed = url.strip_suffix('/').unwrap_or(url);
    trimmed.rsplit('/').next().unwrap_or(trimmed)
}

/// One page of catalog entries
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CatalogPage {
    /// Total number of entities in the catalog (not just this page)
    pub total_count: u64,
    /// Entries on this page, in server order
    pub items: Vec<CatalogSummary>,
}

impl CatalogPage {
    /// Number of pages for the given page size
    pub fn total_pages(&self, page_size: u32) -> u64 {
        total_pages(self.total_count, page_size)
    }
}

/// `ceil(total_count / page_size)`, or 0 for an empty catalog
pub fn total_pages(total_count: u64, page_size: u32) -> u64 {
    if total_count == 0 || page_size == 0 {
        return 0;
    }
    total_count.div_ceil(u64::from(page_size))
}

/// A named entity type (e.g., "electric")
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityType {
    pub name: String,
}

/// A single base stat line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityStat {
    pub name: String,
    pub base_value: u32,
}

/// Full record for a single entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityDetail {
    /// Numeric id when the record carries one; used for templated sprites
    pub id: Option<String>,
    pub name: String,
    pub height: u32,
    pub weight: u32,
    /// Distinct types, in record order
    pub types: Vec<EntityType>,
    pub stats: Vec<EntityStat>,
    /// Record-supplied sprite URLs, highest quality first, nulls skipped
    pub sprite_candidates: Vec<String>,
}

// ========== Wire format ==========

#[derive(Debug, Deserialize)]
pub(crate) struct PageRecord {
    #[serde(default)]
    count: Option<u64>,
    #[serde(default)]
    results: Option<Vec<SummaryRecord>>,
}

#[derive(Debug, Deserialize)]
struct SummaryRecord {
    #[serde(default)]
    name: String,
    #[serde(default)]
    url: String,
}

impl From<PageRecord> for CatalogPage {
    fn from(record: PageRecord) -> Self {
        Self {
            total_count: record.count.unwrap_or(0),
            items: record
                .results
                .unwrap_or_default()
                .into_iter()
                .map(|summary| CatalogSummary {
                    name: summary.name,
                    url: summary.url,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct NamedRef {
    #[serde(default)]
    name: String,
}

#[derive(Debug, Deserialize)]
struct TypeSlot {
    #[serde(rename = "type")]
    kind: NamedRef,
}

#[derive(Debug, Deserialize)]
struct StatSlot {
    stat: NamedRef,
    #[serde(default)]
    base_stat: u32,
}

#[derive(Debug, Default, Deserialize)]
struct FrontSprite {
    #[serde(default)]
    front_default: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct OtherSprites {
    #[serde(default, rename = "official-artwork")]
    official_artwork: Option<FrontSprite>,
    #[serde(default)]
    home: Option<FrontSprite>,
    #[serde(default)]
    dream_world: Option<FrontSprite>,
}

#[derive(Debug, Default, Deserialize)]
struct SpriteRecord {
    #[serde(default)]
    front_default: Option<String>,
    #[serde(default)]
    other: Option<OtherSprites>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DetailRecord {
    #[serde(default)]
    id: Option<u64>,
    name: String,
    #[serde(default)]
    height: Option<u32>,
    #[serde(default)]
    weight: Option<u32>,
    #[serde(default)]
    types: Option<Vec<TypeSlot>>,
    #[serde(default)]
    stats: Option<Vec<StatSlot>>,
    #[serde(default)]
    sprites: Option<SpriteRecord>,
}

impl SpriteRecord {
    /// official-artwork, home, dream_world, then the plain front sprite
    fn into_candidates(self) -> Vec<String> {
        let other = self.other.unwrap_or_default();
        [
            other.official_artwork.and_then(|s| s.front_default),
            other.home.and_then(|s| s.front_default),
            other.dream_world.and_then(|s| s.front_default),
            self.front_default,
        ]
        .into_iter()
        .flatten()
        .filter(|url| !url.trim().is_empty())
        .collect()
    }
}

impl From<DetailRecord> for EntityDetail {
    fn from(record: DetailRecord) -> Self {
        let mut types: Vec<EntityType> = Vec::new();
        for slot in record.types.unwrap_or_default() {
            if !types.iter().any(|t| t.name == slot.kind.name) {
                types.push(EntityType { name: slot.kind.name });
            }
        }

        let stats = record
            .stats
            .unwrap_or_default()
            .into_iter()
            .map(|slot| EntityStat {
                name: slot.stat.name,
                base_value: slot.base_stat,
            })
            .collect();

        Self {
            id: record.id.map(|id| id.to_string()),
            name: record.name,
            height: record.height.unwrap_or(0),
            weight: record.weight.unwrap_or(0),
            types,
            stats,
            sprite_candidates: record.sprites.unwrap_or_default().into_candidates(),
        }
    }
}

/// Parse a list response body
pub fn parse_page(json: &str) -> Result<CatalogPage, serde_json::Error> {
    serde_json::from_str::<PageRecord>(json).map(CatalogPage::from)
}

/// Parse a single entity record body
pub fn parse_detail(json: &str) -> Result<EntityDetail, serde_json::Error> {
    serde_json::from_str::<DetailRecord>(json).map(EntityDetail::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_from_url() {
        assert_eq!(id_from_url("https://pokeapi.co/api/v2/pokemon/25/"), "25");
        assert_eq!(id_from_url("https://pokeapi.co/api/v2/pokemon/25"), "25");
        assert_eq!(id_from_url("25"), "25");
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(1010, 20), 51);
        assert_eq!(total_pages(0, 20), 0);
        assert_eq!(total_pages(20, 20), 1);
        assert_eq!(total_pages(21, 20), 2);
        assert_eq!(total_pages(1, 20), 1);
    }

    #[test]
    fn test_page_missing_fields_default_to_empty() {
        let page = parse_page("{}").unwrap();
        assert_eq!(page.total_count, 0);
        assert!(page.items.is_empty());

        let page = parse_page(r#"{"count": null, "results": null}"#).unwrap();
        assert_eq!(page, CatalogPage::default());
    }

    #[test]
    fn test_page_parsing() {
        let json = r#"{
            "count": 1010,
            "next": "https://pokeapi.co/api/v2/pokemon?offset=20&limit=20",
            "results": [
                {"name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/"},
                {"name": "ivysaur", "url": "https://pokeapi.co/api/v2/pokemon/2/"}
            ]
        }"#;

        let page = parse_page(json).unwrap();
        assert_eq!(page.total_count, 1010);
        assert_eq!(page.total_pages(20), 51);
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[1].name, "ivysaur");
        assert_eq!(page.items[1].id(), "2");
    }

    #[test]
    fn test_detail_parsing() {
        let json = r#"{
            "id": 25,
            "name": "pikachu",
            "height": 4,
            "weight": 60,
            "types": [
                {"slot": 1, "type": {"name": "electric", "url": "x"}},
                {"slot": 2, "type": {"name": "electric", "url": "x"}}
            ],
            "stats": [
                {"base_stat": 35, "effort": 0, "stat": {"name": "hp"}},
                {"base_stat": 55, "effort": 0, "stat": {"name": "attack"}}
            ],
            "sprites": {
                "front_default": "https://img/front/25.png",
                "other": {
                    "official-artwork": {"front_default": null},
                    "home": {"front_default": "https://img/home/25.png"},
                    "dream_world": {"front_default": ""}
                }
            }
        }"#;

        let detail = parse_detail(json).unwrap();
        assert_eq!(detail.id.as_deref(), Some("25"));
        assert_eq!(detail.height, 4);
        assert_eq!(detail.weight, 60);
        assert_eq!(detail.types, vec![EntityType { name: "electric".into() }]);
        assert_eq!(detail.stats[1].name, "attack");
        assert_eq!(detail.stats[1].base_value, 55);
        assert_eq!(
            detail.sprite_candidates,
            vec!["https://img/home/25.png", "https://img/front/25.png"]
        );
    }

    #[test]
    fn test_detail_tolerates_sparse_record() {
        let detail = parse_detail(r#"{"name": "missingno", "types": null}"#).unwrap();
        assert_eq!(detail.name, "missingno");
        assert!(detail.id.is_none());
        assert!(detail.types.is_empty());
        assert!(detail.stats.is_empty());
        assert!(detail.sprite_candidates.is_empty());
    }
}
