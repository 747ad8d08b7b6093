//! Extraction pass over the item-definition tree.
//!
//! Stages run in a fixed order because identifier assignment order decides
//! which unseen key receives the lowest free id:
//! weapons, knives, gloves, paint variants, music kits, stickers.

use crate::cdn::CdnResolver;
use crate::equipment::{extract_gloves, extract_knives, extract_weapons};
use crate::error::{CatalogError, Result};
use crate::models::{CatalogItem, ItemDefinition};
use crate::music::extract_music_kits;
use crate::paints::{collect_paint_kits, extract_paints, index_paint_rarity};
use crate::registry::IdRegistry;
use crate::schema::{ItemsGame, Localization, Prefab, RawItem};
use crate::stickers::extract_stickers;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use tracing::info;

/// Read-only inputs shared by every stage.
pub struct Sources<'a> {
    pub game: ItemsGame<'a>,
    pub lang: &'a Localization,
    pub cdn: &'a CdnResolver,
    pub items: Vec<(&'a str, RawItem)>,
    pub prefabs: HashMap<&'a str, Prefab>,
}

impl<'a> Sources<'a> {
    pub fn new(tree: &'a Value, lang: &'a Localization, cdn: &'a CdnResolver) -> Result<Self> {
        let game = ItemsGame::from_tree(tree)?;
        let items = game.entries::<RawItem>("items")?;
        let prefabs = index_prefabs(&game)?;
        info!(
            "Indexed {} item entries and {} prefabs",
            items.len(),
            prefabs.len()
        );
        Ok(Self {
            game,
            lang,
            cdn,
            items,
            prefabs,
        })
    }

    /// Prefab referenced by an item entry. A dangling reference aborts the run.
    pub fn prefab(&self, name: &str) -> Result<&Prefab> {
        self.prefabs
            .get(name)
            .ok_or_else(|| CatalogError::MissingPrefab(name.to_string()))
    }
}

/// Flatten the `prefabs` fragments into one name lookup, later fragments overriding earlier ones.
pub fn index_prefabs<'a>(game: &ItemsGame<'a>) -> Result<HashMap<&'a str, Prefab>> {
    let mut prefabs = HashMap::new();
    for (name, prefab) in game.entries::<Prefab>("prefabs")? {
        prefabs.insert(name, prefab);
    }
    Ok(prefabs)
}

/// Accumulated output of one extraction pass.
#[derive(Debug, Default)]
pub struct Catalog {
    pub registry: IdRegistry,
    pub items: Vec<CatalogItem>,
    pub paints: Vec<CatalogItem>,
    pub music_kits: Vec<CatalogItem>,
    pub stickers: Vec<CatalogItem>,
    pub item_defs: Vec<ItemDefinition>,
    pub weapon_attributes: BTreeMap<u32, Value>,
}

impl Catalog {
    pub fn new(registry: IdRegistry) -> Self {
        Self {
            registry,
            ..Self::default()
        }
    }

    /// All items in output order.
    pub fn all_items(&self) -> Vec<&CatalogItem> {
        self.items
            .iter()
            .chain(&self.paints)
            .chain(&self.music_kits)
            .chain(&self.stickers)
            .collect()
    }
}

/// Run every extraction stage against `sources`, continuing from `registry`.
pub fn generate(sources: &Sources, registry: IdRegistry) -> Result<Catalog> {
    let mut catalog = Catalog::new(registry);
    let known_ids = catalog.registry.len();

    extract_weapons(sources, &mut catalog)?;
    extract_knives(sources, &mut catalog)?;
    extract_gloves(sources, &mut catalog)?;
    info!("Extracted {} base items", catalog.items.len());

    let rarity = index_paint_rarity(&sources.game);
    let paint_kits = collect_paint_kits(sources, &rarity)?;
    info!("Collected {} paint kits", paint_kits.len());
    extract_paints(sources, &paint_kits, &mut catalog)?;
    info!("Generated {} paint variants", catalog.paints.len());

    extract_music_kits(sources, &mut catalog)?;
    info!("Extracted {} music kits", catalog.music_kits.len());

    extract_stickers(sources, &mut catalog)?;
    info!("Extracted {} stickers", catalog.stickers.len());

    info!(
        "Catalog has {} items and {} definitions ({} new identifiers)",
        catalog.all_items().len(),
        catalog.item_defs.len(),
        catalog.registry.len() - known_ids
    );
    Ok(catalog)
}
