//! Stickers and their capsule categories.
//!
//! The category is derived from the first folder of the sticker material
//! path by trying a fixed list of lookups in order. A tournament event id
//! replaces whatever the lookups found with the tournament's short name.

use crate::catalog::{Catalog, Sources};
use crate::error::{CatalogError, Result};
use crate::models::{CatalogItem, ItemDefinition, ItemType};
use crate::schema::{Localization, StickerKit, parse_id, required};

/// Folders holding stock stickers without a capsule of their own.
pub const UNCATEGORIZED_FOLDERS: &[&str] = &[
    "standard",
    "stickers2",
    "community02",
    "tournament_assets",
    "community_mix01",
    "danger_zone",
];

const ALYX_FOLDER: &str = "alyx";
const ALYX_CAPSULE_TOKEN: &str = "#CSGO_crate_sticker_pack_hlalyx_capsule";
const UNCATEGORIZED_LABEL: &str = "Valve";
pub const DEFAULT_STICKER_RARITY: &str = "uncommon";

type CategoryLookup = fn(&Localization, &str) -> Option<String>;

fn alyx_capsule(lang: &Localization, folder: &str) -> Option<String> {
    if folder != ALYX_FOLDER {
        return None;
    }
    lang.translate(ALYX_CAPSULE_TOKEN).map(str::to_string)
}

fn uncategorized(_: &Localization, folder: &str) -> Option<String> {
    UNCATEGORIZED_FOLDERS
        .contains(&folder)
        .then(|| UNCATEGORIZED_LABEL.to_string())
}

fn crate_key(lang: &Localization, folder: &str) -> Option<String> {
    lang.translate(&format!("#CSGO_sticker_crate_key_{}", folder))
        .map(str::to_string)
}

fn sticker_pack(lang: &Localization, folder: &str) -> Option<String> {
    lang.translate(&format!("#CSGO_crate_sticker_pack_{}", folder))
        .map(str::to_string)
}

fn sticker_pack_capsule(lang: &Localization, folder: &str) -> Option<String> {
    lang.translate(&format!("#CSGO_crate_sticker_pack_{}_capsule", folder))
        .map(str::to_string)
}

const CATEGORY_LOOKUPS: &[CategoryLookup] = &[
    alyx_capsule,
    uncategorized,
    crate_key,
    sticker_pack,
    sticker_pack_capsule,
];

/// Whether a sticker kit is skipped entirely (defaults, sprays, patches, graffiti).
pub fn is_excluded(kit: &StickerKit) -> bool {
    let name = kit.name.as_deref().unwrap_or("");
    let item_name = kit.item_name.as_deref().unwrap_or("");
    let material = kit.sticker_material.as_deref().unwrap_or("");
    name == "default"
        || item_name.contains("SprayKit")
        || name.contains("spray_")
        || name.contains("patch_")
        || material.contains("_graffiti")
}

/// First segment of the material path, e.g. `cologne2014` for `cologne2014/nip`.
pub fn material_folder(material: &str) -> &str {
    material.split('/').next().unwrap_or("")
}

/// Resolve the category label of a sticker.
pub fn sticker_category(lang: &Localization, kit: &StickerKit) -> Result<String> {
    let folder = material_folder(kit.sticker_material.as_deref().unwrap_or(""));
    let mut category = CATEGORY_LOOKUPS
        .iter()
        .find_map(|lookup| lookup(lang, folder));

    if let Some(event) = kit.tournament_event_id.as_deref().filter(|e| !e.is_empty()) {
        let short_name = lang
            .translate(&format!("#CSGO_Tournament_Event_NameShort_{}", event))
            .ok_or_else(|| CatalogError::MissingTournamentName(event.to_string()))?;
        category = Some(short_name.to_string());
    }

    category.ok_or_else(|| CatalogError::UnresolvedStickerCategory {
        name: kit.name.clone().unwrap_or_default(),
        folder: folder.to_string(),
    })
}

pub fn extract_stickers(sources: &Sources, catalog: &mut Catalog) -> Result<()> {
    for (key, kit) in sources.game.entries::<StickerKit>("sticker_kits")? {
        if is_excluded(&kit) {
            continue;
        }
        let stickerid: u32 = parse_id(key)?;
        let category = sticker_category(sources.lang, &kit)?;
        let name = sources
            .lang
            .display_name(required(&kit.item_name, "item_name", key)?);
        let id = catalog.registry.assign(&name);
        let material = required(&kit.sticker_material, "sticker_material", key)?;
        let image = sources
            .cdn
            .url(&format!("econ/stickers/{}_large", material))?;

        catalog.stickers.push(CatalogItem {
            base: None,
            category,
            free: None,
            id,
            image,
            model: None,
            name,
            rarity: Some(
                kit.item_rarity
                    .clone()
                    .unwrap_or_else(|| DEFAULT_STICKER_RARITY.to_string()),
            ),
            teams: None,
            item_type: ItemType::Sticker,
        });
        catalog.item_defs.push(ItemDefinition::sticker(id, stickerid));
    }
    Ok(())
}
