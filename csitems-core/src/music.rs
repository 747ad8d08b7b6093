//! Music kits.

use crate::catalog::{Catalog, Sources};
use crate::error::Result;
use crate::models::{CatalogItem, ItemDefinition, ItemType};
use crate::schema::{MusicDefinition, parse_id, required};

/// Duplicate of the default kit, never emitted.
const DUPLICATE_DEFAULT_KIT: &str = "2";
/// The kit every player owns.
const FREE_KIT: u32 = 1;
pub const MUSIC_KIT_RARITY: &str = "uncommon";

pub fn extract_music_kits(sources: &Sources, catalog: &mut Catalog) -> Result<()> {
    for (key, kit) in sources.game.entries::<MusicDefinition>("music_definitions")? {
        if key == DUPLICATE_DEFAULT_KIT {
            continue;
        }
        let musicid: u32 = parse_id(key)?;
        let name = sources
            .lang
            .display_name(required(&kit.loc_name, "loc_name", key)?);
        let id = catalog.registry.assign(&name);
        let image = sources
            .cdn
            .url(required(&kit.image_inventory, "image_inventory", key)?)?;

        catalog.music_kits.push(CatalogItem {
            base: None,
            category: "musickit".to_string(),
            free: (musicid == FREE_KIT).then_some(true),
            id,
            image,
            model: None,
            name,
            rarity: Some(MUSIC_KIT_RARITY.to_string()),
            teams: None,
            item_type: ItemType::MusicKit,
        });
        catalog.item_defs.push(ItemDefinition::music(id, musicid));
    }
    Ok(())
}
