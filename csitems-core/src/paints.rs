//! Paint kits and the skin variants generated from alternate weapon icons.
//!
//! An icon such as `econ/default_generated/weapon_ak47_cu_ak47_cobra_light`
//! is joined to the paint kit whose class name appears as `_<class>_light`
//! and to the item definition whose classname appears as `<classname>_<class>`.

use crate::catalog::{Catalog, Sources};
use crate::error::Result;
use crate::models::{CatalogItem, ItemDefinition, PaintKit};
use crate::schema::{ItemsGame, RawPaintKit, parse_id};
use std::collections::HashMap;
use tracing::warn;

/// Paint kit class name to rarity, from the `paint_kits_rarity` fragments.
pub fn index_paint_rarity<'a>(game: &ItemsGame<'a>) -> HashMap<&'a str, &'a str> {
    game.flatten("paint_kits_rarity")
        .into_iter()
        .filter_map(|(name, rarity)| rarity.as_str().map(|r| (name, r)))
        .collect()
}

/// Paint kits with a description, excluding the `default` kit.
pub fn collect_paint_kits(
    sources: &Sources,
    rarity: &HashMap<&str, &str>,
) -> Result<Vec<PaintKit>> {
    let mut kits = Vec::new();
    for (key, kit) in sources.game.entries::<RawPaintKit>("paint_kits")? {
        let Some(tag) = kit.description_tag.as_deref().filter(|t| !t.is_empty()) else {
            continue;
        };
        let Some(class_name) = kit.name.filter(|n| n != "default") else {
            continue;
        };
        kits.push(PaintKit {
            rarity: rarity.get(class_name.as_str()).map(|r| r.to_string()),
            name: sources.lang.display_name(tag),
            value: parse_id(key)?,
            class_name,
        });
    }
    Ok(kits)
}

/// Create one skin variant per matched `_light` icon. Unmatched icons are skipped.
pub fn extract_paints(
    sources: &Sources,
    paint_kits: &[PaintKit],
    catalog: &mut Catalog,
) -> Result<()> {
    for (_, icon) in sources.game.weapon_icons()? {
        let Some(icon_path) = icon.icon_path.as_deref() else {
            continue;
        };
        if !icon_path.ends_with("light") {
            continue;
        }

        let Some(paint_kit) = paint_kits
            .iter()
            .find(|kit| icon_path.contains(&format!("_{}_light", kit.class_name)))
        else {
            warn!("Unable to find paint kit for {}", icon_path);
            continue;
        };

        let Some(def) = catalog
            .item_defs
            .iter()
            .find(|def| match &def.classname {
                Some(classname) => {
                    icon_path.contains(&format!("{}_{}", classname, paint_kit.class_name))
                }
                None => false,
            })
            .cloned()
        else {
            warn!("Unable to find item for {}", icon_path);
            continue;
        };

        let Some(base) = catalog.items.iter().find(|item| item.id == def.id) else {
            warn!("Unable to find item for {}", icon_path);
            continue;
        };

        let name = format!("{} | {}", base.name, paint_kit.name);
        let id = catalog
            .registry
            .assign(&format!("{}{}", name, paint_kit.value));
        let variant = CatalogItem {
            base: None,
            free: None,
            id,
            image: sources.cdn.url(&format!("{}_large", icon_path))?,
            rarity: paint_kit.rarity.clone().or_else(|| base.rarity.clone()),
            name,
            ..base.clone()
        };

        tracing::debug!("Paint {} -> id {}", variant.name, id);
        catalog.paints.push(variant);
        catalog.item_defs.push(ItemDefinition {
            id,
            paintid: Some(paint_kit.value),
            ..def
        });
    }
    Ok(())
}
