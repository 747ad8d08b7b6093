//! Base weapons, knives and gloves.

use crate::catalog::{Catalog, Sources};
use crate::error::{CatalogError, Result};
use crate::models::{CatalogItem, ItemDefinition, ItemType, team_phrase};
use crate::schema::{RawItem, parse_id, required, teams_from_classes};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref SUB_POSITION_RE: Regex = Regex::new(r"c4|[^\d]+").unwrap();
}

/// Rarity given to every glove; the source data carries none.
pub const GLOVE_RARITY: &str = "ancient";

/// Category of a base weapon entry (`rifle`, `secondary`, `c4`, ...), or
/// `None` when the entry is not a base weapon.
pub fn weapon_category(item: &RawItem) -> Option<&str> {
    if !item.is_base() {
        return None;
    }
    let sub_position = item.item_sub_position.as_deref().filter(|s| !s.is_empty())?;
    let category = SUB_POSITION_RE.find(sub_position)?.as_str();
    (category != "equipment").then_some(category)
}

pub fn is_knife(item: &RawItem) -> bool {
    let prefab = item.prefab_name();
    prefab.contains("melee")
        && !prefab.contains("noncustomizable")
        && (prefab != "melee" || item.is_base())
        && item.used_by_classes.is_some()
}

pub fn is_glove(item: &RawItem) -> bool {
    item.prefab_name().contains("hands") && item.used_by_classes.is_some()
}

fn model_name(classname: &str) -> String {
    classname.replacen("weapon_", "", 1)
}

/// Emit every base weapon. Attributes, name, teams and rarity come from the prefab.
pub fn extract_weapons(sources: &Sources, catalog: &mut Catalog) -> Result<()> {
    for (key, item) in &sources.items {
        let Some(category) = weapon_category(item) else {
            continue;
        };
        let prefab_name = item.prefab_name();
        let prefab = sources.prefab(prefab_name)?;
        let def: u32 = parse_id(key)?;
        let classname = item.classname();

        if let Some(attributes) = &prefab.attributes {
            catalog.weapon_attributes.insert(def, attributes.clone());
        }

        let name = sources
            .lang
            .display_name(required(&prefab.item_name, "item_name", prefab_name)?);
        let classes = prefab.used_by_classes.as_ref().ok_or_else(|| {
            CatalogError::MissingField(format!("used_by_classes of \"{}\"", prefab_name))
        })?;
        let teams = teams_from_classes(classes)?;
        let id = catalog.registry.assign(&format!("{}{}", team_phrase(&teams), name));

        let image = match prefab.image_inventory.as_deref().filter(|s| !s.is_empty()) {
            Some(path) => sources.cdn.url(path)?,
            None => sources
                .cdn
                .url(&format!("econ/weapons/base_weapons/{}", classname))?,
        };

        tracing::debug!("Weapon {} ({}) -> id {}", classname, def, id);
        catalog.items.push(CatalogItem {
            base: Some(true),
            category: category.to_string(),
            free: Some(true),
            id,
            image,
            model: Some(model_name(classname)),
            name,
            rarity: prefab.item_rarity.clone(),
            teams: Some(teams),
            item_type: ItemType::Weapon,
        });
        catalog
            .item_defs
            .push(ItemDefinition::weapon(classname, def, id, -1));
    }
    Ok(())
}

/// Emit every knife. Name and image come from the entry, rarity from its prefab.
pub fn extract_knives(sources: &Sources, catalog: &mut Catalog) -> Result<()> {
    for (key, item) in &sources.items {
        if !is_knife(item) {
            continue;
        }
        let prefab = sources.prefab(item.prefab_name())?;
        let def: u32 = parse_id(key)?;
        let classname = item.classname();

        let name = sources
            .lang
            .display_name(required(&item.item_name, "item_name", classname)?);
        let teams = match &item.used_by_classes {
            Some(classes) => teams_from_classes(classes)?,
            None => Vec::new(),
        };
        let id = catalog.registry.assign(&format!("{}{}", team_phrase(&teams), name));
        let image = sources
            .cdn
            .url(required(&item.image_inventory, "image_inventory", classname)?)?;

        tracing::debug!("Knife {} ({}) -> id {}", classname, def, id);
        catalog.items.push(CatalogItem {
            base: Some(true),
            category: "melee".to_string(),
            free: item.is_base().then_some(true),
            id,
            image,
            model: Some(model_name(classname)),
            name,
            rarity: prefab.item_rarity.clone(),
            teams: Some(teams),
            item_type: ItemType::Melee,
        });
        catalog.item_defs.push(ItemDefinition::weapon(
            classname,
            def,
            id,
            if item.is_base() { -1 } else { 0 },
        ));
    }
    Ok(())
}

/// Emit every glove. Gloves without an inventory image point at a local asset.
pub fn extract_gloves(sources: &Sources, catalog: &mut Catalog) -> Result<()> {
    for (key, item) in &sources.items {
        if !is_glove(item) {
            continue;
        }
        sources.prefab(item.prefab_name())?;
        let def: u32 = parse_id(key)?;
        let classname = item.classname();

        let name = sources
            .lang
            .display_name(required(&item.item_name, "item_name", classname)?);
        let teams = match &item.used_by_classes {
            Some(classes) => teams_from_classes(classes)?,
            None => Vec::new(),
        };
        let id = catalog.registry.assign(&format!("{}{}", team_phrase(&teams), name));
        let image = match item.image_inventory.as_deref().filter(|s| !s.is_empty()) {
            Some(path) => sources.cdn.url(path)?,
            None => format!("/{}.png", classname),
        };

        tracing::debug!("Glove {} ({}) -> id {}", classname, def, id);
        catalog.items.push(CatalogItem {
            base: Some(true),
            category: "glove".to_string(),
            free: item.is_base().then_some(true),
            id,
            image,
            model: Some(classname.to_string()),
            name,
            rarity: Some(GLOVE_RARITY.to_string()),
            teams: Some(teams),
            item_type: ItemType::Glove,
        });
        catalog.item_defs.push(ItemDefinition::weapon(
            classname,
            def,
            id,
            if item.is_base() { -1 } else { 0 },
        ));
    }
    Ok(())
}
