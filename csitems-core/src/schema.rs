//! Typed views over the parsed `items_game` and localization trees.

use crate::error::{CatalogError, Result};
use crate::keyvalues::fragment_entries;
use crate::models::Team;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::HashMap;

/// One row of the `items` sections, keyed by definition id.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawItem {
    pub name: Option<String>,
    pub prefab: Option<String>,
    pub baseitem: Option<String>,
    pub item_sub_position: Option<String>,
    pub image_inventory: Option<String>,
    pub used_by_classes: Option<Map<String, Value>>,
    pub item_name: Option<String>,
}

impl RawItem {
    pub fn is_base(&self) -> bool {
        self.baseitem.as_deref() == Some("1")
    }

    pub fn prefab_name(&self) -> &str {
        self.prefab.as_deref().unwrap_or("")
    }

    pub fn classname(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }
}

/// Named template shared by several item entries.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Prefab {
    pub item_name: Option<String>,
    pub item_rarity: Option<String>,
    pub image_inventory: Option<String>,
    pub attributes: Option<Value>,
    pub used_by_classes: Option<Map<String, Value>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPaintKit {
    pub name: Option<String>,
    pub description_tag: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WeaponIcon {
    pub icon_path: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MusicDefinition {
    pub loc_name: Option<String>,
    pub image_inventory: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StickerKit {
    pub name: Option<String>,
    pub item_name: Option<String>,
    pub tournament_event_id: Option<String>,
    pub sticker_material: Option<String>,
    pub item_rarity: Option<String>,
}

/// Resolve an ownership map into teams, keeping the map's order.
pub fn teams_from_classes(classes: &Map<String, Value>) -> Result<Vec<Team>> {
    classes.keys().map(|name| Team::from_class(name)).collect()
}

/// Unwrap a non-empty field of an entry, naming the entry when it is absent.
pub fn required<'v>(value: &'v Option<String>, field: &str, owner: &str) -> Result<&'v str> {
    value
        .as_deref()
        .filter(|v| !v.is_empty())
        .ok_or_else(|| CatalogError::MissingField(format!("{} of \"{}\"", field, owner)))
}

/// Parse a numeric id key such as a definition index or paint kit value.
pub fn parse_id<T: std::str::FromStr>(key: &str) -> Result<T> {
    key.parse().map_err(|_| CatalogError::InvalidId(key.to_string()))
}

/// Accessor for the `items_game` root of the item-definition document.
#[derive(Debug, Clone, Copy)]
pub struct ItemsGame<'a> {
    root: &'a Value,
}

impl<'a> ItemsGame<'a> {
    pub fn from_tree(tree: &'a Value) -> Result<Self> {
        match tree.get("items_game") {
            Some(root) if root.is_object() => Ok(Self { root }),
            _ => Err(CatalogError::MissingField("items_game".to_string())),
        }
    }

    fn section(&self, name: &str) -> &'a Value {
        self.root.get(name).unwrap_or(&Value::Null)
    }

    /// Deserialize every entry of a (possibly fragmented) section, in source order.
    pub fn entries<T>(&self, section: &str) -> Result<Vec<(&'a str, T)>>
    where
        T: Deserialize<'a>,
    {
        deserialize_entries(section, fragment_entries(self.section(section)))
    }

    /// Flatten a fragmented section of plain values into one lookup, last write wins.
    pub fn flatten(&self, section: &str) -> HashMap<&'a str, &'a Value> {
        fragment_entries(self.section(section))
            .map(|(key, value)| (key.as_str(), value))
            .collect()
    }

    /// Entries of `alternate_icons2.weapon_icons`.
    pub fn weapon_icons(&self) -> Result<Vec<(&'a str, WeaponIcon)>> {
        let icons = self
            .section("alternate_icons2")
            .get("weapon_icons")
            .unwrap_or(&Value::Null);
        deserialize_entries("alternate_icons2.weapon_icons", fragment_entries(icons))
    }
}

fn deserialize_entries<'a, T>(
    section: &str,
    entries: impl Iterator<Item = (&'a String, &'a Value)>,
) -> Result<Vec<(&'a str, T)>>
where
    T: Deserialize<'a>,
{
    entries
        .map(|(key, value)| {
            T::deserialize(value)
                .map(|entry| (key.as_str(), entry))
                .map_err(|e| CatalogError::InvalidEntry {
                    section: section.to_string(),
                    key: key.clone(),
                    message: e.to_string(),
                })
        })
        .collect()
}

/// Translation tokens of one language.
#[derive(Debug, Clone, Default)]
pub struct Localization {
    tokens: HashMap<String, String>,
}

impl Localization {
    /// Read `lang.Tokens` from a parsed localization document.
    pub fn from_tree(tree: &Value) -> Result<Self> {
        let tokens = tree
            .get("lang")
            .and_then(|lang| lang.get("Tokens"))
            .ok_or_else(|| CatalogError::MissingField("lang.Tokens".to_string()))?;

        Ok(Self::from_tokens(fragment_entries(tokens).filter_map(
            |(key, value)| value.as_str().map(|text| (key.clone(), text.to_string())),
        )))
    }

    pub fn from_tokens<I, K, V>(tokens: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            tokens: tokens
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Look up a `#Token` reference. Empty translations count as missing.
    pub fn translate(&self, token: &str) -> Option<&str> {
        let key = token.strip_prefix('#').unwrap_or(token);
        self.tokens
            .get(key)
            .map(String::as_str)
            .filter(|text| !text.is_empty())
    }

    /// Translate a display-name token, falling back to the token itself.
    pub fn display_name(&self, token: &str) -> String {
        match self.translate(token) {
            Some(text) => text.to_string(),
            None => {
                tracing::warn!("Missing translation for {}", token);
                token.to_string()
            }
        }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
