//! Data models for the generated item catalog.

use crate::error::{CatalogError, Result};
use serde::{Serialize, Serializer};

/// Side a weapon, knife or glove belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Team {
    Terrorists,
    CounterTerrorists,
}

impl Team {
    /// Map an ownership key from `used_by_classes`.
    pub fn from_class(name: &str) -> Result<Self> {
        match name {
            "counter-terrorists" => Ok(Team::CounterTerrorists),
            "terrorists" => Ok(Team::Terrorists),
            other => Err(CatalogError::UnknownTeam(other.to_string())),
        }
    }

    /// Numeric team index used by the game.
    pub fn number(self) -> u8 {
        match self {
            Team::Terrorists => 2,
            Team::CounterTerrorists => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Team::Terrorists => "TR",
            Team::CounterTerrorists => "CT",
        }
    }
}

impl Serialize for Team {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.number())
    }
}

/// Build the `"<teams>'s "` prefix of an identifier key, keeping source order.
pub fn team_phrase(teams: &[Team]) -> String {
    let labels: Vec<&str> = teams.iter().map(|team| team.label()).collect();
    format!("{}'s ", labels.join(" and "))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Weapon,
    Melee,
    Glove,
    #[serde(rename = "musickit")]
    MusicKit,
    Sticker,
}

/// A player-visible, ownable item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<bool>,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub free: Option<bool>,
    pub id: u32,
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rarity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teams: Option<Vec<Team>>,
    #[serde(rename = "type")]
    pub item_type: ItemType,
}

/// Join record from a game-side id (definition, music or sticker) to a catalog item id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemDefinition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub def: Option<u32>,
    pub id: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub musicid: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paintid: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stickerid: Option<u32>,
}

impl ItemDefinition {
    pub fn weapon(classname: &str, def: u32, id: u32, paintid: i32) -> Self {
        Self {
            classname: Some(classname.to_string()),
            def: Some(def),
            id,
            musicid: None,
            paintid: Some(paintid),
            stickerid: None,
        }
    }

    pub fn music(id: u32, musicid: u32) -> Self {
        Self {
            classname: None,
            def: None,
            id,
            musicid: Some(musicid),
            paintid: None,
            stickerid: None,
        }
    }

    pub fn sticker(id: u32, stickerid: u32) -> Self {
        Self {
            classname: None,
            def: None,
            id,
            musicid: None,
            paintid: None,
            stickerid: Some(stickerid),
        }
    }
}

/// Paint kit with its localized name and cross-referenced rarity.
#[derive(Debug, Clone, PartialEq)]
pub struct PaintKit {
    pub class_name: String,
    pub value: i32,
    pub name: String,
    pub rarity: Option<String>,
}
