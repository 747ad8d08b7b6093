//! Shared fixture documents for extraction tests.

use crate::cdn::CdnResolver;
use crate::keyvalues;
use crate::schema::Localization;
use serde_json::Value;
use std::path::Path;

pub const ITEMS_GAME: &str = r##"
"items_game"
{
    "prefabs"
    {
        "weapon_ak47_prefab"
        {
            "item_name"         "#SFUI_WPNHUD_AK47"
            "item_rarity"       "common"
            "image_inventory"   "econ/weapons/base_weapons/weapon_ak47"
            "used_by_classes"
            {
                "terrorists"            "1"
                "counter-terrorists"    "1"
            }
            "attributes"
            {
                "damage"        "36"
                "cycletime"     "0.100000"
            }
        }
        "weapon_taser_prefab"
        {
            "item_name"         "#SFUI_WPNHUD_Taser"
            "used_by_classes"   { "terrorists" "1" }
        }
        "melee"                 { "item_rarity" "common" }
        "melee_unusual"         { "item_rarity" "ancient" }
        "melee_noncustomizable" { "item_rarity" "common" }
        "hands"                 { }
        "hands_paintable"       { }
    }
    "prefabs"
    {
        "weapon_glock_prefab"
        {
            "item_name"         "#SFUI_WPNHUD_Glock18"
            "item_rarity"       "common"
            "used_by_classes"   { "terrorists" "1" }
            "attributes"        { "damage" "30" }
        }
    }
    "items"
    {
        "4"
        {
            "name"              "weapon_glock"
            "prefab"            "weapon_glock_prefab"
            "baseitem"          "1"
            "item_sub_position" "secondary0"
        }
        "7"
        {
            "name"              "weapon_ak47"
            "prefab"            "weapon_ak47_prefab"
            "baseitem"          "1"
            "item_sub_position" "rifle1"
        }
        "31"
        {
            "name"              "weapon_taser"
            "prefab"            "weapon_taser_prefab"
            "baseitem"          "1"
            "item_sub_position" "equipment2"
        }
        "42"
        {
            "name"              "weapon_knife"
            "prefab"            "melee"
            "baseitem"          "1"
            "item_name"         "#SFUI_WPNHUD_Knife"
            "image_inventory"   "econ/weapons/base_weapons/weapon_knife"
            "used_by_classes"   { "counter-terrorists" "1" }
        }
        "59"
        {
            "name"              "weapon_knife_t"
            "prefab"            "melee_noncustomizable"
            "baseitem"          "1"
            "item_name"         "#SFUI_WPNHUD_Knife_T"
            "used_by_classes"   { "terrorists" "1" }
        }
        "500"
        {
            "name"              "weapon_bayonet"
            "prefab"            "melee_unusual"
            "item_name"         "#SFUI_WPNHUD_KnifeBayonet"
            "image_inventory"   "econ/weapons/base_weapons/weapon_bayonet"
            "used_by_classes"
            {
                "counter-terrorists"    "1"
                "terrorists"            "1"
            }
        }
    }
    "items"
    {
        "5027"
        {
            "name"              "studded_bloodhound_gloves"
            "prefab"            "hands_paintable"
            "item_name"         "#CSGO_Wearable_v_bloodhound_gloves"
            "image_inventory"   "econ/weapons/base_weapons/studded_bloodhound_gloves"
            "used_by_classes"
            {
                "terrorists"            "1"
                "counter-terrorists"    "1"
            }
        }
        "5028"
        {
            "name"              "t_gloves"
            "prefab"            "hands"
            "baseitem"          "1"
            "item_name"         "#CSGO_Wearable_t_defaultgloves"
            "used_by_classes"   { "terrorists" "1" }
        }
    }
    "paint_kits"
    {
        "0"     { "name" "default" "description_tag" "#PaintKit_Default" }
        "3"     { "name" "so_red" }
        "38"    { "name" "aa_fade" "description_tag" "#PaintKit_aa_fade" }
        "282"   { "name" "cu_ak47_cobra" "description_tag" "#PaintKit_cu_ak47_cobra" }
    }
    "paint_kits_rarity"
    {
        "cu_ak47_cobra"     "mythical"
    }
    "alternate_icons2"
    {
        "weapon_icons"
        {
            "1" { "icon_path" "econ/default_generated/weapon_ak47_cu_ak47_cobra_light" }
            "2" { "icon_path" "econ/default_generated/weapon_ak47_cu_ak47_cobra_medium" }
            "3" { "icon_path" "econ/default_generated/weapon_bayonet_aa_fade_light" }
            "4" { "icon_path" "econ/default_generated/weapon_deagle_aa_fade_light" }
            "5" { "icon_path" "econ/default_generated/weapon_ak47_unknown_light" }
        }
    }
    "music_definitions"
    {
        "1" { "loc_name" "#musickit_valve_csgo_01" "image_inventory" "econ/music_kits/valve_01" }
        "2" { "loc_name" "#musickit_valve_csgo_02" "image_inventory" "econ/music_kits/valve_02" }
        "3" { "loc_name" "#musickit_noisia_01" "image_inventory" "econ/music_kits/noisia_01" }
    }
    "sticker_kits"
    {
        "0" { "name" "default" "item_name" "#StickerKit_Default" }
        "1"
        {
            "name"              "dh_gologo1"
            "item_name"         "#StickerKit_dh_gologo1"
            "sticker_material"  "standard/dh_gologo1"
            "item_rarity"       "rare"
        }
        "2"
        {
            "name"              "spray_std_dizzy"
            "item_name"         "#SprayKit_std_dizzy"
            "sticker_material"  "default/dizzy"
        }
        "3"
        {
            "name"              "cologne2014_team_nip"
            "item_name"         "#StickerKit_cologne2014_team_nip"
            "sticker_material"  "cologne2014/nip"
            "tournament_event_id" "4"
            "item_rarity"       "rare"
        }
        "4"
        {
            "name"              "alyx_01"
            "item_name"         "#StickerKit_alyx_01"
            "sticker_material"  "alyx/alyx_01"
        }
        "5"
        {
            "name"              "comm01_bash"
            "item_name"         "#StickerKit_comm01_bash"
            "sticker_material"  "community01/bash"
        }
        "6"
        {
            "name"              "std_graffiti_1"
            "item_name"         "#StickerKit_std_graffiti_1"
            "sticker_material"  "default_graffiti/std_1"
        }
    }
}
"##;

pub const LANGUAGE: &str = r#"
"lang"
{
    "Language"  "English"
    "Tokens"
    {
        "SFUI_WPNHUD_AK47"                  "AK-47"
        "SFUI_WPNHUD_Glock18"               "Glock-18"
        "SFUI_WPNHUD_Taser"                 "Zeus x27"
        "SFUI_WPNHUD_Knife"                 "Knife"
        "SFUI_WPNHUD_Knife_T"               "Knife"
        "SFUI_WPNHUD_KnifeBayonet"          "Bayonet"
        "CSGO_Wearable_v_bloodhound_gloves" "Bloodhound Gloves"
        "CSGO_Wearable_t_defaultgloves"     "Default T Gloves"
        "PaintKit_Default"                  "Default"
        "PaintKit_aa_fade"                  "Fade"
        "PaintKit_cu_ak47_cobra"            "Redline"
        "musickit_valve_csgo_01"            "CS:GO"
        "musickit_valve_csgo_02"            "CS:GO 2"
        "musickit_noisia_01"                "Noisia, Sharpened"
        "StickerKit_dh_gologo1"             "Sticker | Go"
        "StickerKit_cologne2014_team_nip"   "Sticker | Ninjas in Pyjamas | Cologne 2014"
        "StickerKit_alyx_01"                "Sticker | Alyx"
        "StickerKit_comm01_bash"            "Sticker | Bash"
        "CSGO_crate_sticker_pack_cologne2014" "Cologne 2014 Legends"
        "CSGO_Tournament_Event_NameShort_4" "Cologne 2014"
        "CSGO_crate_sticker_pack_hlalyx_capsule" "Half-Life: Alyx Sticker Capsule"
        "CSGO_sticker_crate_key_community01" "Community Sticker Capsule 1"
    }
}
"#;

/// Every image the fixture documents reference.
pub const IMAGES: &[&str] = &[
    "econ/weapons/base_weapons/weapon_glock",
    "econ/weapons/base_weapons/weapon_ak47",
    "econ/weapons/base_weapons/weapon_knife",
    "econ/weapons/base_weapons/weapon_bayonet",
    "econ/weapons/base_weapons/studded_bloodhound_gloves",
    "econ/default_generated/weapon_ak47_cu_ak47_cobra_light_large",
    "econ/default_generated/weapon_bayonet_aa_fade_light_large",
    "econ/music_kits/valve_01",
    "econ/music_kits/valve_02",
    "econ/music_kits/noisia_01",
    "econ/stickers/standard/dh_gologo1_large",
    "econ/stickers/cologne2014/nip_large",
    "econ/stickers/alyx/alyx_01_large",
    "econ/stickers/community01/bash_large",
];

pub fn items_tree() -> Value {
    keyvalues::parse(ITEMS_GAME).unwrap()
}

pub fn language() -> Localization {
    Localization::from_tree(&keyvalues::parse(LANGUAGE).unwrap()).unwrap()
}

pub fn write_images(dir: &Path, images: &[&str]) {
    for image in images {
        let path = dir.join(format!("{}.png", image));
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, image.as_bytes()).unwrap();
    }
}

/// Temporary image directory populated with every fixture image.
pub fn image_dir() -> (tempfile::TempDir, CdnResolver) {
    let dir = tempfile::tempdir().unwrap();
    write_images(dir.path(), IMAGES);
    let cdn = CdnResolver::new(dir.path(), "cdn.test");
    (dir, cdn)
}
