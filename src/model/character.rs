use serde::{Deserialize, Serialize};

tag_enum! {
    /// Playable class, from the `class` attribute of the character sheet
    pub enum CharacterClass {
        Warrior => "warrior",
        Paladin => "paladin",
        Hunter => "hunter",
        Rogue => "rogue",
        Priest => "priest",
        DeathKnight => "death knight" | "deathknight",
        Shaman => "shaman",
        Mage => "mage",
        Warlock => "warlock",
        Druid => "druid",
    }
}

tag_enum! {
    pub enum Faction {
        Alliance => "alliance",
        Horde => "horde",
    }
}

tag_enum! {
    pub enum Gender {
        Male => "male",
        Female => "female",
    }
}

/// Snapshot of one character as reported by the armory character sheet.
///
/// `guild` and `title` are `None` when the sheet omits them or leaves them
/// empty, never `Some("")`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub name: String,
    pub level: u32,
    pub race: String,
    pub realm: String,
    pub battle_group: String,
    pub character_class: CharacterClass,
    pub faction: Faction,
    pub gender: Gender,
    pub guild: Option<String>,
    pub title: Option<String>,
}
