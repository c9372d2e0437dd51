//! Rendering of characters and realms for the terminal.

use crate::error::Result;
use crate::model::{Character, Realm};
use serde::Serialize;

pub const RESET: &str = "\x1b[0m";
pub const FG_RED: &str = "\x1b[31m";
pub const FG_GREEN: &str = "\x1b[32m";
pub const FG_YELLOW: &str = "\x1b[33m";
pub const FG_WHITE: &str = "\x1b[37m";

/// Width realm names are padded to with dots in human output
const REALM_NAME_WIDTH: usize = 24;
/// Width realm types are padded to with spaces in human output
const REALM_TYPE_WIDTH: usize = 6;

/// Output mode, chosen once per invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// One descriptive line per record
    #[default]
    Human,
    /// One YAML document per record
    Yaml,
}

/// Wraps text in ANSI color codes when enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn paint(&self, text: &str, color: &str) -> String {
        if self.enabled {
            format!("{color}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    pub fn white(&self, text: &str) -> String {
        self.paint(text, FG_WHITE)
    }

    pub fn red(&self, text: &str) -> String {
        self.paint(text, FG_RED)
    }

    pub fn green(&self, text: &str) -> String {
        self.paint(text, FG_GREEN)
    }

    pub fn yellow(&self, text: &str) -> String {
        self.paint(text, FG_YELLOW)
    }
}

/// A record the [`Formatter`] knows how to render.
pub trait Record: Serialize {
    /// Single-line human description
    fn describe(&self, palette: &Palette) -> String;
}

impl Record for Character {
    fn describe(&self, _palette: &Palette) -> String {
        let guild = self
            .guild
            .as_deref()
            .map(|guild| format!("<{guild}> "))
            .unwrap_or_default();

        format!(
            "{} {}is a level {} {} {} {} {} on {} in battle group {}.",
            self.name,
            guild,
            self.level,
            self.gender.display_name(),
            self.race,
            self.faction.display_name(),
            self.character_class.display_name(),
            self.realm,
            self.battle_group,
        )
    }
}

impl Record for Realm {
    fn describe(&self, palette: &Palette) -> String {
        let name = format!("{:.<width$}", self.name, width = REALM_NAME_WIDTH);
        let status = if self.up {
            palette.green("UP")
        } else {
            palette.red("DOWN")
        };
        let queue = if self.queue {
            palette.yellow("Queue")
        } else {
            "NoQueue".to_string()
        };

        format!(
            "{}({}) {:<width$} is {} {}",
            palette.white(&name),
            self.language,
            self.kind,
            status,
            queue,
            width = REALM_TYPE_WIDTH,
        )
    }
}

/// Renders records in the configured [`OutputMode`].
#[derive(Debug, Clone, Copy)]
pub struct Formatter {
    mode: OutputMode,
    palette: Palette,
}

impl Formatter {
    /// `color` only affects human output; YAML is never colored.
    pub fn new(mode: OutputMode, color: bool) -> Self {
        Self {
            mode,
            palette: Palette::new(color && mode == OutputMode::Human),
        }
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Render one record, without a trailing newline in human mode.
    ///
    /// YAML documents start with a `---` marker so several can be written
    /// back to back.
    pub fn render<R: Record>(&self, record: &R) -> Result<String> {
        match self.mode {
            OutputMode::Human => Ok(record.describe(&self.palette)),
            OutputMode::Yaml => Ok(format!("---\n{}", serde_yaml::to_string(record)?)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CharacterClass, Faction, Gender, Language};

    fn thrall(guild: Option<&str>) -> Character {
        Character {
            name: "Thrall".to_string(),
            level: 85,
            race: "Orc".to_string(),
            realm: "Stormrage".to_string(),
            battle_group: "Vengeance".to_string(),
            character_class: CharacterClass::from_tag("SHAMAN"),
            faction: Faction::from_tag("HORDE"),
            gender: Gender::from_tag("MALE"),
            guild: guild.map(str::to_string),
            title: None,
        }
    }

    fn stormrage() -> Realm {
        Realm::new("Stormrage", "Up", "PvE", "false", Language::En)
    }

    #[test]
    fn test_character_line() {
        let formatter = Formatter::new(OutputMode::Human, false);
        assert_eq!(
            formatter.render(&thrall(None)).unwrap(),
            "Thrall is a level 85 Male Orc Horde Shaman on Stormrage in battle group Vengeance."
        );
    }

    #[test]
    fn test_character_line_with_guild() {
        let formatter = Formatter::new(OutputMode::Human, true);
        assert_eq!(
            formatter.render(&thrall(Some("Earthen Ring"))).unwrap(),
            "Thrall <Earthen Ring> is a level 85 Male Orc Horde Shaman on Stormrage in battle group Vengeance."
        );
    }

    #[test]
    fn test_realm_line_plain() {
        let formatter = Formatter::new(OutputMode::Human, false);
        assert_eq!(
            formatter.render(&stormrage()).unwrap(),
            "Stormrage...............(en) PvE    is UP NoQueue"
        );
    }

    #[test]
    fn test_realm_line_colored() {
        let formatter = Formatter::new(OutputMode::Human, true);
        let realm = Realm::new("Hellfire", "Down", "PvP", "true", Language::De);
        assert_eq!(
            formatter.render(&realm).unwrap(),
            "\x1b[37mHellfire................\x1b[0m(de) PvP    is \x1b[31mDOWN\x1b[0m \x1b[33mQueue\x1b[0m"
        );
    }

    #[test]
    fn test_long_realm_name_is_not_truncated() {
        let formatter = Formatter::new(OutputMode::Human, false);
        let realm = Realm::new("Twisting Nether Battlegrounds", "Up", "RPPvP", "false", Language::En);
        assert!(
            formatter
                .render(&realm)
                .unwrap()
                .starts_with("Twisting Nether Battlegrounds(en) RPPvP  is UP")
        );
    }

    #[test]
    fn test_yaml_round_trip() {
        let formatter = Formatter::new(OutputMode::Yaml, true);

        let character = thrall(Some("Earthen Ring"));
        let yaml = formatter.render(&character).unwrap();
        assert!(yaml.starts_with("---\n"));
        assert!(yaml.contains("characterClass: shaman"));
        assert!(!yaml.contains('\x1b'));
        let parsed: Character = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, character);

        let realm = stormrage();
        let yaml = formatter.render(&realm).unwrap();
        assert!(yaml.contains("type: PvE"));
        let parsed: Realm = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, realm);
    }

    #[test]
    fn test_yaml_keeps_missing_guild_distinct() {
        let formatter = Formatter::new(OutputMode::Yaml, false);
        let yaml = formatter.render(&thrall(None)).unwrap();

        assert!(yaml.contains("guild: null"));
        let parsed: Character = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed.guild, None);
    }
}
