use super::xml::parse_document;
use crate::error::{Result, WowError};
use crate::model::{Character, CharacterClass, Faction, Gender};
use crate::tree::TreeNode;
use tracing::debug;

/// Element path of the character inside a character sheet document.
pub const CHARACTER_PATH: [&str; 3] = ["page", "characterInfo", "character"];

/// Parse an armory character sheet into a [`Character`].
///
/// Reads the first `page/characterInfo/character` element. Every attribute
/// except `guildName` and `title` is required.
pub fn parse_character(content: &str) -> Result<Character> {
    let tree = parse_document(content)?;
    let node = tree
        .select(&CHARACTER_PATH)
        .first()
        .and_then(|&id| tree.get_node(id))
        .ok_or_else(|| WowError::MissingElement(CHARACTER_PATH.join("/")))?;

    let level = required(node, "level")?;
    let level = level.trim().parse::<u32>().map_err(|_| WowError::InvalidValue {
        field: "level".to_string(),
        value: level.to_string(),
    })?;

    let character = Character {
        name: required(node, "name")?.to_string(),
        level,
        race: required(node, "race")?.to_string(),
        realm: required(node, "realm")?.to_string(),
        battle_group: required(node, "battleGroup")?.to_string(),
        character_class: CharacterClass::from_tag(required(node, "class")?),
        faction: Faction::from_tag(required(node, "faction")?),
        gender: Gender::from_tag(required(node, "gender")?),
        guild: optional(node, "guildName"),
        title: optional(node, "title"),
    };

    debug!(name = %character.name, realm = %character.realm, "parsed character sheet");
    Ok(character)
}

fn required<'a>(node: &'a TreeNode, attribute: &str) -> Result<&'a str> {
    node.attribute(attribute)
        .ok_or_else(|| WowError::MissingAttribute {
            element: node.label.clone(),
            attribute: attribute.to_string(),
        })
}

fn optional(node: &TreeNode, attribute: &str) -> Option<String> {
    node.attribute(attribute)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet(attributes: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<page globalSearch="1" lang="en_us">
  <characterInfo>
    <character {attributes}/>
    <characterTab/>
  </characterInfo>
</page>"#
        )
    }

    const THRALL: &str = r#"level="85" race="Orc" name="Thrall" realm="Stormrage" battleGroup="Vengeance" class="SHAMAN" faction="HORDE" gender="MALE""#;

    #[test]
    fn test_parse_character() {
        let character = parse_character(&sheet(&format!(r#"{THRALL} guildName="""#))).unwrap();

        assert_eq!(character.name, "Thrall");
        assert_eq!(character.level, 85);
        assert_eq!(character.race, "Orc");
        assert_eq!(character.realm, "Stormrage");
        assert_eq!(character.battle_group, "Vengeance");
        assert_eq!(character.character_class, CharacterClass::Shaman);
        assert_eq!(character.faction, Faction::Horde);
        assert_eq!(character.gender, Gender::Male);
        assert_eq!(character.guild, None);
        assert_eq!(character.title, None);
    }

    #[test]
    fn test_guild_and_title() {
        let character = parse_character(&sheet(&format!(
            r#"{THRALL} guildName="Earthen Ring" title="Warchief""#
        )))
        .unwrap();

        assert_eq!(character.guild.as_deref(), Some("Earthen Ring"));
        assert_eq!(character.title.as_deref(), Some("Warchief"));
    }

    #[test]
    fn test_missing_attribute() {
        let err = parse_character(&sheet(r#"name="Thrall" level="85""#)).unwrap_err();
        assert!(matches!(
            err,
            WowError::MissingAttribute { ref attribute, .. } if attribute == "race"
        ));
    }

    #[test]
    fn test_missing_character_element() {
        let err = parse_character("<page><characterInfo/></page>").unwrap_err();
        assert!(matches!(err, WowError::MissingElement(_)));
    }

    #[test]
    fn test_invalid_level() {
        let err = parse_character(&sheet(&THRALL.replace(r#"level="85""#, r#"level="-3""#)))
            .unwrap_err();
        assert!(matches!(err, WowError::InvalidValue { ref field, .. } if field == "level"));
    }
}
