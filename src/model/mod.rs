//! Records parsed from the armory and realm status feeds.

#[macro_use]
mod tag;

pub mod character;
pub mod realm;

pub use character::{Character, CharacterClass, Faction, Gender};
pub use realm::{FlagValue, Language, Realm, queue_is_active, status_is_up};

/// Uppercase the first character and lowercase the rest.
///
/// ```
/// use wowtool::model::capitalize;
///
/// assert_eq!(capitalize("shaman"), "Shaman");
/// assert_eq!(capitalize("sTORMRAGE"), "Stormrage");
/// assert_eq!(capitalize("death knight"), "Death knight");
/// ```
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
