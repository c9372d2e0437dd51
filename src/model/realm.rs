use serde::{Deserialize, Serialize};

tag_enum! {
    /// Locale a realm is hosted for
    pub enum Language {
        En => "en",
        De => "de",
        Fr => "fr",
        Es => "es",
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::En
    }
}

impl Language {
    /// Like [`Language::from_tag`], but blank input means the default locale.
    pub fn from_feed(raw: &str) -> Self {
        if raw.trim().is_empty() {
            Language::default()
        } else {
            Language::from_tag(raw)
        }
    }
}

/// Status texts the realm feed uses for a realm that is online.
const UP_SYNONYMS: [&str; 2] = ["Up", "Realm Up"];

/// Queue texts the realm feed uses for a realm with an active login queue.
const QUEUE_SYNONYMS: [&str; 1] = ["true"];

/// Raw value of a boolean-like feed field.
///
/// The feed reports these as text, but callers constructing realms directly
/// may already hold a boolean.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagValue<'a> {
    Text(&'a str),
    Bool(bool),
}

impl<'a> From<&'a str> for FlagValue<'a> {
    fn from(text: &'a str) -> Self {
        FlagValue::Text(text)
    }
}

impl From<bool> for FlagValue<'_> {
    fn from(flag: bool) -> Self {
        FlagValue::Bool(flag)
    }
}

impl FlagValue<'_> {
    /// `true` for boolean true or an exact match in `synonyms`.
    fn is_one_of(self, synonyms: &[&str]) -> bool {
        match self {
            FlagValue::Bool(flag) => flag,
            FlagValue::Text(text) => synonyms.contains(&text),
        }
    }
}

/// Maps a realm status value to "is the realm up".
///
/// Only boolean true, `"Up"` and `"Realm Up"` count as up. Matching is exact;
/// `"up"` or `"Down"` are both down.
pub fn status_is_up<'a>(value: impl Into<FlagValue<'a>>) -> bool {
    let value: FlagValue = value.into();
    value.is_one_of(&UP_SYNONYMS)
}

/// Maps a realm queue value to "is there a login queue".
///
/// Only boolean true and `"true"` count as queued.
pub fn queue_is_active<'a>(value: impl Into<FlagValue<'a>>) -> bool {
    let value: FlagValue = value.into();
    value.is_one_of(&QUEUE_SYNONYMS)
}

/// Live status of one realm from the status feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Realm {
    pub name: String,
    pub up: bool,
    #[serde(default)]
    pub language: Language,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub queue: bool,
}

impl Realm {
    pub fn new<'a>(
        name: impl Into<String>,
        status: impl Into<FlagValue<'a>>,
        kind: impl Into<String>,
        queue: impl Into<FlagValue<'a>>,
        language: Language,
    ) -> Self {
        Self {
            name: name.into(),
            up: status_is_up(status),
            language,
            kind: kind.into(),
            queue: queue_is_active(queue),
        }
    }
}
