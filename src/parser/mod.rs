pub mod character;
pub mod realm;
pub mod xml;

pub use character::parse_character;
pub use realm::parse_realm_feed;

use std::borrow::Cow;

/// Undo one level of HTML escaping left in feed text.
///
/// The status feed escapes realm titles twice, so XML parsing alone leaves
/// entities like `&#39;` behind. Text with a malformed entity is returned as is.
pub fn unescape_html(text: &str) -> Cow<'_, str> {
    match quick_xml::escape::unescape(text) {
        Ok(unescaped) => unescaped,
        Err(_) => Cow::Borrowed(text),
    }
}
