use super::unescape_html;
use super::xml::parse_document;
use crate::error::Result;
use crate::model::{Language, Realm, capitalize};
use crate::tree::Tree;
use tracing::debug;

/// Element path of the entries in the realm status feed.
pub const ITEM_PATH: [&str; 3] = ["rss", "channel", "item"];

/// Parse the realm status feed into realms, in document order.
///
/// Only items with a `category` of domain `type` are realms; anything else in
/// the channel (news, announcements) is skipped. With `realm_filter`, only
/// items whose title equals the capitalized filter are kept, so an empty
/// result means nothing matched.
pub fn parse_realm_feed(content: &str, realm_filter: Option<&str>) -> Result<Vec<Realm>> {
    let tree = parse_document(content)?;
    let wanted = realm_filter.map(capitalize);

    let mut realms = Vec::new();
    for item in tree.select(&ITEM_PATH) {
        let title = child_text(&tree, item, "title").unwrap_or_default();

        if let Some(wanted) = &wanted {
            if title != *wanted {
                continue;
            }
        }

        let Some(kind) = category(&tree, item, "type") else {
            debug!(title = %title, "skipping feed item without a realm type");
            continue;
        };

        let status = category(&tree, item, "status").unwrap_or_default();
        let queue = category(&tree, item, "queue").unwrap_or_default();
        let language = category(&tree, item, "language").unwrap_or_default();

        realms.push(Realm::new(
            title,
            status.as_str(),
            kind,
            queue.as_str(),
            Language::from_feed(&language),
        ));
    }

    debug!(count = realms.len(), filter = ?realm_filter, "parsed realm feed");
    Ok(realms)
}

/// HTML-unescaped text of the first child element named `name`.
fn child_text(tree: &Tree, parent: usize, name: &str) -> Option<String> {
    tree.child_elements(parent, name)
        .next()
        .map(|id| unescape_html(&tree.text(id)).into_owned())
}

/// HTML-unescaped text of the first `category` child with the given domain.
fn category(tree: &Tree, item: usize, domain: &str) -> Option<String> {
    tree.child_elements(item, "category")
        .find(|&id| {
            tree.get_node(id)
                .and_then(|node| node.attribute("domain"))
                == Some(domain)
        })
        .map(|id| unescape_html(&tree.text(id)).into_owned())
}
