use crate::error::{Result, WowError};
use crate::tree::{NodeKind, Tree, TreeNode};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// Parse an XML document into a [`Tree`].
///
/// The root of the returned tree is a synthetic document node whose children
/// are the top-level elements. Text and attribute values are unescaped,
/// whitespace-only text is dropped and CDATA sections become text nodes.
/// Text keeps its surrounding whitespace; [`Tree::text`] trims the joined
/// content of an element.
pub fn parse_document(content: &str) -> Result<Tree> {
    let mut reader = Reader::from_str(content);

    let mut tree = Tree::new(TreeNode::new("#document", NodeKind::Document));

    // Stack to track parent nodes
    let mut parent_stack: Vec<usize> = vec![tree.root_id()];
    let mut buf = Vec::new();

    loop {
        let parent_id = *parent_stack.last().unwrap_or(&0);
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                let node = element_node(&e)?;
                let node_id = tree.add_child_node(parent_id, node);
                parent_stack.push(node_id);
            }
            Ok(Event::End(_)) => {
                if parent_stack.len() > 1 {
                    parent_stack.pop();
                }
            }
            Ok(Event::Empty(e)) => {
                let node = element_node(&e)?;
                tree.add_child_node(parent_id, node);
            }
            Ok(Event::Text(e)) => {
                let text = e
                    .unescape()
                    .map_err(|e| WowError::XmlParse(e.to_string()))?
                    .into_owned();

                if !text.trim().is_empty() {
                    tree.add_child_node(parent_id, TreeNode::text(text));
                }
            }
            Ok(Event::CData(e)) => {
                let text = String::from_utf8_lossy(&e.into_inner()).into_owned();
                if !text.trim().is_empty() {
                    tree.add_child_node(parent_id, TreeNode::text(text));
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(WowError::XmlParse(format!(
                    "at position {}: {}",
                    reader.buffer_position(),
                    e
                )));
            }
            _ => {} // Declarations, comments, processing instructions
        }

        buf.clear();
    }

    if tree.get_node(tree.root_id()).is_none_or(|root| !root.has_children()) {
        return Err(WowError::XmlParse("document has no root element".to_string()));
    }

    Ok(tree)
}

fn element_node(start: &BytesStart) -> Result<TreeNode> {
    let name = String::from_utf8_lossy(start.name().as_ref()).to_string();
    let mut node = TreeNode::element(name);

    for attr in start.attributes() {
        let attr = attr.map_err(|e| WowError::XmlParse(e.to_string()))?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).to_string();
        let value = attr
            .unescape_value()
            .map_err(|e| WowError::XmlParse(e.to_string()))?
            .to_string();
        node.add_attribute(key, value);
    }

    Ok(node)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_xml() {
        let xml = r#"<root><item>test</item></root>"#;
        let tree = parse_document(xml).unwrap();

        let items = tree.select(&["root", "item"]);
        assert_eq!(items.len(), 1);
        assert_eq!(tree.text(items[0]), "test");
    }

    #[test]
    fn test_parse_xml_with_attributes() {
        let xml = r#"<?xml version="1.0"?>
<page><characterInfo><character name="Thrall" guildName="Tom &amp; Jerry"/></characterInfo></page>"#;
        let tree = parse_document(xml).unwrap();

        let chars = tree.select(&["page", "characterInfo", "character"]);
        assert_eq!(chars.len(), 1);
        let node = tree.get_node(chars[0]).unwrap();
        assert_eq!(node.attribute("name"), Some("Thrall"));
        assert_eq!(node.attribute("guildName"), Some("Tom & Jerry"));
    }

    #[test]
    fn test_cdata_becomes_text() {
        let xml = "<item><title><![CDATA[Aggra (Português)]]></title></item>";
        let tree = parse_document(xml).unwrap();

        let titles = tree.select(&["item", "title"]);
        assert_eq!(tree.text(titles[0]), "Aggra (Português)");
    }

    #[test]
    fn test_text_around_comment_keeps_inner_spaces() {
        let xml = "<item><title>Aggra <!-- x --> (Portugues)</title></item>";
        let tree = parse_document(xml).unwrap();

        let titles = tree.select(&["item", "title"]);
        assert_eq!(tree.text(titles[0]), "Aggra  (Portugues)");
    }

    #[test]
    fn test_text_next_to_cdata_keeps_inner_spaces() {
        let xml = "<title>\n  Realm <![CDATA[Up]]>\n</title>";
        let tree = parse_document(xml).unwrap();

        let titles = tree.select(&["title"]);
        assert_eq!(tree.text(titles[0]), "Realm Up");
    }

    #[test]
    fn test_mismatched_tags_fail() {
        assert!(matches!(
            parse_document("<page><character></page>"),
            Err(WowError::XmlParse(_))
        ));
    }

    #[test]
    fn test_empty_body_fails() {
        assert!(parse_document("").is_err());
        assert!(parse_document("   ").is_err());
    }
}
