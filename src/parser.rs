use serde::Deserialize;
use serde_json::Value;

use crate::block::{Block, Document};
use crate::error::ParseError;

const RICH_TEXT: &str = "rich_text";

#[derive(Deserialize)]
struct Message {
    #[serde(default)]
    blocks: Vec<Value>,
}

/// Parse a `rich_text` block, or a bare array of its elements.
pub fn parse_rich_text(json: &str) -> Result<Document, ParseError> {
    let value: Value = serde_json::from_str(json)?;
    let blocks = match value {
        Value::Array(_) => Vec::<Block>::deserialize(value)?,
        other => {
            let kind = block_kind(&other).unwrap_or_default().to_string();
            if kind != RICH_TEXT {
                return Err(ParseError::NotRichText(kind));
            }
            elements(other)?
        }
    };
    Ok(Document::from(blocks))
}

/// Parse a whole message and join the elements of all its `rich_text` blocks.
///
/// Other layout blocks (images, dividers, ...) are skipped.
pub fn parse_message(json: &str) -> Result<Document, ParseError> {
    let message: Message = serde_json::from_str(json)?;
    let mut blocks = Vec::new();

    for block in message.blocks {
        if block_kind(&block) == Some(RICH_TEXT) {
            blocks.extend(elements(block)?);
        } else {
            let kind = block_kind(&block).unwrap_or("<none>");
            tracing::debug!(kind, "skipping message block");
        }
    }

    Ok(Document::from(blocks))
}

fn block_kind(value: &Value) -> Option<&str> {
    value.get("type").and_then(Value::as_str)
}

fn elements(mut block: Value) -> Result<Vec<Block>, ParseError> {
    match block.get_mut("elements").map(Value::take) {
        Some(elements) => Ok(Vec::<Block>::deserialize(elements)?),
        None => Ok(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::{Inline, List, ListStyle, Section, Style};
    use pretty_assertions::assert_eq;

    #[test]
    fn rich_text_block() {
        let doc = parse_rich_text(
            r#"{
                "type": "rich_text",
                "block_id": "x1",
                "elements": [
                    {
                        "type": "rich_text_section",
                        "elements": [
                            {"type": "text", "text": "hi ", "style": {"bold": true}},
                            {"type": "user", "user_id": "U1"},
                            {"type": "emoji", "name": "wave", "unicode": "1f44b"}
                        ]
                    },
                    {
                        "type": "rich_text_list",
                        "style": "bullet",
                        "indent": 0,
                        "elements": [
                            {"type": "rich_text_section", "elements": [{"type": "text", "text": "a"}]}
                        ]
                    }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(
            doc.blocks,
            vec![
                Block::Section(Section::new(vec![
                    Inline::Text {
                        content: "hi ".to_string(),
                        style: Some(Style {
                            bold: true,
                            ..Style::default()
                        }),
                    },
                    Inline::User {
                        user_id: "U1".to_string(),
                        style: None,
                    },
                    Inline::Emoji {
                        name: "wave".to_string(),
                        unicode: Some("1f44b".to_string()),
                    },
                ])),
                Block::List(List {
                    style: ListStyle::Bullet,
                    elements: vec![Section::new(vec![Inline::text("a")])],
                }),
            ]
        );
    }

    #[test]
    fn bare_element_array() {
        let doc = parse_rich_text(
            r#"[{"type": "rich_text_quote", "elements": [{"type": "text", "text": "q"}]}]"#,
        )
        .unwrap();
        assert_eq!(
            doc.blocks,
            vec![Block::Quote {
                elements: vec![Inline::text("q")]
            }]
        );
    }

    #[test]
    fn unknown_kinds_decode_as_unsupported() {
        let doc = parse_rich_text(
            r#"[
                {"type": "rich_text_section", "elements": [{"type": "usergroup", "usergroup_id": "S1"}]},
                {"type": "rich_text_table", "rows": []}
            ]"#,
        )
        .unwrap();
        assert_eq!(
            doc.blocks,
            vec![
                Block::Section(Section::new(vec![Inline::Unsupported])),
                Block::Unsupported,
            ]
        );
    }

    #[test]
    fn unknown_list_style_is_ordered() {
        let doc = parse_rich_text(r#"[{"type": "rich_text_list", "style": "checkbox", "elements": []}]"#)
            .unwrap();
        assert_eq!(
            doc.blocks,
            vec![Block::List(List {
                style: ListStyle::Ordered,
                elements: vec![],
            })]
        );
    }

    #[test]
    fn null_style_values_decode_as_unset() {
        let doc = parse_rich_text(
            r#"[
                {"type": "rich_text_section", "elements": [
                    {"type": "text", "text": "x", "style": {"bold": null, "italic": true}}
                ]},
                {"type": "rich_text_list", "style": null, "elements": []}
            ]"#,
        )
        .unwrap();

        assert_eq!(
            doc.blocks,
            vec![
                Block::Section(Section::new(vec![Inline::Text {
                    content: "x".to_string(),
                    style: Some(Style {
                        italic: true,
                        ..Style::default()
                    }),
                }])),
                Block::List(List {
                    style: ListStyle::Ordered,
                    elements: vec![],
                }),
            ]
        );
    }

    #[test]
    fn missing_required_field_fails() {
        let err = parse_rich_text(
            r#"[{"type": "rich_text_section", "elements": [{"type": "link"}]}]"#,
        )
        .unwrap_err();
        assert!(matches!(err, ParseError::Json(_)));
    }

    #[test]
    fn rejects_other_root_blocks() {
        let err = parse_rich_text(r#"{"type": "divider"}"#).unwrap_err();
        assert!(matches!(err, ParseError::NotRichText(kind) if kind == "divider"));
    }

    #[test]
    fn message_joins_rich_text_blocks() {
        let doc = parse_message(
            r#"{
                "type": "message",
                "text": "fallback",
                "blocks": [
                    {"type": "rich_text", "elements": [
                        {"type": "rich_text_section", "elements": [{"type": "text", "text": "one"}]}
                    ]},
                    {"type": "divider"},
                    {"type": "rich_text", "elements": [
                        {"type": "rich_text_preformatted", "elements": [{"type": "text", "text": "two"}]}
                    ]}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(
            doc.blocks,
            vec![
                Block::Section(Section::new(vec![Inline::text("one")])),
                Block::Preformatted {
                    elements: vec![Inline::text("two")]
                },
            ]
        );
    }

    #[test]
    fn message_without_blocks_is_empty() {
        let doc = parse_message(r#"{"type": "message", "text": "plain"}"#).unwrap();
        assert!(doc.blocks.is_empty());
    }
}
