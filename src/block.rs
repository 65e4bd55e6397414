use serde::{Deserialize, Deserializer};

/// Decode `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Formatting flags attached to a text-bearing inline element.
///
/// A missing style on the wire is the same as every flag being false.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Style {
    #[serde(deserialize_with = "null_as_default")]
    pub bold: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub italic: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub strike: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub code: bool,
}

impl Style {
    /// True when no flag is set.
    pub fn is_plain(&self) -> bool {
        !(self.bold || self.italic || self.strike || self.code)
    }
}

/// Inline elements inside a block
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Inline {
    Text {
        #[serde(rename = "text")]
        content: String,
        style: Option<Style>,
    },
    Link {
        url: String,
        text: Option<String>,
        style: Option<Style>,
    },
    Emoji {
        /// Short alias without the surrounding colons, e.g. `thumbsup`.
        name: String,
        /// Dash separated hex code points as sent by Slack, e.g. `1f44d`.
        unicode: Option<String>,
    },
    User {
        user_id: String,
        style: Option<Style>,
    },
    Channel {
        channel_id: String,
        style: Option<Style>,
    },
    /// Any element kind this crate does not render (usergroup, broadcast, date, ...).
    #[serde(other)]
    Unsupported,
}

impl Inline {
    /// Unstyled text element.
    pub fn text(content: impl Into<String>) -> Self {
        Inline::Text {
            content: content.into(),
            style: None,
        }
    }
}

/// A paragraph; also the shape of every list item.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Section {
    #[serde(default)]
    pub elements: Vec<Inline>,
}

impl Section {
    pub fn new(elements: Vec<Inline>) -> Self {
        Self { elements }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListStyle {
    Bullet,
    /// Anything that is not `bullet` renders as an ordered list.
    #[default]
    #[serde(other)]
    Ordered,
}

/// A list (bulleted or ordered)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct List {
    #[serde(default, deserialize_with = "null_as_default")]
    pub style: ListStyle,
    #[serde(default)]
    pub elements: Vec<Section>,
}

/// Top-level elements of a rich text document
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum Block {
    #[serde(rename = "rich_text_section")]
    Section(Section),
    #[serde(rename = "rich_text_list")]
    List(List),
    #[serde(rename = "rich_text_preformatted")]
    Preformatted {
        #[serde(default)]
        elements: Vec<Inline>,
    },
    #[serde(rename = "rich_text_quote")]
    Quote {
        #[serde(default)]
        elements: Vec<Inline>,
    },
    #[serde(other)]
    Unsupported,
}

/// An ordered sequence of top-level blocks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl From<Vec<Block>> for Document {
    fn from(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }
}
