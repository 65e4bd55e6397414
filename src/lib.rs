mod block;
mod config;
mod emoji;
mod error;
mod html;
mod lookup;
mod parser;

pub use block::{Block, Document, Inline, List, ListStyle, Section, Style};
pub use config::{Config, HtmlConfig, LinksConfig};
pub use emoji::emojize;
pub use error::{Error, LookupError, ParseError};
pub use html::add_style;
pub use lookup::{LookupTables, RoomTarget, Table, UserTarget};
pub use parser::{parse_message, parse_rich_text};

/// Render a document to an HTML fragment using the default config.
///
/// Never fails: unsupported elements render as nothing and mentions missing
/// from `luts` render as raw `<@U…>` / `<#C…>` syntax.
pub fn render(document: &Document, luts: &LookupTables) -> String {
    render_with_config(document, luts, &Config::compiled_default())
}

/// Render a document to an HTML fragment with custom config.
pub fn render_with_config(document: &Document, luts: &LookupTables, config: &Config) -> String {
    html::blocks_to_html(document, luts, config)
}

/// Parse a `rich_text` JSON block and render it using the default config.
pub fn rich_text_to_html(json: &str, luts: &LookupTables) -> Result<String, ParseError> {
    let document = parse_rich_text(json)?;
    Ok(render(&document, luts))
}
