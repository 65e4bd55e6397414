use crate::block::{Block, Document, Inline, List, ListStyle, Section, Style};
use crate::config::Config;
use crate::emoji::emojize;
use crate::lookup::LookupTables;

struct Context<'a> {
    luts: &'a LookupTables,
    config: &'a Config,
}

/// Convert a document to an HTML fragment
pub fn blocks_to_html(document: &Document, luts: &LookupTables, config: &Config) -> String {
    let ctx = Context { luts, config };
    let mut out = String::new();

    for block in &document.blocks {
        emit_block(block, &ctx, &mut out);
    }

    out
}

/// Wrap `text` in the markup for `style`.
///
/// Tags nest in a fixed order regardless of input order: strike innermost,
/// then italic, then bold, then code outermost.
pub fn add_style(text: &str, style: &Style) -> String {
    let mut out = String::with_capacity(text.len() + 32);
    styled(Some(style), &mut out, |out| out.push_str(text));
    out
}

fn emit_block(block: &Block, ctx: &Context, out: &mut String) {
    match block {
        Block::Section(section) => emit_section(section, ctx, out),
        Block::List(list) => emit_list(list, ctx, out),
        Block::Preformatted { elements } => {
            out.push_str("<pre>");
            inlines_to_html(elements, ctx, out);
            out.push_str("</pre>");
        }
        Block::Quote { elements } => {
            out.push_str("<blockquote>");
            inlines_to_html(elements, ctx, out);
            out.push_str("</blockquote>");
        }
        Block::Unsupported => {
            tracing::debug!("skipping unsupported block");
        }
    }
}

fn emit_section(section: &Section, ctx: &Context, out: &mut String) {
    out.push_str("<p>");
    inlines_to_html(&section.elements, ctx, out);
    out.push_str("</p>");
}

fn emit_list(list: &List, ctx: &Context, out: &mut String) {
    let tag = match list.style {
        ListStyle::Bullet => "ul",
        ListStyle::Ordered => "ol",
    };

    out.push('<');
    out.push_str(tag);
    out.push('>');
    for item in &list.elements {
        out.push_str("<li>");
        emit_section(item, ctx, out);
        out.push_str("</li>");
    }
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn inlines_to_html(inlines: &[Inline], ctx: &Context, out: &mut String) {
    for inline in inlines {
        inline_to_html(inline, ctx, out);
    }
}

fn inline_to_html(inline: &Inline, ctx: &Context, out: &mut String) {
    match inline {
        Inline::Text { content, style } => {
            styled(style.as_ref(), out, |out| push_text(content, ctx, out));
        }
        Inline::Link { url, text, style } => {
            let display = text.as_deref().unwrap_or(url.as_str());
            styled(style.as_ref(), out, |out| anchor(url, display, ctx, out));
        }
        Inline::Emoji { name, unicode } => {
            push_text(&emojize(name, unicode.as_deref()), ctx, out);
        }
        Inline::User { user_id, style } => match ctx.luts.user(user_id) {
            Some(target) => {
                let href = format!("{}{}", ctx.config.links.permalink_base, target.id);
                styled(style.as_ref(), out, |out| {
                    anchor(&href, target.display_name, ctx, out)
                });
            }
            None => {
                tracing::trace!(user_id = %user_id, "unresolved user mention");
                push_text(&format!("<@{user_id}>"), ctx, out);
            }
        },
        Inline::Channel { channel_id, style } => match ctx.luts.room(channel_id) {
            Some(room) => {
                let alias = room.alias();
                let href = format!("{}{}", ctx.config.links.permalink_base, alias);
                styled(style.as_ref(), out, |out| anchor(&href, &alias, ctx, out));
            }
            None => {
                tracing::trace!(channel_id = %channel_id, "unresolved channel mention");
                push_text(&format!("<#{channel_id}>"), ctx, out);
            }
        },
        Inline::Unsupported => {
            tracing::debug!("skipping unsupported inline element");
        }
    }
}

fn anchor(href: &str, display: &str, ctx: &Context, out: &mut String) {
    out.push_str("<a href=\"");
    push_text(href, ctx, out);
    out.push_str("\">");
    push_text(display, ctx, out);
    out.push_str("</a>");
}

fn styled(style: Option<&Style>, out: &mut String, body: impl FnOnce(&mut String)) {
    let style = style.copied().unwrap_or_default();
    if style.is_plain() {
        body(out);
        return;
    }

    if style.code {
        out.push_str("<code>");
    }
    if style.bold {
        out.push_str("<b>");
    }
    if style.italic {
        out.push_str("<i>");
    }
    if style.strike {
        out.push_str("<s>");
    }

    body(out);

    if style.strike {
        out.push_str("</s>");
    }
    if style.italic {
        out.push_str("</i>");
    }
    if style.bold {
        out.push_str("</b>");
    }
    if style.code {
        out.push_str("</code>");
    }
}

/// Append user-supplied text, escaping it when `html.escape` is set.
fn push_text(text: &str, ctx: &Context, out: &mut String) {
    if !ctx.config.html.escape {
        out.push_str(text);
        return;
    }
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
}
