use std::borrow::Cow;

/// Translate an emoji alias (without colons) to its Unicode glyph.
///
/// Falls back to the code points Slack sends alongside the alias, then to the
/// alias itself wrapped in colons, e.g. `:party_parrot:` for a custom emoji.
pub fn emojize(name: &str, unicode: Option<&str>) -> Cow<'static, str> {
    if let Some(emoji) = emojis::get_by_shortcode(name) {
        return Cow::Borrowed(emoji.as_str());
    }
    if let Some(glyph) = unicode.and_then(from_code_points) {
        return Cow::Owned(glyph);
    }
    Cow::Owned(format!(":{name}:"))
}

/// Decode dash separated hex code points such as `1f469-200d-1f4bb`.
fn from_code_points(hex: &str) -> Option<String> {
    if hex.is_empty() {
        return None;
    }
    hex.split('-')
        .map(|cp| u32::from_str_radix(cp, 16).ok().and_then(char::from_u32))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn known_alias() {
        assert_eq!(emojize("smile", None), "😄");
        assert_eq!(emojize("thumbsup", None), "👍");
    }

    #[test]
    fn alias_wins_over_code_points() {
        assert_eq!(emojize("smile", Some("1f44d")), "😄");
    }

    #[test]
    fn falls_back_to_code_points() {
        assert_eq!(
            emojize("woman_technologist_custom", Some("1f469-200d-1f4bb")),
            "\u{1f469}\u{200d}\u{1f4bb}"
        );
    }

    #[test]
    fn unknown_alias_passes_through() {
        assert_eq!(emojize("party_parrot", None), ":party_parrot:");
        assert_eq!(emojize("party_parrot", Some("not-hex")), ":party_parrot:");
        assert_eq!(emojize("party_parrot", Some("")), ":party_parrot:");
    }
}
