// Small text helpers shared by the normalizer and the image resolver.

/// Collapses a title to its lookup key: lowercase, `[a-z0-9]` only.
pub fn clean_key(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}

/// Strips leading ordinal numbering from an included-game line ("1. ", "2) ").
pub fn strip_ordinal(line: &str) -> &str {
    let rest = line.trim_start_matches(|c: char| c.is_ascii_digit());
    if rest.len() == line.len() {
        return line.trim();
    }
    let rest = rest.strip_prefix(['.', ')']).unwrap_or(rest);
    rest.trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_key_drops_everything_but_alnum() {
        assert_eq!(clean_key("Mario Kart 8: Deluxe!"), "mariokart8deluxe");
        assert_eq!(clean_key("  PokéPark Wii  "), "pokparkwii");
    }

    #[test]
    fn strip_ordinal_handles_common_numbering() {
        assert_eq!(strip_ordinal("1. Mario Kart 8"), "Mario Kart 8");
        assert_eq!(strip_ordinal("2) Zelda"), "Zelda");
        assert_eq!(strip_ordinal("3 Overcooked"), "Overcooked");
        assert_eq!(strip_ordinal("Mario Kart 8"), "Mario Kart 8");
        assert_eq!(strip_ordinal("  Hollow Knight "), "Hollow Knight");
    }
}
