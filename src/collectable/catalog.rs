//! Collectable catalog: identifier → visual category.
//!
//! A pure lookup over [`CATEGORY_TABLE`].  Adding a new food is a one-line
//! data change.  Unknown identifiers are not an error: they fall back to
//! [`DEFAULT_CATEGORY`] so a typo in the level file still yields a
//! collectable (and a warning).

use bevy::prelude::*;

/// Category used for identifiers missing from the table.
pub const DEFAULT_CATEGORY: usize = 0;

/// Identifier → category index.  The index selects the sprite-sheet frame.
pub const CATEGORY_TABLE: &[(&str, usize)] = &[
    ("lettuce", 0),
    ("tomato", 1),
    ("pepper", 2),
    ("onion", 3),
    ("avocado", 4),
    ("cheese", 5),
    ("steak", 6),
    ("pork", 7),
    ("chicken", 8),
    ("shells", 9),
];

/// Look up `identifier` without falling back.
pub fn lookup(identifier: &str) -> Option<usize> {
    CATEGORY_TABLE
        .iter()
        .find(|(name, _)| *name == identifier)
        .map(|&(_, category)| category)
}

/// Category index of `identifier`, or [`DEFAULT_CATEGORY`] when unrecognised.
pub fn category_of(identifier: &str) -> usize {
    lookup(identifier).unwrap_or_else(|| {
        warn!("unknown collectable '{identifier}'; using category {DEFAULT_CATEGORY}");
        DEFAULT_CATEGORY
    })
}

/// Placeholder tint per category, used when no sprite sheet is loaded.
pub fn category_color(category: usize) -> Color {
    match category {
        0 => Color::srgb(0.45, 0.85, 0.35),
        1 => Color::srgb(0.90, 0.20, 0.15),
        2 => Color::srgb(0.95, 0.55, 0.10),
        3 => Color::srgb(0.85, 0.75, 0.90),
        4 => Color::srgb(0.35, 0.55, 0.20),
        5 => Color::srgb(1.00, 0.85, 0.30),
        6 => Color::srgb(0.60, 0.20, 0.20),
        7 => Color::srgb(0.95, 0.65, 0.65),
        8 => Color::srgb(0.90, 0.75, 0.55),
        9 => Color::srgb(0.95, 0.90, 0.75),
        _ => Color::WHITE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_identifiers_map_to_their_frame() {
        assert_eq!(category_of("lettuce"), 0);
        assert_eq!(category_of("tomato"), 1);
        assert_eq!(category_of("chicken"), 8);
        assert_eq!(category_of("shells"), 9);
    }

    #[test]
    fn unknown_identifier_falls_back_to_default() {
        assert_eq!(lookup("durian"), None);
        assert_eq!(category_of("durian"), DEFAULT_CATEGORY);
        assert_eq!(category_of(""), DEFAULT_CATEGORY);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert_eq!(lookup("Lettuce"), None);
    }

    #[test]
    fn table_indices_are_unique() {
        let mut seen: Vec<usize> = CATEGORY_TABLE.iter().map(|&(_, c)| c).collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), CATEGORY_TABLE.len());
    }
}
