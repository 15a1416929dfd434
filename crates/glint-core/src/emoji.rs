//! Emoji lookup by short name

const TABLE: &[(&str, &str)] = &[
    ("smile", "😄"),
    ("laugh", "😆"),
    ("wink", "😉"),
    ("grin", "😁"),
    ("sweat_smile", "😅"),
    ("joy", "😂"),
    ("rofl", "🤣"),
    ("relaxed", "☺️"),
    ("blush", "😊"),
    ("innocent", "😇"),
    ("slightly_smiling_face", "🙂"),
    ("desktop_computer", "🖥️"),
    ("keyboard", "⌨️"),
    ("computer_mouse", "🖱️"),
];

/// Find the glyph for `name`
pub fn lookup(name: &str) -> Option<&'static str> {
    TABLE
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, glyph)| *glyph)
}

/// Glyph for `name`, or an empty string if the name is unknown
pub fn emoji(name: &str) -> &'static str {
    lookup(name).unwrap_or_else(|| {
        log::debug!("Unknown emoji name: {:?}", name);
        ""
    })
}

/// All known emoji names, in table order
pub fn names() -> impl Iterator<Item = &'static str> {
    TABLE.iter().map(|(name, _)| *name)
}

/// All `(name, glyph)` pairs, in table order
pub fn entries() -> impl Iterator<Item = (&'static str, &'static str)> {
    TABLE.iter().copied()
}
