//! Bullet lists

/// Bullet prefix for each item
pub const BULLET: &str = "• ";

/// Render `items` one per line, each prefixed with a bullet and ending in `\n`
pub fn list<S: AsRef<str>>(items: &[S]) -> String {
    let mut out = String::new();
    for item in items {
        out.push_str(BULLET);
        out.push_str(item.as_ref());
        out.push('\n');
    }
    out
}
