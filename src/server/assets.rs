//! Static asset constants.

/// Stylesheet for the agenda page.
pub const CSS: &str = include_str!("styles.css");
