//! Portfolio data document and names of keys the builder touches.

use serde_json::{Map, Value};

/// The portfolio data document.
///
/// It is an untyped JSON object, its shape is defined by templates consuming it.
/// Every key becomes a top-level template variable. Builder only reads
/// [SOCIAL_LINKS_KEY] entries and adds computed [CURRENT_YEAR_KEY] and
/// [SVG_DATA_KEY] values, everything else is passed through verbatim.
pub type Document = Map<String, Value>;

/// Top-level key holding list of social link entries.
pub const SOCIAL_LINKS_KEY: &str = "social_links";
/// Social link entry key, pointing to svg icon file.
pub const SVG_PATH_KEY: &str = "svg_path";
/// Social link entry key, filled by builder with icon file markup.
pub const SVG_DATA_KEY: &str = "svg_data";
/// Top-level key, filled by builder with current year (eg. for copyright).
pub const CURRENT_YEAR_KEY: &str = "current_year";
