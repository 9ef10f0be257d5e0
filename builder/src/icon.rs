//! Icon helpers. Contains [inline_social_link_icons], embedding svg icon markup
//! into social link entries.

use crate::common::{
    config::Config,
    document::{Document, SOCIAL_LINKS_KEY, SVG_DATA_KEY, SVG_PATH_KEY},
};
use anyhow::{Context, Error};
use serde_json::Value;
use std::{fs, io, path::Path};

/// Result of [inline_social_link_icons].
#[derive(Default, Clone, Copy, PartialEq, Eq, Debug)]
pub struct InlineSummary {
    /// Number of entries that got their icon markup embedded.
    pub inlined: usize,
    /// Number of entries pointing to icon files that do not exist. These got
    /// empty markup.
    pub missing: usize,
}

/// For each social link entry having `svg_path` set, reads the file and stores
/// its contents under `svg_data` of the same entry.
///
/// Paths are resolved with [Config::resolve]. Entries without `svg_path` (or
/// with empty one) are left untouched. Missing icon file is not an error, a
/// warning is logged and `svg_data` is set to empty string. Other read errors
/// (eg. permission denied, file not being utf-8) fail the whole operation.
///
/// # Examples
///
/// ```
/// # use anyhow::Error;
/// # use portfolio_site_builder::{common::config::Config, document::parse, icon::inline_social_link_icons};
/// #
/// # fn main() -> Result<(), Error> {
/// let mut document = parse(r#"{"social_links": [{"name": "GitHub", "svg_path": "no/such/icon.svg"}]}"#)?;
///
/// let summary = inline_social_link_icons(&mut document, &Config::default())?;
/// assert_eq!(summary.missing, 1);
/// assert_eq!(document["social_links"][0]["svg_data"], "");
/// # Ok(())
/// # }
/// ```
pub fn inline_social_link_icons(
    document: &mut Document,
    config: &Config,
) -> Result<InlineSummary, Error> {
    let mut summary = InlineSummary::default();

    let social_links = match document.get_mut(SOCIAL_LINKS_KEY) {
        Some(Value::Array(social_links)) => social_links,
        Some(_) => {
            log::debug!("{SOCIAL_LINKS_KEY} is not a list, skipping icons");
            return Ok(summary);
        }
        None => return Ok(summary),
    };

    for social_link in social_links.iter_mut() {
        let social_link = match social_link {
            Value::Object(social_link) => social_link,
            _ => {
                log::debug!("{SOCIAL_LINKS_KEY} entry is not an object, skipping");
                continue;
            }
        };

        let svg_path = match social_link.get(SVG_PATH_KEY) {
            Some(Value::String(svg_path)) if !svg_path.is_empty() => svg_path.clone(),
            None | Some(Value::Null) | Some(Value::String(_)) => continue,
            Some(svg_path) => {
                log::warn!("{SVG_PATH_KEY} should be a string, got {svg_path}, skipping");
                continue;
            }
        };

        let svg_data = match icon_from_path(&config.resolve(Path::new(&svg_path)))
            .with_context(|| format!("cannot read SVG icon {svg_path}"))?
        {
            Some(svg_data) => {
                summary.inlined += 1;
                svg_data
            }
            None => {
                log::warn!("SVG icon not found: {svg_path}");
                summary.missing += 1;
                String::new()
            }
        };

        social_link.insert(SVG_DATA_KEY.to_owned(), Value::String(svg_data));
    }

    Ok(summary)
}

/// Reads icon markup. Returns [None] if file does not exist.
fn icon_from_path(path: &Path) -> Result<Option<String>, Error> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(error) => Err(error.into()),
    }
}
