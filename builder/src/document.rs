//! Data document helpers. Contains [load] reading the portfolio data file and
//! [stamp_current_year] adding computed year to it.

use crate::common::document::{CURRENT_YEAR_KEY, Document};
use anyhow::{Context, Error, bail};
use chrono::{Datelike, Utc};
use serde_json::Value;
use std::{fs, io, path::Path};

/// Reads and parses portfolio data file at `path`.
///
/// Fails if file does not exist, cannot be read, is not a valid JSON or its
/// root is not an object. No other validation is performed, document is
/// returned as is.
pub fn load(path: &Path) -> Result<Document, Error> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(error) if error.kind() == io::ErrorKind::NotFound => {
            bail!("{} not found", path.display());
        }
        Err(error) => {
            return Err(Error::new(error).context(format!("cannot read {}", path.display())));
        }
    };

    let document =
        parse(&content).with_context(|| format!("invalid JSON in {}", path.display()))?;

    Ok(document)
}

/// Parses portfolio data document from JSON text.
///
/// # Examples
///
/// ```
/// # use anyhow::Error;
/// # use portfolio_site_builder::document::parse;
/// #
/// # fn main() -> Result<(), Error> {
/// let document = parse(r#"{"name": "Jane Doe", "skills": ["rust"]}"#)?;
/// assert_eq!(document["name"], "Jane Doe");
///
/// // templates need named variables, so root must be an object
/// assert!(parse("[1, 2, 3]").is_err());
/// # Ok(())
/// # }
/// ```
pub fn parse(content: &str) -> Result<Document, Error> {
    let value: Value = serde_json::from_str(content)?;

    match value {
        Value::Object(document) => Ok(document),
        value => bail!(
            "expected an object at the top level, got {}",
            value_kind(&value)
        ),
    }
}

/// Sets `current_year` in `document`, replacing value from data file if any.
pub fn stamp_current_year(
    document: &mut Document,
    year: i32,
) {
    document.insert(CURRENT_YEAR_KEY.to_owned(), Value::from(year));
}

/// Current calendar year, in UTC.
pub fn current_year() -> i32 {
    Utc::now().year()
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
