//! Template rendering. Contains [Renderer], a [minijinja] environment loading
//! templates from site directory, and [render_pages] producing both pages.

use crate::common::{
    config::{INDEX_TEMPLATE_NAME, RESUME_TEMPLATE_NAME},
    document::Document,
};
use anyhow::{Context, Error};
use minijinja::{
    AutoEscape, Environment, ErrorKind, Output, State, escape_formatter, path_loader,
    value::{Value, ValueKind},
};
use std::{fmt::Write, path::Path};

/// Renders templates found in a directory against portfolio data document.
///
/// Templates are loaded lazily by name, relative to directory given in
/// [Renderer::new]. Output escaping is enabled for all templates, regardless of
/// their extension, so any markup coming from the document (eg. inlined icons)
/// must be marked with `|safe` filter in template.
///
/// Strings are escaped with [escape_markup], so urls keep their `/` as is.
#[derive(Debug)]
pub struct Renderer {
    environment: Environment<'static>,
}
impl Renderer {
    /// Creates [self] loading templates from `template_directory`.
    pub fn new(template_directory: &Path) -> Self {
        let mut environment = Environment::new();
        environment.set_loader(path_loader(template_directory.to_path_buf()));
        environment.set_auto_escape_callback(|_template_name| AutoEscape::Html);
        environment.set_formatter(markup_formatter);

        Self { environment }
    }

    /// Renders template named `template_name` with `document` keys as template
    /// variables.
    ///
    /// # Examples
    ///
    /// ```
    /// # use anyhow::Error;
    /// # use portfolio_site_builder::{document::parse, render::Renderer};
    /// # use std::fs;
    /// #
    /// # fn main() -> Result<(), Error> {
    /// let directory = tempfile::tempdir()?;
    /// fs::write(
    ///     directory.path().join("hello.html"),
    ///     "<h1>{{ name }}</h1>{{ icon|safe }}",
    /// )?;
    ///
    /// let renderer = Renderer::new(directory.path());
    /// let page = renderer.render(
    ///     "hello.html",
    ///     &parse(r#"{"name": "Tom & Jerry", "icon": "<svg/>"}"#)?,
    /// )?;
    /// assert_eq!(page, "<h1>Tom &amp; Jerry</h1><svg/>");
    /// # Ok(())
    /// # }
    /// ```
    pub fn render(
        &self,
        template_name: &str,
        document: &Document,
    ) -> Result<String, Error> {
        let template = self
            .environment
            .get_template(template_name)
            .with_context(|| format!("cannot load template {template_name}"))?;

        let page = template
            .render(document)
            .with_context(|| format!("cannot render template {template_name}"))?;

        Ok(page)
    }
}

/// Formatter writing unsafe strings through [escape_markup]. Everything else
/// (safe strings, numbers, undefined, other escaping modes) goes through
/// [escape_formatter].
fn markup_formatter(
    output: &mut Output<'_>,
    state: &State<'_, '_>,
    value: &Value,
) -> Result<(), minijinja::Error> {
    match (state.auto_escape(), value.kind(), value.as_str()) {
        (AutoEscape::Html, ValueKind::String, Some(text)) if !value.is_safe() => {
            escape_markup(output, text).map_err(|_error| {
                minijinja::Error::new(ErrorKind::WriteFailure, "cannot write escaped output")
            })
        }
        _ => escape_formatter(output, state, value),
    }
}

/// Escapes `&`, `<`, `>`, `"` and `'`, leaving all other characters intact.
///
/// # Examples
///
/// ```
/// # use portfolio_site_builder::render::escape_markup;
/// let mut escaped = String::new();
/// escape_markup(&mut escaped, "<a href=\"https://example.com/?a=1&b='2'\">").unwrap();
/// assert_eq!(
///     escaped,
///     "&lt;a href=&#34;https://example.com/?a=1&amp;b=&#39;2&#39;&#34;&gt;"
/// );
/// ```
pub fn escape_markup(
    writer: &mut impl Write,
    text: &str,
) -> std::fmt::Result {
    let mut last = 0;
    for (index, character) in text.char_indices() {
        let replacement = match character {
            '&' => "&amp;",
            '<' => "&lt;",
            '>' => "&gt;",
            '"' => "&#34;",
            '\'' => "&#39;",
            _ => continue,
        };
        writer.write_str(&text[last..index])?;
        writer.write_str(replacement)?;
        last = index + character.len_utf8();
    }
    writer.write_str(&text[last..])
}

/// Both rendered pages, not yet written.
#[derive(Debug)]
pub struct Pages {
    /// Rendered `index_template.html`.
    pub index: String,
    /// Rendered `resume_template.html`.
    pub resume: String,
}

/// Renders index and resume templates against `document`.
///
/// Both pages are rendered before returning, so failure in either template
/// means nothing gets written.
pub fn render_pages(
    renderer: &Renderer,
    document: &Document,
) -> Result<Pages, Error> {
    let render = || -> Result<Pages, Error> {
        let index = renderer.render(INDEX_TEMPLATE_NAME, document)?;
        let resume = renderer.render(RESUME_TEMPLATE_NAME, document)?;

        Ok(Pages { index, resume })
    };

    let pages = render().context("error rendering templates")?;

    Ok(pages)
}
