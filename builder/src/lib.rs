//! portfolio-site-builder turns a single JSON data file describing a personal
//! portfolio (bio, social links, skills, resume entries) into two static HTML
//! pages: an index page and a resume page.
//!
//! The build is a straight sequence of steps, each living in its own module:
//! - [document::load] reads `portfolio.json` into a [common::document::Document]
//!   (an untyped JSON object, passed to templates verbatim).
//! - [document::stamp_current_year] adds `current_year` (eg. for copyright
//!   notes).
//! - [icon::inline_social_link_icons] reads svg files referenced by
//!   `social_links[].svg_path` and puts their markup under
//!   `social_links[].svg_data`, so templates can embed them inline.
//! - [render::render_pages] renders `index_template.html` and
//!   `resume_template.html` with [minijinja], html escaping enabled.
//! - [output::write_pages] writes `index.html` and `resume.html`.
//!
//! [site::build] runs all of the above for given [common::config::Config].
//!
//! This crate can be used in two ways:
//! - As a standalone application, run inside directory containing the site
//!   (or pointed to it with `--directory`).
//! - As a library, eg. from build.rs or from tests.
//!
//! # Using as a standalone application
//!
//! Given directory structure:
//! ```text
//! site
//! |   portfolio.json
//! |   index_template.html
//! |   resume_template.html
//! \---icons
//!         github.svg
//! ```
//! running:
//! ```text
//! $ portfolio-site-builder --directory ./site
//! ```
//! will create (or overwrite) `site/index.html` and `site/resume.html`.
//!
//! # Using as a library
//!
//! ```no_run
//! # use anyhow::Error;
//! # use portfolio_site_builder::{common::config::Config, site::build};
//! #
//! # fn main() -> Result<(), Error> {
//! let report = build(&Config::with_site_directory("site"))?;
//! println!("index written to {}", report.index_path.display());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub use portfolio_site_common as common;

pub mod document;
pub mod icon;
pub mod output;
pub mod render;
pub mod site;
