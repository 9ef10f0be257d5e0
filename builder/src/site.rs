//! Whole site build. Contains [build], running all steps in order.

use crate::{
    common::config::Config,
    document, icon, output,
    render::{self, Renderer},
};
use anyhow::Error;
use std::path::PathBuf;

/// Summary of a successful [build].
#[derive(Debug)]
pub struct BuildReport {
    /// Path of written index page.
    pub index_path: PathBuf,
    /// Path of written resume page.
    pub resume_path: PathBuf,
    /// Outcome of icon inlining.
    pub icons: icon::InlineSummary,
}

/// Builds the site described by `config`, stamping current year.
///
/// See [build_with_year] for details.
pub fn build(config: &Config) -> Result<BuildReport, Error> {
    build_with_year(config, document::current_year())
}

/// Builds the site described by `config`, with `year` as `current_year`.
///
/// Steps are:
/// - load data document ([document::load]),
/// - set `current_year` ([document::stamp_current_year]),
/// - inline social link icons ([icon::inline_social_link_icons]),
/// - render both pages ([render::render_pages]),
/// - write both pages ([output::write_pages]).
///
/// First failing step aborts the build. Missing icons are not a failure.
pub fn build_with_year(
    config: &Config,
    year: i32,
) -> Result<BuildReport, Error> {
    let data_file_path = config.data_file_path();
    log::debug!("loading {}", data_file_path.display());
    let mut document = document::load(&data_file_path)?;

    document::stamp_current_year(&mut document, year);

    log::debug!("inlining social link icons");
    let icons = icon::inline_social_link_icons(&mut document, config)?;
    log::trace!(
        "icons inlined: {}, missing: {}",
        icons.inlined,
        icons.missing
    );

    log::debug!("rendering templates");
    let renderer = Renderer::new(&config.site_directory);
    let pages = render::render_pages(&renderer, &document)?;

    log::debug!("writing output files");
    output::write_pages(&pages, config)?;

    log::info!("HTML files generated successfully!");

    Ok(BuildReport {
        index_path: config.output_index_path(),
        resume_path: config.output_resume_path(),
        icons,
    })
}
