//! Output helpers. Contains [write_pages], storing rendered pages in the site
//! directory.

use crate::{common::config::Config, render::Pages};
use anyhow::{Context, Error};
use std::{fs, io::Write, path::Path};

/// Writes `content` to file at `path`, replacing the file if it exists.
pub fn write_page(
    path: &Path,
    content: &str,
) -> Result<(), Error> {
    let mut file = fs::File::create(path)?;

    file.write_all(content.as_bytes())?;

    file.sync_all()?;
    drop(file);

    Ok(())
}

/// Writes index and resume pages to their fixed names in site directory.
///
/// Files are written one after another, if writing resume fails, index is
/// already replaced.
pub fn write_pages(
    pages: &Pages,
    config: &Config,
) -> Result<(), Error> {
    let write = || -> Result<(), Error> {
        let index_path = config.output_index_path();
        write_page(&index_path, &pages.index)
            .with_context(|| index_path.to_string_lossy().into_owned())?;

        let resume_path = config.output_resume_path();
        write_page(&resume_path, &pages.resume)
            .with_context(|| resume_path.to_string_lossy().into_owned())?;

        Ok(())
    };

    write().context("error writing output files")?;

    Ok(())
}
