//! Site configuration. Contains [Config] with the fixed set of file names.

use std::path::{Path, PathBuf};

/// Name of the portfolio data file.
pub const DATA_FILE_NAME: &str = "portfolio.json";
/// Name of the template producing [OUTPUT_INDEX_FILE_NAME].
pub const INDEX_TEMPLATE_NAME: &str = "index_template.html";
/// Name of the template producing [OUTPUT_RESUME_FILE_NAME].
pub const RESUME_TEMPLATE_NAME: &str = "resume_template.html";
/// Name of the rendered index page.
pub const OUTPUT_INDEX_FILE_NAME: &str = "index.html";
/// Name of the rendered resume page.
pub const OUTPUT_RESUME_FILE_NAME: &str = "resume.html";

/// Where the site is built.
///
/// All file names are fixed, the only thing that can be changed is the site
/// directory they are resolved against. Data file, templates and relative icon
/// paths are read from it, outputs are written into it.
///
/// If not sure what to set here, use [Default], which points to the current
/// working directory.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Config {
    /// Directory containing the data file and templates.
    pub site_directory: PathBuf,
}
impl Config {
    /// Creates [self] rooted at `site_directory`.
    pub fn with_site_directory(site_directory: impl Into<PathBuf>) -> Self {
        Self {
            site_directory: site_directory.into(),
        }
    }

    /// Full path of the portfolio data file.
    pub fn data_file_path(&self) -> PathBuf {
        self.site_directory.join(DATA_FILE_NAME)
    }
    /// Full path of the rendered index page.
    pub fn output_index_path(&self) -> PathBuf {
        self.site_directory.join(OUTPUT_INDEX_FILE_NAME)
    }
    /// Full path of the rendered resume page.
    pub fn output_resume_path(&self) -> PathBuf {
        self.site_directory.join(OUTPUT_RESUME_FILE_NAME)
    }

    /// Resolves path found inside the data document (eg. icon path). Relative
    /// paths are relative to site directory, absolute are left as they are.
    pub fn resolve(
        &self,
        path: &Path,
    ) -> PathBuf {
        self.site_directory.join(path)
    }
}
impl Default for Config {
    fn default() -> Self {
        Self::with_site_directory(".")
    }
}
