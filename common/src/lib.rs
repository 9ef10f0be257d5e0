//! Common crate, containing types shared between
//! [portfolio-site-builder](../portfolio_site_builder/index.html) library,
//! its command line tool and integration tests.
//!
//! There are two things living here:
//! - [config::Config], describing where the site lives and the fixed names of
//!   files making it up (data file, templates, outputs).
//! - [document::Document], the portfolio data document, an untyped JSON object
//!   passed verbatim to templates, together with names of keys the builder
//!   reads or computes.

#![warn(missing_docs)]

pub mod config;
pub mod document;
