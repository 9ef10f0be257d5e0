use portfolio_site_builder::{common::config::Config, site::build};
use portfolio_site_tests::portfolio_fixture_copy;
use std::fs;
use test_case::test_case;

#[test_case("{ \"name\": \"Jane Doe\", ", "invalid JSON in"; "truncated json")]
#[test_case("name = \"Jane Doe\"", "invalid JSON in"; "not json at all")]
#[test_case("[\"Jane Doe\"]", "invalid JSON in"; "array at root")]
fn invalid_data_file_writes_nothing(
    content: &str,
    expected_message: &str,
) {
    let site = portfolio_fixture_copy().unwrap();
    fs::write(site.path().join("portfolio.json"), content).unwrap();

    let error = build(&Config::with_site_directory(site.path())).unwrap_err();

    assert!(error.to_string().starts_with(expected_message), "{error:#}");
    assert!(!site.path().join("index.html").exists());
    assert!(!site.path().join("resume.html").exists());
}

#[test]
fn missing_data_file_writes_nothing() {
    let site = portfolio_fixture_copy().unwrap();
    fs::remove_file(site.path().join("portfolio.json")).unwrap();

    let error = build(&Config::with_site_directory(site.path())).unwrap_err();

    assert!(error.to_string().ends_with("portfolio.json not found"));
    assert!(!site.path().join("index.html").exists());
    assert!(!site.path().join("resume.html").exists());
}

#[test]
fn unreadable_data_file_writes_nothing() {
    let site = portfolio_fixture_copy().unwrap();
    fs::remove_file(site.path().join("portfolio.json")).unwrap();
    fs::create_dir(site.path().join("portfolio.json")).unwrap();

    let error = build(&Config::with_site_directory(site.path())).unwrap_err();

    assert_eq!(
        error.to_string(),
        format!("cannot read {}", site.path().join("portfolio.json").display())
    );
    assert!(!site.path().join("index.html").exists());
    assert!(!site.path().join("resume.html").exists());
}

#[test]
fn non_utf8_icon_writes_nothing() {
    let site = portfolio_fixture_copy().unwrap();
    fs::write(site.path().join("icons").join("github.svg"), b"<svg>\xff</svg>").unwrap();

    let error = build(&Config::with_site_directory(site.path())).unwrap_err();

    assert_eq!(error.to_string(), "cannot read SVG icon icons/github.svg");
    assert!(!site.path().join("index.html").exists());
    assert!(!site.path().join("resume.html").exists());
}

#[test_case("index_template.html"; "index template")]
#[test_case("resume_template.html"; "resume template")]
fn missing_template_writes_nothing(template_name: &str) {
    let site = portfolio_fixture_copy().unwrap();
    fs::remove_file(site.path().join(template_name)).unwrap();

    let error = build(&Config::with_site_directory(site.path())).unwrap_err();

    assert_eq!(error.to_string(), "error rendering templates");
    assert!(format!("{error:#}").contains(template_name));
    assert!(!site.path().join("index.html").exists());
    assert!(!site.path().join("resume.html").exists());
}

#[test]
fn broken_template_writes_nothing() {
    let site = portfolio_fixture_copy().unwrap();
    fs::write(
        site.path().join("resume_template.html"),
        "{% for job in experience %}{{ job.company }}",
    )
    .unwrap();

    let error = build(&Config::with_site_directory(site.path())).unwrap_err();

    assert_eq!(error.to_string(), "error rendering templates");
    assert!(!site.path().join("index.html").exists());
}

#[test]
fn unwritable_output_fails() {
    let site = portfolio_fixture_copy().unwrap();
    fs::create_dir(site.path().join("index.html")).unwrap();

    let error = build(&Config::with_site_directory(site.path())).unwrap_err();

    assert_eq!(error.to_string(), "error writing output files");
    assert!(format!("{error:#}").contains("index.html"));
    assert!(!site.path().join("resume.html").exists());
}
