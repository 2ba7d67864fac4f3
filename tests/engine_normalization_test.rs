use param_hunter::engine::normalization::{
    domain_of, normalize_target, normalize_targets, probe_url, read_targets,
};
use std::io::Write;

// * Test Suite for target normalization and domain scoping

#[test]
fn test_scheme_is_prepended() {
    assert_eq!(normalize_target("example.com/a"), "https://example.com/a");
}

#[test]
fn test_https_line_is_verbatim() {
    assert_eq!(normalize_target("https://example.com/a"), "https://example.com/a");
}

#[test]
fn test_other_schemes_are_not_special() {
    // * Only the https:// prefix is recognised
    assert_eq!(normalize_target("http://example.com"), "https://http://example.com");
}

#[test]
fn test_blank_lines_are_skipped_and_order_kept() {
    let lines = ["  b.test/x  ", "", "   ", "https://a.test/"];
    assert_eq!(
        normalize_targets(lines),
        vec!["https://b.test/x".to_string(), "https://a.test/".to_string()]
    );
}

#[test]
fn test_read_targets_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "site1.test/login").unwrap();
    writeln!(file).unwrap();
    writeln!(file, "https://site1.test/search?q=1").unwrap();

    let targets = read_targets(file.path()).unwrap();
    assert_eq!(
        targets,
        vec![
            "https://site1.test/login".to_string(),
            "https://site1.test/search?q=1".to_string()
        ]
    );
}

#[test]
fn test_read_targets_missing_file() {
    assert!(read_targets(std::path::Path::new("/no/such/targets.txt")).is_err());
}

#[test]
fn test_domain_of_probe_urls() {
    assert_eq!(domain_of("https://Site1.test/search?q=1?q=").as_deref(), Some("site1.test"));
    assert_eq!(domain_of("http://127.0.0.1:8080/a?x=").as_deref(), Some("127.0.0.1:8080"));
    // * Default port is not part of the authority
    assert_eq!(domain_of("https://a.test:443/").as_deref(), Some("a.test"));
    assert_eq!(domain_of("https://"), None);
}

#[test]
fn test_probe_url_format() {
    assert_eq!(
        probe_url("https://site1.test/search?q=1", "q"),
        "https://site1.test/search?q=1?q="
    );
}
