use nsfinder_domain::{normalize_target, DomainError};

#[test]
fn test_plain_domain_gets_root_label() {
    assert_eq!(normalize_target("example.org").unwrap(), "example.org.");
}

#[test]
fn test_already_fully_qualified() {
    assert_eq!(normalize_target("example.org.").unwrap(), "example.org.");
}

#[test]
fn test_scheme_and_path_are_dropped() {
    assert_eq!(
        normalize_target("https://www.Example.org/").unwrap(),
        "www.example.org."
    );
    assert_eq!(
        normalize_target("http://example.org/index.html?q=1").unwrap(),
        "example.org."
    );
}

#[test]
fn test_whitespace_trimmed() {
    assert_eq!(normalize_target("  example.net \n").unwrap(), "example.net.");
}

#[test]
fn test_empty_and_malformed_rejected() {
    assert!(matches!(
        normalize_target(""),
        Err(DomainError::InvalidDomainName(_))
    ));
    assert!(matches!(
        normalize_target("https://"),
        Err(DomainError::InvalidDomainName(_))
    ));
    assert!(matches!(
        normalize_target("bad..example.com"),
        Err(DomainError::InvalidDomainName(_))
    ));
}
