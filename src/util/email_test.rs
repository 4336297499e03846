use super::*;

#[test]
fn is_valid_email_accepts_plain_address() {
    assert!(is_valid_email("user@example.com"));
}

#[test]
fn is_valid_email_accepts_tags_and_subdomains() {
    assert!(is_valid_email("first.last+tag@mail.example.co"));
}

#[test]
fn is_valid_email_rejects_missing_at() {
    assert!(!is_valid_email("userexample.com"));
}

#[test]
fn is_valid_email_rejects_domain_without_dot() {
    assert!(!is_valid_email("user@example"));
}

#[test]
fn is_valid_email_rejects_multiple_ats() {
    assert!(!is_valid_email("user@@example.com"));
    assert!(!is_valid_email("user@two@example.com"));
}

#[test]
fn is_valid_email_rejects_whitespace() {
    assert!(!is_valid_email("user name@example.com"));
    assert!(!is_valid_email(" user@example.com"));
    assert!(!is_valid_email("user@example.com "));
}

#[test]
fn is_valid_email_rejects_empty_segments() {
    assert!(!is_valid_email(""));
    assert!(!is_valid_email("@example.com"));
    assert!(!is_valid_email("user@.com"));
    assert!(!is_valid_email("user@example."));
}

#[test]
fn is_valid_email_is_stable_across_repeated_checks() {
    for _ in 0..3 {
        assert!(is_valid_email("user@example.com"));
        assert!(!is_valid_email("user@example"));
    }
}
