//! Tests for the auth module

use super::*;
use crate::error::Error;
use test_case::test_case;

const KEY_A: &str = "0123456789abcdef0123456789abcdef01234567";
const KEY_B: &str = "fedcba9876543210fedcba9876543210fedcba98";

#[test]
fn test_valid_credentials() {
    let creds = Credentials::new("https://example.com/api/", "alice", KEY_A).unwrap();
    assert_eq!(creds.host(), "https://example.com/api/");
    assert_eq!(creds.user(), "alice");
    assert_eq!(creds.apikey(), KEY_A);
}

#[test]
fn test_host_gets_trailing_slash() {
    let creds = Credentials::new("https://example.com/api", "alice", KEY_A).unwrap();
    assert_eq!(creds.host(), "https://example.com/api/");
}

#[test_case("0123456789abcdef0123456789abcdef01234567"; "all hex digits")]
#[test_case("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa"; "single letter")]
#[test_case("0000000000000000000000000000000000000000"; "all zeros")]
fn test_api_key_accepted(key: &str) {
    assert!(Credentials::new("https://h/", "u", key).is_ok());
}

#[test_case(""; "empty")]
#[test_case("0123456789abcdef"; "too short")]
#[test_case("0123456789abcdef0123456789abcdef012345678"; "too long")]
#[test_case("0123456789ABCDEF0123456789ABCDEF01234567"; "uppercase hex")]
#[test_case("0123456789abcdef0123456789abcdef0123456g"; "non hex char")]
#[test_case("0123456789abcdef 0123456789abcdef0123456"; "embedded space")]
fn test_api_key_rejected(key: &str) {
    let err = Credentials::new("https://h/", "u", key).unwrap_err();
    assert!(matches!(err, Error::InvalidApiKey { .. }));
}

#[test]
fn test_empty_host_and_user_rejected() {
    assert!(matches!(
        Credentials::new("", "u", KEY_A).unwrap_err(),
        Error::Config { .. }
    ));
    assert!(matches!(
        Credentials::new("https://h/", "", KEY_A).unwrap_err(),
        Error::Config { .. }
    ));
}

#[test]
fn test_auth_headers() {
    let creds = Credentials::new("https://h/", "alice", KEY_A).unwrap();
    let headers = creds.auth_headers();
    assert_eq!(headers[0], (USERNAME_HEADER, "alice"));
    assert_eq!(headers[1], (API_KEY_HEADER, KEY_A));
}

#[test]
fn test_transition_identical_triple_ok() {
    let old = Credentials::new("https://h/", "alice", KEY_A).unwrap();
    let new = Credentials::new("https://h/", "alice", KEY_A).unwrap();
    assert!(old.check_transition(&new).is_ok());
}

#[test]
fn test_transition_full_replacement_ok() {
    let old = Credentials::new("https://h/", "alice", KEY_A).unwrap();
    let new = Credentials::new("https://other/", "bob", KEY_B).unwrap();
    assert!(old.check_transition(&new).is_ok());
}

#[test]
fn test_transition_key_only_rejected() {
    let old = Credentials::new("https://h/", "alice", KEY_A).unwrap();
    let new = Credentials::new("https://h/", "alice", KEY_B).unwrap();
    let err = old.check_transition(&new).unwrap_err();
    assert!(matches!(err, Error::InconsistentAccountChange { .. }));
}

#[test]
fn test_transition_identity_only_rejected() {
    let old = Credentials::new("https://h/", "alice", KEY_A).unwrap();
    let new = Credentials::new("https://h/", "bob", KEY_A).unwrap();
    let err = old.check_transition(&new).unwrap_err();
    assert!(matches!(err, Error::InconsistentAccountChange { .. }));
}
