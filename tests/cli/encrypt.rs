//! Tests for the encrypt run.

use crate::support::*;

#[test]
fn test_end_to_end_hunter2() {
    let t = Test::with_config(SAMPLE_TRAVIS_YML);
    let api = StubApi::with_key(PUBLIC_KEY_PEM);

    let output = t.encrypt(&api.url(), "octo/cat", "hunter2");
    assert_success(&output);

    let contents = t.read_config();
    assert_eq!(
        contents.lines().next(),
        Some("# This file was autogenerated and will overwrite each time you run travis-encrypt")
    );

    let secure = t.secure_value().expect("deploy.password.secure missing");
    assert_eq!(decrypt_secure(&secure), "hunter2");

    let password = t.config_yaml()["deploy"]["password"].clone();
    assert_eq!(password.as_mapping().map(|m| m.len()), Some(1));
}

#[test]
fn test_requests_repository_key_path() {
    let t = Test::with_config(SAMPLE_TRAVIS_YML);
    let api = StubApi::with_key(PUBLIC_KEY_PEM);

    let output = t.encrypt(&api.url(), "octo/cat", "hunter2");
    assert_success(&output);

    assert_eq!(api.requested_paths(), ["/repos/octo/cat/key"]);
}

#[test]
fn test_travis_style_key_header() {
    let t = Test::with_config(SAMPLE_TRAVIS_YML);
    let api = StubApi::with_key(&travis_style_public_key());

    let output = t.encrypt(&api.url(), "octo/cat", "hunter2");
    assert_success(&output);

    let secure = t.secure_value().unwrap();
    assert_eq!(decrypt_secure(&secure), "hunter2");
}

#[test]
fn test_prints_single_confirmation_line() {
    let t = Test::with_config(SAMPLE_TRAVIS_YML);
    let api = StubApi::with_key(PUBLIC_KEY_PEM);

    let output = t.encrypt(&api.url(), "octo/cat", "hunter2");
    assert_success(&output);

    let out = stdout(&output);
    assert_eq!(out.lines().count(), 1, "unexpected stdout: {}", out);
    assert!(out.contains("wrote encrypted password to .travis.yml"));
    assert!(!out.contains("hunter2"));
}

#[test]
fn test_preserves_rest_of_config() {
    let t = Test::with_config(FULL_TRAVIS_YML);
    let api = StubApi::with_key(PUBLIC_KEY_PEM);

    let output = t.encrypt(&api.url(), "davidhickman/calendary", "s3cr3t");
    assert_success(&output);

    let doc = t.config_yaml();
    assert_eq!(doc["language"].as_str(), Some("python"));
    assert_eq!(doc["deploy"]["provider"].as_str(), Some("pypi"));
    assert_eq!(doc["deploy"]["on"]["tags"].as_bool(), Some(true));
    assert_ne!(t.secure_value().as_deref(), Some("PLEASE_REPLACE_ME"));
    assert_eq!(decrypt_secure(&t.secure_value().unwrap()), "s3cr3t");
}

#[test]
fn test_rerun_keeps_one_warning_line() {
    let t = Test::with_config(SAMPLE_TRAVIS_YML);
    let api = StubApi::with_key(PUBLIC_KEY_PEM);

    assert_success(&t.encrypt(&api.url(), "octo/cat", "first"));
    assert_success(&t.encrypt(&api.url(), "octo/cat", "second"));

    let contents = t.read_config();
    assert_eq!(contents.matches("# This file was autogenerated").count(), 1);
    assert_eq!(decrypt_secure(&t.secure_value().unwrap()), "second");
}

#[test]
fn test_password_from_stdin() {
    let t = Test::with_config(SAMPLE_TRAVIS_YML);
    let api = StubApi::with_key(PUBLIC_KEY_PEM);

    let output = t.encrypt_stdin(&api.url(), "octo/cat", "piped-secret\n");
    assert_success(&output);

    assert_eq!(decrypt_secure(&t.secure_value().unwrap()), "piped-secret");
}

#[test]
fn test_config_flag_points_elsewhere() {
    let t = Test::new();
    let custom = t.dir.path().join("ci.yml");
    std::fs::write(&custom, SAMPLE_TRAVIS_YML).unwrap();
    let api = StubApi::with_key(PUBLIC_KEY_PEM);

    let output = t
        .cmd()
        .args(["--api-url", api.url().as_str(), "--password", "hunter2", "--config"])
        .arg(&custom)
        .output()
        .unwrap();
    assert_success(&output);

    let doc: serde_yaml::Value =
        serde_yaml::from_str(&std::fs::read_to_string(&custom).unwrap()).unwrap();
    let secure = doc["deploy"]["password"]["secure"].as_str().unwrap();
    assert_eq!(decrypt_secure(secure), "hunter2");
    assert!(!t.config_path().exists());
}

#[test]
fn test_api_url_from_environment() {
    let t = Test::with_config(SAMPLE_TRAVIS_YML);
    let api = StubApi::with_key(PUBLIC_KEY_PEM);

    let output = t
        .cmd()
        .env("TRAVIS_API_URL", api.url())
        .args(["--repo", "octo/cat", "--password", "hunter2"])
        .output()
        .unwrap();
    assert_success(&output);

    assert_eq!(api.requested_paths(), ["/repos/octo/cat/key"]);
}

#[test]
fn test_default_repo_used() {
    let t = Test::with_config(SAMPLE_TRAVIS_YML);
    let api = StubApi::with_key(PUBLIC_KEY_PEM);

    let output = t
        .cmd()
        .args(["--api-url", api.url().as_str(), "--password", "hunter2"])
        .output()
        .unwrap();
    assert_success(&output);

    assert_eq!(
        api.requested_paths(),
        ["/repos/davidhickman/calendary/key"]
    );
}
