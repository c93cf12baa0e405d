use super::*;

// =============================================================
// NetConfig
// =============================================================

#[test]
fn default_config_targets_the_local_service() {
    let config = NetConfig::default();
    assert_eq!(config.base_url, "http://localhost:9090");
    assert_eq!(config.timeout_ms, 10_000);
}

// =============================================================
// URL joining
// =============================================================

#[test]
fn join_url_concatenates_origin_and_path() {
    assert_eq!(
        join_url("http://localhost:9090", "/user/login"),
        "http://localhost:9090/user/login"
    );
}

#[test]
fn join_url_tolerates_trailing_slash_on_origin() {
    assert_eq!(
        join_url("http://localhost:9090/", "/user/login"),
        "http://localhost:9090/user/login"
    );
}
