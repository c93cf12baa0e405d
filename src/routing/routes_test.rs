use super::*;

#[test]
fn find_route_resolves_known_paths() {
    let route = find_route("/outbound").expect("outbound route");
    assert_eq!(route.name, "outbound");
    assert!(route.meta.requires_admin);
    assert_eq!(find_route("/missing"), None);
}

#[test]
fn exactly_the_four_management_routes_require_admin() {
    let admin_paths: Vec<&str> = ROUTES
        .iter()
        .filter(|route| route.meta.requires_admin)
        .map(|route| route.path)
        .collect();
    assert_eq!(
        admin_paths,
        vec!["/man", "/outbound", "/warning", "/permission"]
    );
}

#[test]
fn login_and_register_are_open_routes() {
    assert!(!LOGIN.meta.requires_admin);
    assert!(!REGISTER.meta.requires_admin);
}

#[test]
fn section_routes_exclude_the_auth_screens() {
    let paths: Vec<&str> = section_routes().map(|route| route.path).collect();
    assert!(!paths.contains(&LOGIN_PATH));
    assert!(!paths.contains(&REGISTER_PATH));
    assert!(paths.contains(&HOME_PATH));
    assert_eq!(paths.len(), ROUTES.len() - 2);
}

#[test]
fn every_route_has_a_title() {
    for route in ROUTES {
        assert!(!route.meta.title.is_empty(), "{} has no title", route.path);
    }
}
