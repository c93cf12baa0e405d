//! Static route table consumed by the router and the navigation guard.
//!
//! DESIGN
//! ======
//! Route metadata is the only input the guard reads besides the session, so
//! it lives in one immutable table instead of being scattered across pages.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Login route, always reachable.
pub const LOGIN_PATH: &str = "/login";
/// Registration route, always reachable.
pub const REGISTER_PATH: &str = "/register";
/// Default authenticated landing route.
pub const HOME_PATH: &str = "/console";

/// Static per-route metadata consulted by the guard and the page chrome.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteMeta {
    /// Only admins may enter when set.
    pub requires_admin: bool,
    /// Display title for the view.
    pub title: &'static str,
}

/// One entry in the static route table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteDescriptor {
    pub path: &'static str,
    pub name: &'static str,
    pub meta: RouteMeta,
}

const fn open(path: &'static str, name: &'static str, title: &'static str) -> RouteDescriptor {
    RouteDescriptor {
        path,
        name,
        meta: RouteMeta {
            requires_admin: false,
            title,
        },
    }
}

const fn admin(path: &'static str, name: &'static str, title: &'static str) -> RouteDescriptor {
    RouteDescriptor {
        path,
        name,
        meta: RouteMeta {
            requires_admin: true,
            title,
        },
    }
}

pub const LOGIN: RouteDescriptor = open(LOGIN_PATH, "login", "Sign In");
pub const REGISTER: RouteDescriptor = open(REGISTER_PATH, "register", "Register");
pub const CONSOLE: RouteDescriptor = open(HOME_PATH, "console", "Console");
pub const MAN: RouteDescriptor = admin("/man", "man", "Staff Management");
pub const CHEMICAL: RouteDescriptor = open("/chemical", "chemical", "Chemical Information");
pub const INVENTORY: RouteDescriptor = open("/inventory", "inventory", "Inventory Monitoring");
pub const STORAGE: RouteDescriptor = open("/storage", "storage", "Inbound Management");
pub const OUTBOUND: RouteDescriptor = admin("/outbound", "outbound", "Outbound Management");
pub const WARNING: RouteDescriptor = admin("/warning", "warning", "Safety Alerts");
pub const USE_RECORD: RouteDescriptor = open("/UseRecord", "use-record", "Usage Records");
pub const PERMISSION: RouteDescriptor = admin("/permission", "permission", "Permission Management");

/// Every navigable view, in sidebar order.
pub const ROUTES: &[RouteDescriptor] = &[
    LOGIN, REGISTER, CONSOLE, MAN, CHEMICAL, INVENTORY, STORAGE, OUTBOUND, WARNING, USE_RECORD,
    PERMISSION,
];

/// Look up a route by path.
pub fn find_route(path: &str) -> Option<&'static RouteDescriptor> {
    ROUTES.iter().find(|route| route.path == path)
}

/// Routes listed in the authenticated navigation chrome.
pub fn section_routes() -> impl Iterator<Item = &'static RouteDescriptor> {
    ROUTES
        .iter()
        .filter(|route| route.path != LOGIN_PATH && route.path != REGISTER_PATH)
}
