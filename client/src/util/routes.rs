//! Route paths shared by the router, the navigation bar, and redirects.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::net::types::Role;

pub const HOME_PATH: &str = "/Home";
pub const LOGIN_PATH: &str = "/Login";
pub const SIGNUP_PATH: &str = "/Signup";
pub const ADMIN_DASHBOARD_PATH: &str = "/AdminDashboard";
pub const USER_DASHBOARD_PATH: &str = "/UserDashboard";

/// Landing route after login for `role`.
pub fn destination_for(role: Role) -> &'static str {
    match role {
        Role::Admin => ADMIN_DASHBOARD_PATH,
        Role::User => USER_DASHBOARD_PATH,
    }
}

/// Router segment for a top-level path (`"/Login"` -> `"Login"`).
pub fn segment(path: &'static str) -> &'static str {
    path.trim_start_matches('/')
}
