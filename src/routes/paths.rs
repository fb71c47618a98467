//! Route paths shared by links, redirects and guards.

pub const LOGIN: &str = "/login";
pub const REGISTER: &str = "/register";
pub const USERS: &str = "/users";
pub const CHANGE_PASSWORD: &str = "/account/password";

pub fn user_detail(id: &str) -> String {
    format!("{USERS}/{id}")
}
