#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

#[path = "lib/mod.rs"]
mod app_lib;
#[cfg(target_arch = "wasm32")]
mod components;
mod features;
#[cfg(target_arch = "wasm32")]
mod routes;

#[cfg(target_arch = "wasm32")]
use crate::{features::auth::state::AuthProvider, routes::AppRoutes};
#[cfg(target_arch = "wasm32")]
use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use leptos_router::components::Router;

/// Root view: the session context wraps the router so every route and the
/// layout read the same signals.
#[cfg(target_arch = "wasm32")]
#[component]
fn App() -> impl IntoView {
    view! {
        <AuthProvider>
            <Router>
                <div class="min-h-screen bg-white text-gray-900 dark:bg-gray-900 dark:text-gray-100">
                    <AppRoutes />
                </div>
            </Router>
        </AuthProvider>
    }
}

#[cfg(target_arch = "wasm32")]
pub fn main() {
    let config = app_lib::config::AppConfig::load();
    app_lib::logging::init(&config.log_level);
    tracing::info!(
        commit = app_lib::build_info::git_commit_hash(),
        api_base_url = %config.api_base_url,
        "starting user admin console"
    );
    mount_to_body(App);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}
