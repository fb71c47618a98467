//! `/` has no content of its own; it forwards to the users list or the login
//! form depending on the session.

use crate::{components::Spinner, features::auth::state::use_auth, routes::paths};
use leptos::prelude::*;
use leptos_router::{NavigateOptions, hooks::use_navigate};

#[component]
pub fn HomeRedirect() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    Effect::new(move |_| {
        let target = if auth.is_authenticated.get() {
            paths::USERS
        } else {
            paths::LOGIN
        };
        navigate(
            target,
            NavigateOptions {
                replace: true,
                ..Default::default()
            },
        );
    });

    view! { <Spinner /> }
}
