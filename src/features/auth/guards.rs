//! Route gate for pages that need a session. Hiding a page is only UX: the
//! API still rejects requests without a valid bearer token.

use crate::{features::auth::state::use_auth, routes::paths};
use leptos::prelude::*;
use leptos_router::{NavigateOptions, hooks::use_navigate};

/// Renders `children` for a signed-in tab and sends anonymous visitors to the
/// login form, replacing the history entry so Back does not loop.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    Effect::new(move |_| {
        if !auth.is_authenticated.get() {
            navigate(
                paths::LOGIN,
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });

    view! { <Show when=move || auth.is_authenticated.get()>{children()}</Show> }
}
