//! Fallback for unknown paths, including ids that were never routes.

use crate::{
    components::{AppShell, Button, ButtonKind},
    routes::paths,
};
use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_location};

fn go_back() {
    match web_sys::window().map(|window| window.history()) {
        Some(Ok(history)) => {
            if let Err(err) = history.back() {
                tracing::debug!("history.back failed: {err:?}");
            }
        }
        _ => tracing::debug!("history is unavailable"),
    }
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let location = use_location();

    view! {
        <AppShell>
            <section class="mx-auto max-w-md py-16 text-center space-y-5">
                <span class="material-symbols-outlined text-6xl text-gray-300 dark:text-gray-600">
                    "search_off"
                </span>
                <h1 class="text-3xl font-bold text-gray-900 dark:text-white">"404"</h1>
                <p class="text-gray-500 dark:text-gray-400">
                    "No page lives at "
                    <code class="rounded bg-gray-100 px-1 dark:bg-gray-800">
                        {move || location.pathname.get()}
                    </code>
                    "."
                </p>
                <div class="flex justify-center gap-3">
                    <Button kind=ButtonKind::Secondary {..} on:click=move |_| go_back()>
                        "Go Back"
                    </Button>
                    <A
                        href=paths::USERS
                        {..}
                        class="rounded-lg bg-blue-700 px-5 py-2.5 text-sm font-medium text-white hover:bg-blue-800 dark:bg-blue-600 dark:hover:bg-blue-700"
                    >
                        "All users"
                    </A>
                </div>
            </section>
        </AppShell>
    }
}
