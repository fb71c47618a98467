//! Page frame shared by every route: top bar with navigation and the session
//! menu, content area, build footer. Hiding links is cosmetic; the API decides
//! what a token may do.

use crate::{app_lib::build_info::git_commit_hash, features::auth::state::use_auth, routes::paths};
use leptos::prelude::*;
use leptos_router::{
    components::A,
    hooks::{use_location, use_navigate},
};

const LINK: &str = "rounded-md px-3 py-2 text-sm font-medium text-gray-700 hover:bg-gray-100 hover:text-blue-700 dark:text-gray-200 dark:hover:bg-gray-800";
const LINK_ACTIVE: &str = "rounded-md px-3 py-2 text-sm font-medium bg-blue-50 text-blue-700 dark:bg-gray-800 dark:text-blue-400";

/// Top-bar link, highlighted while the current path is at or below `href`.
#[component]
fn NavLink(href: &'static str, label: &'static str) -> impl IntoView {
    let location = use_location();
    let active = move || {
        let path = location.pathname.get();
        path == href || path.starts_with(&format!("{href}/"))
    };

    view! {
        <A href=href {..} class=move || if active() { LINK_ACTIVE } else { LINK }>
            {label}
        </A>
    }
}

/// Greeting and sign-out for a session, sign-in/register links otherwise.
#[component]
fn SessionMenu() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let (signed_out, set_signed_out) = signal(false);

    Effect::new(move |_| {
        if signed_out.get() {
            set_signed_out.set(false);
            navigate(paths::LOGIN, Default::default());
        }
    });

    let greeting = move || {
        auth.current_user
            .get()
            .map(|user| format!("Hi, {}", user.display_name()))
            .unwrap_or_default()
    };

    view! {
        <Show
            when=move || auth.is_authenticated.get()
            fallback=|| view! {
                <NavLink href=paths::LOGIN label="Sign In" />
                <NavLink href=paths::REGISTER label="Register" />
            }
        >
            <span class="hidden sm:inline text-sm text-gray-500 dark:text-gray-400">{greeting}</span>
            <button
                type="button"
                class=LINK
                on:click=move |_| {
                    auth.logout();
                    set_signed_out.set(true);
                }
            >
                "Sign Out"
            </button>
        </Show>
    }
}

#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let auth = use_auth();

    view! {
        <div class="flex min-h-screen flex-col">
            <header class="border-b border-gray-200 dark:border-gray-700">
                <nav class="mx-auto flex max-w-screen-xl flex-wrap items-center gap-2 px-4 py-3">
                    <A href=paths::USERS {..} class="mr-4 flex items-center gap-2 font-semibold text-gray-900 dark:text-white">
                        <span class="material-symbols-outlined text-blue-700">"group"</span>
                        "User Admin"
                    </A>
                    <Show when=move || auth.is_authenticated.get()>
                        <NavLink href=paths::USERS label="Users" />
                        <NavLink href=paths::CHANGE_PASSWORD label="Password" />
                    </Show>
                    <div class="ml-auto flex items-center gap-2">
                        <SessionMenu />
                    </div>
                </nav>
            </header>
            <main class="flex-1">
                <div class="container mx-auto mt-6 p-4">{children()}</div>
            </main>
            <footer class="px-4 py-3 text-center text-xs text-gray-400">
                {format!("build {}", git_commit_hash())}
            </footer>
        </div>
    }
}
