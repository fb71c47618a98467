//! Sign-in form. A successful `POST /auth/login` stores the session for this
//! tab and opens the users list.

use crate::{
    app_lib::{AppError, errors::GENERIC_FAILURE},
    components::{Alert, AlertKind, AppShell, Button, Spinner, TextField},
    features::auth::{client::AuthClient, state::use_auth},
    routes::paths,
};
use leptos::{ev::SubmitEvent, prelude::*};
use leptos_router::{components::A, hooks::use_navigate};
use tracing::info;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<AppError>);

    let login = Action::new_local(move |(email, password): &(String, String)| {
        let (email, password) = (email.clone(), password.clone());
        async move { auth.store().login(&AuthClient, &email, &password).await }
    });

    Effect::new(move |_| match login.value().get() {
        Some(Ok(session)) => {
            info!("signed in");
            auth.set_session(session);
            navigate(paths::USERS, Default::default());
        }
        Some(Err(err)) => error.set(Some(err)),
        None => {}
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        error.set(None);
        login.dispatch((email.get_untracked(), password.get_untracked()));
    };

    view! {
        <AppShell>
            <form class="mx-auto max-w-sm space-y-5" on:submit=on_submit>
                <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">"Sign in"</h1>
                <TextField
                    id="email"
                    label="Email"
                    value=email
                    input_type="email"
                    autocomplete="email"
                    placeholder="name@example.com"
                />
                <TextField
                    id="password"
                    label="Password"
                    value=password
                    input_type="password"
                    autocomplete="current-password"
                />
                <div class="flex items-center gap-4">
                    <Button button_type="submit" disabled=login.pending()>"Sign in"</Button>
                    {move || login.pending().get().then(|| view! { <Spinner /> })}
                </div>
                {move || {
                    error.get().map(|err| {
                        view! { <Alert kind=AlertKind::Error message=err.user_message(GENERIC_FAILURE) /> }
                    })
                }}
                <p class="text-sm text-gray-500 dark:text-gray-400">
                    "No account yet? "
                    <A href=paths::REGISTER {..} class="text-blue-600 hover:underline dark:text-blue-400">
                        "Register"
                    </A>
                </p>
            </form>
        </AppShell>
    }
}
