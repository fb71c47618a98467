//! Sign-up form. `POST /auth/register` answers like a login, so a new account
//! is signed in straight away.

use crate::{
    app_lib::{AppError, errors::GENERIC_FAILURE},
    components::{Alert, AlertKind, AppShell, Button, Spinner, TextField},
    features::auth::{
        client::AuthClient, registration::Registration, state::use_auth, types::RegisterRequest,
    },
    routes::paths,
};
use leptos::{ev::SubmitEvent, prelude::*};
use leptos_router::{components::A, hooks::use_navigate};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<AppError>);

    let register = Action::new_local(move |request: &RegisterRequest| {
        let request = request.clone();
        async move { auth.store().register(&AuthClient, request).await }
    });

    Effect::new(move |_| match register.value().get() {
        Some(Ok(session)) => {
            auth.set_session(session);
            navigate(paths::USERS, Default::default());
        }
        Some(Err(err)) => error.set(Some(err)),
        None => {}
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        let form = Registration {
            name: name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
        };
        match form.validate() {
            Ok(request) => {
                error.set(None);
                register.dispatch(request);
            }
            Err(err) => error.set(Some(err)),
        }
    };

    view! {
        <AppShell>
            <form class="mx-auto max-w-sm space-y-5" on:submit=on_submit>
                <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">"Create account"</h1>
                <TextField id="name" label="Name" value=name autocomplete="name" />
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
                    autocomplete="new-password"
                />
                <TextField
                    id="confirm_password"
                    label="Confirm password"
                    value=confirm_password
                    input_type="password"
                    autocomplete="new-password"
                />
                <div class="flex items-center gap-4">
                    <Button button_type="submit" disabled=register.pending()>"Create account"</Button>
                    {move || register.pending().get().then(|| view! { <Spinner /> })}
                </div>
                {move || {
                    error.get().map(|err| {
                        view! { <Alert kind=AlertKind::Error message=err.user_message(GENERIC_FAILURE) /> }
                    })
                }}
                <p class="text-sm text-gray-500 dark:text-gray-400">
                    "Already registered? "
                    <A href=paths::LOGIN {..} class="text-blue-600 hover:underline dark:text-blue-400">
                        "Sign in"
                    </A>
                </p>
            </form>
        </AppShell>
    }
}
