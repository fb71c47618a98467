//! Password change for the signed-in user.

use crate::{
    app_lib::{AppError, errors::GENERIC_FAILURE},
    components::{Alert, AlertKind, AppShell, Button, Spinner, TextField},
    features::{
        auth::{RequireAuth, password::PasswordChange},
        users::{UsersApi, client::UsersClient, types::ChangePasswordRequest},
    },
};
use leptos::{ev::SubmitEvent, prelude::*};
use tracing::info;

#[component]
pub fn ChangePasswordPage() -> impl IntoView {
    let current_password = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<AppError>);
    let changed = RwSignal::new(false);

    let change = Action::new_local(move |request: &ChangePasswordRequest| {
        let request = request.clone();
        async move { UsersClient::from_session()?.change_password(&request).await }
    });

    Effect::new(move |_| match change.value().get() {
        Some(Ok(())) => {
            info!("password changed");
            for field in [current_password, new_password, confirm_password] {
                field.set(String::new());
            }
            changed.set(true);
        }
        Some(Err(err)) => error.set(Some(err)),
        None => {}
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        changed.set(false);
        let form = PasswordChange {
            current_password: current_password.get_untracked(),
            new_password: new_password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
        };
        match form.validate() {
            Ok(request) => {
                error.set(None);
                change.dispatch(request);
            }
            Err(err) => error.set(Some(err)),
        }
    };

    view! {
        <AppShell>
            <RequireAuth>
                <form class="mx-auto max-w-sm space-y-5" on:submit=on_submit>
                    <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">"Change password"</h1>
                    <TextField
                        id="current_password"
                        label="Current password"
                        value=current_password
                        input_type="password"
                        autocomplete="current-password"
                    />
                    <TextField
                        id="new_password"
                        label="New password"
                        value=new_password
                        input_type="password"
                        autocomplete="new-password"
                    />
                    <TextField
                        id="confirm_password"
                        label="Confirm new password"
                        value=confirm_password
                        input_type="password"
                        autocomplete="new-password"
                    />
                    <div class="flex items-center gap-4">
                        <Button button_type="submit" disabled=change.pending()>"Update password"</Button>
                        {move || change.pending().get().then(|| view! { <Spinner /> })}
                    </div>
                    {move || {
                        changed.get().then(|| {
                            view! { <Alert kind=AlertKind::Success message="Password updated successfully." /> }
                        })
                    }}
                    {move || {
                        error.get().map(|err| {
                            view! { <Alert kind=AlertKind::Error message=err.user_message(GENERIC_FAILURE) /> }
                        })
                    }}
                </form>
            </RequireAuth>
        </AppShell>
    }
}
