//! User detail route: profile editor with avatar preview, save and delete.

use crate::{
    app_lib::{AppError, errors::GENERIC_FAILURE},
    components::{
        Alert, AlertKind, AppShell, Button, ButtonKind, ConfirmDelete, Spinner, TextField,
    },
    features::{
        auth::{RequireAuth, state::use_auth},
        profile::{
            ProfileEditor, ProfileForm,
            form::{FieldErrors, is_valid_image_url},
        },
        users::{
            client::UsersClient,
            deletion::{DeleteConfirmation, delete_failure_message, ensure_not_self},
            types::UserRecord,
        },
    },
    routes::{paths, users::flash},
};
use gloo_timers::callback::Timeout;
use leptos::{ev::SubmitEvent, prelude::*};
use leptos_router::{
    components::A,
    hooks::{use_navigate, use_params},
    params::Params,
};

const NOTICE_MS: u32 = 3_000;
const ERROR_MS: u32 = 5_000;
const REDIRECT_AFTER_DELETE_MS: u32 = 1_500;

#[derive(Params, PartialEq, Clone)]
struct UserParams {
    id: Option<String>,
}

#[component]
pub fn UserDetailPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let params = use_params::<UserParams>();
    let user_id = Memo::new(move |_| {
        params
            .get()
            .ok()
            .and_then(|params| params.id)
            .unwrap_or_default()
    });

    let user = LocalResource::new(move || {
        let id = user_id.get();
        let signed_in = auth.is_authenticated.get();
        let viewer = auth.current_user.get_untracked();
        async move {
            if !signed_in {
                return Err(AppError::Unauthorized("Please sign in to continue.".to_string()));
            }
            let client = UsersClient::from_session()?;
            ProfileEditor::new(&client, &id, viewer).load().await
        }
    });

    let record = RwSignal::new(None::<UserRecord>);
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let avatar_url = RwSignal::new(String::new());
    let submitted = RwSignal::new(false);
    let notice = RwSignal::new(None::<String>);
    let failure = RwSignal::new(None::<String>);
    let confirm_open = RwSignal::new(false);
    let (leave, set_leave) = signal(false);

    let fill_form = move |loaded: &UserRecord| {
        let form = ProfileForm::from_record(loaded);
        name.set(form.name);
        email.set(form.email);
        avatar_url.set(form.avatar_url);
        record.set(Some(loaded.clone()));
    };

    Effect::new(move |_| {
        if let Some(Ok(loaded)) = user.get() {
            submitted.set(false);
            fill_form(&loaded);
        }
    });

    let current_form = move || ProfileForm {
        name: name.get(),
        email: email.get(),
        avatar_url: avatar_url.get(),
    };
    let field_errors = Memo::new(move |_| {
        if submitted.get() {
            current_form().field_errors()
        } else {
            FieldErrors::default()
        }
    });
    let preview = Memo::new(move |_| {
        let stored = record.get().and_then(|user| user.avatar_url);
        current_form().preview_avatar(stored.as_deref())
    });

    let save_action = Action::new_local(move |form: &ProfileForm| {
        let form = form.clone();
        let id = user_id.get_untracked();
        let viewer = auth.current_user.get_untracked();
        async move {
            let client = UsersClient::from_session()?;
            let editor = ProfileEditor::new(&client, &id, viewer);
            let own_profile = editor.is_own_profile();
            editor.save(&form).await.map(|updated| (updated, own_profile))
        }
    });

    Effect::new(move |_| {
        if let Some(result) = save_action.value().get() {
            match result {
                Ok((updated, own_profile)) => {
                    if own_profile {
                        auth.refresh_user(&updated);
                    }
                    let shown = match record.get_untracked() {
                        Some(current) => current.merged_with(&updated),
                        None => updated,
                    };
                    fill_form(&shown);
                    flash(notice, "User updated successfully!".to_string(), NOTICE_MS);
                }
                Err(err) => flash(
                    failure,
                    err.user_message("Failed to update user. Please try again."),
                    ERROR_MS,
                ),
            }
        }
    });

    let delete_action = Action::new_local(move |_: &()| {
        let id = user_id.get_untracked();
        let viewer = auth.current_user.get_untracked();
        async move {
            let client = UsersClient::from_session()?;
            ProfileEditor::new(&client, &id, viewer).delete().await
        }
    });

    Effect::new(move |_| {
        if let Some(result) = delete_action.value().get() {
            confirm_open.set(false);
            match result {
                Ok(()) => {
                    flash(notice, "User deleted successfully!".to_string(), NOTICE_MS);
                    Timeout::new(REDIRECT_AFTER_DELETE_MS, move || {
                        let _ = set_leave.try_set(true);
                    })
                    .forget();
                }
                Err(err) => flash(failure, delete_failure_message(&err), ERROR_MS),
            }
        }
    });

    Effect::new(move |_| {
        if leave.get() {
            navigate(paths::USERS, Default::default());
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        failure.set(None);
        submitted.set(true);

        let form = ProfileForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
            avatar_url: avatar_url.get_untracked(),
        };
        if form.field_errors().is_empty() {
            save_action.dispatch(form);
        }
    };

    let request_delete = move |_| {
        let viewer = auth.current_user.get_untracked();
        match ensure_not_self(viewer.as_ref(), &user_id.get_untracked()) {
            Ok(()) => confirm_open.set(true),
            Err(err) => flash(failure, err.user_message(GENERIC_FAILURE), ERROR_MS),
        }
    };

    let confirm_context = Signal::derive(move || {
        record
            .get()
            .map(|user| DeleteConfirmation::for_user(&user))
            .unwrap_or_default()
    });
    let on_confirm = Callback::new(move |()| {
        delete_action.dispatch(());
    });
    let on_cancel = Callback::new(move |()| confirm_open.set(false));
    let busy = Signal::derive(move || save_action.pending().get() || delete_action.pending().get());

    view! {
        <AppShell>
            <RequireAuth>
                <div class="max-w-2xl mx-auto block rounded-lg border border-neutral-200 bg-white p-6 dark:border-neutral-300 dark:bg-neutral-600 space-y-4">
                    <div class="flex items-center justify-between">
                        <h1 class="text-lg font-semibold text-gray-900 dark:text-white">
                            "Edit user"
                        </h1>
                        <A href=paths::USERS {..} class="text-sm text-blue-600 hover:underline dark:text-blue-400">
                            "Back to users"
                        </A>
                    </div>

                    {move || notice.get().map(|message| view! { <Alert kind=AlertKind::Success message=message /> })}
                    {move || failure.get().map(|message| view! { <Alert kind=AlertKind::Error message=message /> })}

                    {move || match user.get() {
                        None => view! { <Spinner label="Loading user..." /> }.into_any(),
                        Some(Err(err)) => {
                            let message = match &err {
                                AppError::NotFound(_) => "User not found.".to_string(),
                                other => other.user_message("Failed to load user. Please try again."),
                            };
                            view! { <Alert kind=AlertKind::Error message=message /> }.into_any()
                        }
                        Some(Ok(_)) => view! {
                            <form class="space-y-5" on:submit=on_submit>
                                <div class="flex items-center gap-4">
                                    {move || match preview.get() {
                                        Some(url) if is_valid_image_url(&url) => view! {
                                            <img
                                                src=url
                                                alt="Avatar preview"
                                                class="h-20 w-20 rounded-full object-cover border border-gray-200"
                                            />
                                        }.into_any(),
                                        Some(_) => view! {
                                            <div class="flex h-20 w-20 items-center justify-center rounded-full bg-gray-100 text-xs text-gray-500 text-center">
                                                "Invalid image URL"
                                            </div>
                                        }.into_any(),
                                        None => view! {
                                            <div class="flex h-20 w-20 items-center justify-center rounded-full bg-gray-100">
                                                <span class="material-symbols-outlined text-4xl text-gray-400">"person"</span>
                                            </div>
                                        }.into_any(),
                                    }}
                                    <div class="text-sm text-gray-500 dark:text-gray-300">
                                        {move || record.get().and_then(|user| user.role).unwrap_or_default()}
                                    </div>
                                </div>
                                <TextField
                                    id="name"
                                    label="Name"
                                    value=name
                                    autocomplete="name"
                                    error=Signal::derive(move || field_errors.get().name)
                                />
                                <TextField
                                    id="email"
                                    label="Email"
                                    value=email
                                    input_type="email"
                                    readonly=true
                                    error=Signal::derive(move || field_errors.get().email)
                                />
                                <TextField
                                    id="avatar_url"
                                    label="Avatar URL"
                                    value=avatar_url
                                    input_type="url"
                                    placeholder="https://example.com/avatar.png"
                                />
                                <div class="flex flex-col gap-3 sm:flex-row sm:justify-between">
                                    <Button button_type="submit" disabled=busy>
                                        {move || if save_action.pending().get() { "Saving..." } else { "Save" }}
                                    </Button>
                                    <Button kind=ButtonKind::Danger disabled=busy {..} on:click=request_delete>
                                        "Delete"
                                    </Button>
                                </div>
                            </form>
                        }.into_any(),
                    }}
                </div>
            </RequireAuth>
            <ConfirmDelete
                visible=confirm_open
                context=confirm_context
                loading=delete_action.pending()
                on_confirm=on_confirm
                on_cancel=on_cancel
            />
        </AppShell>
    }
}
