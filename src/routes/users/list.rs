//! Users list route guarded by the auth gate. Deleting goes through the
//! confirmation modal; the signed-in user cannot pick their own row.

use crate::{
    components::{Alert, AlertKind, AppShell, ConfirmDelete, Spinner},
    features::{
        auth::{RequireAuth, state::use_auth},
        users::{
            UserDirectory, UsersApi,
            client::UsersClient,
            deletion::{
                DeleteConfirmation, SELF_DELETE_LIST_MESSAGE, delete_failure_message,
                ensure_not_self,
            },
            directory::loaded_message,
            types::UserRecord,
        },
    },
    routes::{paths, users::flash},
};
use leptos::prelude::*;
use leptos_router::components::A;
use tracing::info;

const NOTICE_MS: u32 = 3_000;
const ERROR_MS: u32 = 5_000;

const TH_CLASS: &str = "px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider";
const LINK_CLASS: &str = "text-blue-600 hover:text-blue-800 dark:text-blue-400 dark:hover:text-blue-300";

/// Renders the users list view and fetches data on mount.
#[component]
pub fn UsersListPage() -> impl IntoView {
    let auth = use_auth();
    let users = LocalResource::new(move || {
        // Re-runs on sign-in; a signed-out tab never sends the request.
        let signed_in = auth.is_authenticated.get();
        async move {
            if !signed_in {
                return Ok(Vec::new());
            }
            let client = UsersClient::from_session()?;
            UserDirectory::new(&client).list_all().await
        }
    });

    let notice = RwSignal::new(None::<String>);
    let failure = RwSignal::new(None::<String>);
    let pending_delete = RwSignal::new(None::<UserRecord>);

    Effect::new(move |_| {
        // A reload after a delete keeps the delete confirmation on screen.
        if let Some(Ok(list)) = users.get() {
            if notice.get_untracked().is_none() {
                flash(notice, loaded_message(list.len()), NOTICE_MS);
            }
        }
    });

    let delete_action = Action::new_local(move |user: &UserRecord| {
        let user = user.clone();
        async move {
            let client = UsersClient::from_session()?;
            client.delete_user(&user.id).await.map(|()| user)
        }
    });

    Effect::new(move |_| {
        if let Some(result) = delete_action.value().get() {
            pending_delete.set(None);
            match result {
                Ok(user) => {
                    info!(user_id = %user.id, "user deleted");
                    flash(
                        notice,
                        format!("User {} has been successfully deleted.", user.display_name()),
                        NOTICE_MS,
                    );
                    users.refetch();
                }
                Err(err) => flash(failure, delete_failure_message(&err), ERROR_MS),
            }
        }
    });

    let request_delete = move |user: UserRecord| {
        match ensure_not_self(auth.current_user.get_untracked().as_ref(), &user.id) {
            Ok(()) => pending_delete.set(Some(user)),
            Err(_) => flash(failure, SELF_DELETE_LIST_MESSAGE.to_string(), NOTICE_MS),
        }
    };

    let confirm_visible = Signal::derive(move || pending_delete.get().is_some());
    let confirm_context = Signal::derive(move || {
        pending_delete
            .get()
            .map(|user| DeleteConfirmation::for_user(&user))
            .unwrap_or_default()
    });
    let on_confirm = Callback::new(move |()| {
        if let Some(user) = pending_delete.get_untracked() {
            delete_action.dispatch(user);
        }
    });
    let on_cancel = Callback::new(move |()| pending_delete.set(None));

    view! {
        <AppShell>
            <RequireAuth>
                <div class="space-y-6">
                    <div class="space-y-1">
                        <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                            "Users"
                        </h1>
                        <p class="text-sm text-gray-500 dark:text-gray-400">
                            "View, edit and remove user accounts."
                        </p>
                    </div>

                    {move || notice.get().map(|message| view! { <Alert kind=AlertKind::Success message=message /> })}
                    {move || failure.get().map(|message| view! { <Alert kind=AlertKind::Error message=message /> })}

                    <div class="overflow-hidden bg-white dark:bg-gray-800 shadow-sm border border-gray-200 dark:border-gray-700 rounded-lg">
                        <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-700">
                            <thead class="bg-gray-50 dark:bg-gray-900/50">
                                <tr>
                                    <th scope="col" class=TH_CLASS>"Name"</th>
                                    <th scope="col" class=TH_CLASS>"Email"</th>
                                    <th scope="col" class=TH_CLASS>"Role"</th>
                                    <th scope="col" class="px-6 py-3 text-right text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                                        "Actions"
                                    </th>
                                </tr>
                            </thead>
                            <tbody class="divide-y divide-gray-200 dark:divide-gray-700">
                                {move || match users.get() {
                                    Some(Ok(list)) if list.is_empty() => {
                                        view! {
                                            <tr>
                                                <td colspan="4" class="px-6 py-12 text-center text-sm text-gray-500 dark:text-gray-400">
                                                    "No users found."
                                                </td>
                                            </tr>
                                        }.into_any()
                                    }
                                    Some(Ok(list)) => {
                                        view! {
                                            <For
                                                each=move || list.clone()
                                                key=|user| user.id.clone()
                                                children=move |user: UserRecord| {
                                                    let role = user.role.clone().unwrap_or_else(|| "-".to_string());
                                                    let target = user.clone();
                                                    view! {
                                                        <tr class="hover:bg-gray-50 dark:hover:bg-gray-700/50 transition-colors">
                                                            <td class="px-6 py-4 whitespace-nowrap text-sm font-medium text-gray-900 dark:text-white">
                                                                {user.display_name().to_string()}
                                                            </td>
                                                            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500 dark:text-gray-400">
                                                                {user.email.clone()}
                                                            </td>
                                                            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500 dark:text-gray-400">
                                                                {role}
                                                            </td>
                                                            <td class="px-6 py-4 whitespace-nowrap text-right text-sm font-medium space-x-4">
                                                                <A href=paths::user_detail(&user.id) {..} class=LINK_CLASS>
                                                                    "Edit"
                                                                </A>
                                                                <button
                                                                    type="button"
                                                                    class="text-red-600 hover:text-red-800 dark:text-red-400 dark:hover:text-red-300"
                                                                    on:click=move |_| request_delete(target.clone())
                                                                >
                                                                    "Delete"
                                                                </button>
                                                            </td>
                                                        </tr>
                                                    }
                                                }
                                            />
                                        }.into_any()
                                    }
                                    Some(Err(err)) => {
                                        view! {
                                            <tr>
                                                <td colspan="4" class="px-6 py-4">
                                                    <Alert
                                                        kind=AlertKind::Error
                                                        message=err.user_message("Failed to load users. Please try again.")
                                                    />
                                                </td>
                                            </tr>
                                        }.into_any()
                                    }
                                    None => view! {
                                        <tr>
                                            <td colspan="4" class="px-6 py-12 text-center">
                                                <Spinner label="Loading users..." />
                                            </td>
                                        </tr>
                                    }.into_any(),
                                }}
                            </tbody>
                        </table>
                    </div>
                </div>
            </RequireAuth>
            <ConfirmDelete
                visible=confirm_visible
                context=confirm_context
                loading=delete_action.pending()
                on_confirm=on_confirm
                on_cancel=on_cancel
            />
        </AppShell>
    }
}
