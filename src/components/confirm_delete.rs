//! Yes/no modal shown before any delete request. It holds no business logic:
//! the caller decides what confirming means and whether a request is running.

use crate::{
    components::{Button, ButtonKind, Spinner},
    features::users::deletion::DeleteConfirmation,
};
use leptos::prelude::*;

#[component]
pub fn ConfirmDelete(
    #[prop(into)] visible: Signal<bool>,
    #[prop(into)] context: Signal<DeleteConfirmation>,
    #[prop(optional, into, default = Signal::from(false))] loading: Signal<bool>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || visible.get()>
            <div
                class="fixed inset-0 z-50 flex items-center justify-center bg-gray-900/50 px-4"
                role="dialog"
                aria-modal="true"
                on:click=move |event| {
                    // Only clicks on the backdrop itself cancel, not clicks inside the panel.
                    if event.target() == event.current_target() && !loading.get_untracked() {
                        on_cancel.run(());
                    }
                }
            >
                <div class="w-full max-w-md rounded-lg bg-white p-6 shadow-xl dark:bg-gray-800 space-y-4">
                    <div class="flex items-center gap-3">
                        <span class="material-symbols-outlined text-3xl text-red-600">"warning"</span>
                        <h2 class="text-lg font-semibold text-gray-900 dark:text-white">
                            {move || context.get().title}
                        </h2>
                    </div>
                    <p class="text-sm text-gray-500 dark:text-gray-300">
                        {move || context.get().message}
                    </p>
                    {move || {
                        let item_name = context.get().item_name;
                        (!item_name.is_empty())
                            .then(|| {
                                view! {
                                    <p class="text-sm font-medium text-gray-900 dark:text-white">
                                        {item_name}
                                    </p>
                                }
                            })
                    }}
                    <div class="flex flex-col-reverse gap-3 sm:flex-row sm:justify-end">
                        <Button kind=ButtonKind::Secondary disabled=loading {..} on:click=move |_| on_cancel.run(())>
                            {move || context.get().cancel_text}
                        </Button>
                        <Button kind=ButtonKind::Danger disabled=loading {..} on:click=move |_| on_confirm.run(())>
                            {move || context.get().confirm_text}
                        </Button>
                    </div>
                    {move || loading.get().then(|| view! { <Spinner label="Deleting..." /> })}
                </div>
            </div>
        </Show>
    }
}
