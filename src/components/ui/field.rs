use leptos::prelude::*;

const INPUT: &str = "block w-full rounded-lg border border-gray-300 bg-gray-50 p-2.5 text-sm text-gray-900 focus:border-blue-500 focus:ring-blue-500 disabled:cursor-not-allowed disabled:opacity-70 dark:border-gray-600 dark:bg-gray-700 dark:text-white dark:placeholder-gray-400";

/// Labelled input bound two-way to `value`, with an optional inline error.
#[component]
pub fn TextField(
    id: &'static str,
    label: &'static str,
    value: RwSignal<String>,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] autocomplete: Option<&'static str>,
    #[prop(optional)] placeholder: Option<&'static str>,
    #[prop(optional)] readonly: bool,
    #[prop(optional, into)] error: MaybeProp<&'static str>,
) -> impl IntoView {
    view! {
        <div>
            <label for=id class="mb-2 block text-sm font-medium text-gray-900 dark:text-white">
                {label}
            </label>
            <input
                id=id
                name=id
                type=input_type.unwrap_or("text")
                class=INPUT
                autocomplete=autocomplete
                placeholder=placeholder
                disabled=readonly
                aria-invalid=move || error.get().is_some().to_string()
                prop:value=move || value.get()
                on:input=move |event| value.set(event_target_value(&event))
            />
            {move || {
                error
                    .get()
                    .map(|message| view! { <p class="mt-1 text-sm text-red-600 dark:text-red-400">{message}</p> })
            }}
        </div>
    }
}
