use leptos::prelude::*;

/// Loading indicator with an optional caption next to it.
#[component]
pub fn Spinner(#[prop(optional)] label: Option<&'static str>) -> impl IntoView {
    view! {
        <div class="inline-flex items-center gap-3" role="status" aria-live="polite">
            <div
                class="inline-block h-7 w-7 animate-spin rounded-full border-4 border-blue-200 border-t-blue-600"
                aria-label=label.unwrap_or("Loading")
            ></div>
            {label.map(|text| view! { <span class="text-sm text-gray-500 dark:text-gray-400">{text}</span> })}
        </div>
    }
}
