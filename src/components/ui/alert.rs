//! Inline status banners. Messages are rendered as text, never as HTML.

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertKind {
    Error,
    Success,
    Info,
}

impl AlertKind {
    /// Container classes and the material symbol shown before the text.
    fn style(self) -> (&'static str, &'static str) {
        match self {
            AlertKind::Error => (
                "border-red-300 bg-red-50 text-red-800 dark:border-red-500 dark:bg-red-950/40 dark:text-red-200",
                "error",
            ),
            AlertKind::Success => (
                "border-green-300 bg-green-50 text-green-800 dark:border-green-500 dark:bg-green-950/40 dark:text-green-200",
                "check_circle",
            ),
            AlertKind::Info => (
                "border-sky-300 bg-sky-50 text-sky-800 dark:border-sky-500 dark:bg-sky-950/40 dark:text-sky-200",
                "info",
            ),
        }
    }
}

#[component]
pub fn Alert(kind: AlertKind, #[prop(into)] message: String) -> impl IntoView {
    let (palette, icon) = kind.style();
    let role = if kind == AlertKind::Error { "alert" } else { "status" };

    view! {
        <div class=format!("flex items-start gap-2 rounded-md border px-4 py-3 text-sm {palette}") role=role>
            <span class="material-symbols-outlined text-base leading-5">{icon}</span>
            <span>{message}</span>
        </div>
    }
}
