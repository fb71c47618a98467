use leptos::prelude::*;

#[derive(Clone, Copy, Default)]
pub enum ButtonKind {
    #[default]
    Primary,
    Secondary,
    Danger,
}

impl ButtonKind {
    fn class(self) -> &'static str {
        match self {
            ButtonKind::Primary => {
                "text-white bg-blue-700 hover:bg-blue-800 focus:ring-4 focus:outline-none focus:ring-blue-300 font-medium rounded-lg text-sm w-full sm:w-auto px-5 py-2.5 text-center dark:bg-blue-600 dark:hover:bg-blue-700 dark:focus:ring-blue-800"
            }
            ButtonKind::Secondary => {
                "text-gray-900 bg-white border border-gray-200 hover:bg-gray-100 hover:text-blue-700 focus:ring-4 focus:outline-none focus:ring-gray-100 font-medium rounded-lg text-sm w-full sm:w-auto px-5 py-2.5 text-center dark:bg-gray-800 dark:text-gray-400 dark:border-gray-600 dark:hover:text-white dark:hover:bg-gray-700"
            }
            ButtonKind::Danger => {
                "text-white bg-red-700 hover:bg-red-800 focus:ring-4 focus:outline-none focus:ring-red-300 font-medium rounded-lg text-sm w-full sm:w-auto px-5 py-2.5 text-center dark:bg-red-600 dark:hover:bg-red-700 dark:focus:ring-red-900"
            }
        }
    }
}

#[component]
pub fn Button(
    #[prop(optional)] button_type: Option<&'static str>,
    #[prop(optional)] kind: ButtonKind,
    #[prop(optional, into, default = Signal::from(false))] disabled: Signal<bool>,
    children: Children,
) -> impl IntoView {
    let button_type = button_type.unwrap_or("button");

    view! {
        <button
            type=button_type
            class=kind.class()
            class:cursor-not-allowed=move || disabled.get()
            class:opacity-70=move || disabled.get()
            disabled=move || disabled.get()
        >
            {children()}
        </button>
    }
}
