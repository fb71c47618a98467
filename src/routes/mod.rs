mod home;
mod login;
mod not_found;
mod password;
pub(crate) mod paths;
mod register;
mod users;

pub(crate) use home::HomeRedirect;
pub(crate) use login::LoginPage;
pub(crate) use not_found::NotFoundPage;
pub(crate) use password::ChangePasswordPage;
pub(crate) use register::RegisterPage;
pub(crate) use users::{UserDetailPage, UsersListPage};

use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=HomeRedirect />
            <Route path=path!("/login") view=LoginPage />
            <Route path=path!("/register") view=RegisterPage />
            <Route path=path!("/users") view=UsersListPage />
            <Route path=path!("/users/:id") view=UserDetailPage />
            <Route path=path!("/account/password") view=ChangePasswordPage />
            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}
