mod detail;
mod list;

pub(crate) use detail::UserDetailPage;
pub(crate) use list::UsersListPage;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Shows `message` in `target` and clears it after `millis`, unless a newer
/// message replaced it in the meantime.
fn flash(target: RwSignal<Option<String>>, message: String, millis: u32) {
    target.set(Some(message.clone()));
    Timeout::new(millis, move || {
        // The page may be gone by now; a disposed signal is simply skipped.
        let _ = target.try_update(|current| {
            if current.as_deref() == Some(message.as_str()) {
                *current = None;
            }
        });
    })
    .forget();
}
