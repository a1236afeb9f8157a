//! Connected users list.

use leptos::prelude::*;

use crate::app::ChatSignals;

/// One `<li>` per roster entry, in server order.
#[component]
pub fn UserList() -> impl IntoView {
    let roster = expect_context::<ChatSignals>().roster;

    let entries = move || roster.with(|r| r.entries().to_vec());

    view! {
        <ul id="user-list" class="user-list">
            {move || {
                entries()
                    .into_iter()
                    .map(|entry| {
                        view! {
                            <li class="user-list__item" class:user-list__item--self=entry.is_self>
                                {entry.label}
                            </li>
                        }
                    })
                    .collect_view()
            }}
        </ul>
    }
}
