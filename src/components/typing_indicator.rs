//! "Someone is typing" banner.

use leptos::prelude::*;

use crate::app::ChatSignals;

#[component]
pub fn TypingIndicatorBanner() -> impl IntoView {
    let typing = expect_context::<ChatSignals>().typing;

    let text = move || typing.with(|t| t.text.clone());
    let display = move || if typing.with(|t| t.visible) { "block" } else { "none" };

    view! {
        <div id="typing-indicator" class="typing-indicator" style:display=display aria-live="polite">
            {text}
        </div>
    }
}
