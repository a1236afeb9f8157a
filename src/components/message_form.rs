//! Message input and form.
//!
//! Every input change is forwarded as a draft, which drives the typing
//! debounce. The `<form>` wrapper only exists when the widget owns
//! submission; otherwise the input stands alone so Enter cannot trigger a
//! native submit.

use leptos::prelude::*;

use crate::app::{ChatSignals, InputSender};
use crate::config::FormKind;
use crate::reactor::ReactorInput;

#[component]
pub fn MessageForm(kind: FormKind) -> impl IntoView {
    let sender = expect_context::<RwSignal<InputSender>>();

    match kind {
        FormKind::Submitting => {
            let on_submit = move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                sender.get_untracked().send(ReactorInput::Submit);
            };
            view! {
                <form id="message-form" class="message-form" on:submit=on_submit>
                    <MessageInput/>
                    <button class="message-form__send" type="submit">"Send"</button>
                </form>
            }
            .into_any()
        }
        FormKind::InputOnly => view! {
            <div id="message-form" class="message-form">
                <MessageInput/>
            </div>
        }
        .into_any(),
    }
}

#[component]
fn MessageInput() -> impl IntoView {
    let draft = expect_context::<ChatSignals>().draft;
    let sender = expect_context::<RwSignal<InputSender>>();

    let on_input = move |ev: leptos::ev::Event| {
        sender.get_untracked().send(ReactorInput::Draft(event_target_value(&ev)));
    };

    view! {
        <input
            id="message-input"
            class="message-form__input"
            type="text"
            autocomplete="off"
            placeholder="Type a message..."
            prop:value=move || draft.get()
            on:input=on_input
        />
    }
}
