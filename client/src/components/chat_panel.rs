//! AI insights panel: question input and conversation history.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders `ChatState` and hands questions to the page, which owns the REST
//! call and knows the active dataset and time range. Assistant replies are
//! markdown rendered through the sanitizer in `util::markdown`.

use leptos::prelude::*;

use crate::state::chat::{ChatRole, ChatState};
use crate::util::markdown::render_markdown_html;

#[component]
pub fn ChatPanel(
    /// Called with the trimmed question text.
    on_send: Callback<String>,
    /// Called when the user starts a new conversation.
    on_new_chat: Callback<()>,
) -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    // Keep the newest message in view.
    Effect::new(move || {
        chat.track();
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                el.set_scroll_top(el.scroll_height());
            }
        }
    });

    let can_send = move || !input.get().trim().is_empty() && !chat.with(|c| c.loading);

    let do_send = move || {
        if !can_send() {
            return;
        }
        on_send.run(input.get_untracked().trim().to_owned());
        input.set(String::new());
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    view! {
        <section class="chat-panel">
            <header class="chat-panel__header">
                <h2>"Insights"</h2>
                <button class="btn chat-panel__new" on:click=move |_| on_new_chat.run(())>
                    "New chat"
                </button>
            </header>
            <div class="chat-panel__messages" node_ref=messages_ref>
                {move || {
                    let messages = chat.get().messages;
                    if messages.is_empty() {
                        return view! {
                            <div class="chat-panel__empty">"Ask a question about the selected dataset"</div>
                        }
                            .into_any();
                    }
                    messages
                        .into_iter()
                        .map(|msg| {
                            let class = format!("chat-panel__message chat-panel__message--{}", msg.role.css_modifier());
                            let body = if msg.role == ChatRole::Assistant {
                                view! {
                                    <div class="chat-panel__markdown" inner_html=render_markdown_html(&msg.content)></div>
                                }
                                    .into_any()
                            } else {
                                view! { <div class="chat-panel__text">{msg.content}</div> }.into_any()
                            };
                            view! { <div class=class>{body}</div> }
                        })
                        .collect_view()
                        .into_any()
                }}
                <Show when=move || chat.with(|c| c.loading)>
                    <div class="chat-panel__message chat-panel__message--pending">"Thinking..."</div>
                </Show>
            </div>
            <div class="chat-panel__input-row">
                <textarea
                    class="chat-panel__input"
                    rows="2"
                    placeholder="e.g. Which region grew fastest?"
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                ></textarea>
                <button class="btn btn--primary chat-panel__send" disabled=move || !can_send() on:click=move |_| do_send()>
                    "Send"
                </button>
            </div>
        </section>
    }
}
