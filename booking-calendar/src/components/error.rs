use leptos::prelude::*;
use thaw::{MessageBar, MessageBarIntent};

#[component]
pub fn ErrorView(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.with(Option::is_some)>
            <MessageBar intent=MessageBarIntent::Error>
                {move || message.get().unwrap_or_default()}
            </MessageBar>
        </Show>
    }
}
