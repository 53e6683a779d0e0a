//! Editor pane placeholder.

use leptos::prelude::*;

use crate::state::ui::UiState;

/// Placeholder content area standing in for a future rich-text surface.
///
/// Hosts the counter demo button: the displayed count is the only live value
/// in the shell, so this is where reactivity is visible.
#[component]
pub fn Editor() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let count = move || ui.get().click_count;
    let on_click = move |_| ui.update(UiState::record_click);

    view! {
        <div class="editor">
            <p class="editor__placeholder">"Start writing your post..."</p>
            <button class="editor__demo" on:click=on_click>
                {move || format!("Clicked {} times", count())}
            </button>
        </div>
    }
}
