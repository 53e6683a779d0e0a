//! Publish panel: draft status card and publish action card.

use leptos::prelude::*;

use crate::state::ui::UiState;

/// Right-hand publish panel.
///
/// The status card shows the save/preview actions and three static status
/// rows; the separate action card holds the publish button. Everything is an
/// inert placeholder except "Save Draft", which is wired to the shared
/// counter. No draft/publish lifecycle exists yet.
#[component]
pub fn PublishControls() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let on_save_draft = move |_| ui.update(UiState::record_click);

    view! {
        <div class="publish">
            <div class="publish__card">
                <div class="publish__actions">
                    <button class="btn publish__save" on:click=on_save_draft>
                        "Save Draft"
                    </button>
                    <button class="btn publish__preview">"Preview"</button>
                </div>
                <div class="publish__status-row">
                    <span class="publish__status-label">"Status:"</span>
                    <span class="publish__status-value">"Draft"</span>
                </div>
                <div class="publish__status-row">
                    <span class="publish__status-label">"Visibility:"</span>
                    <span class="publish__status-value">"Public"</span>
                </div>
                <div class="publish__status-row">
                    <span class="publish__status-label">"Publish:"</span>
                    <span class="publish__status-value">"Immediately"</span>
                </div>
            </div>
            <div class="publish__card publish__card--action">
                <button class="btn btn--primary publish__publish">"Publish"</button>
            </div>
        </div>
    }
}
