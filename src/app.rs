//! Root application component and shared state provider.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::editor::Editor;
use crate::components::logo::Logo;
use crate::components::nav_sidebar::NavSidebar;
use crate::components::publish_controls::PublishControls;
use crate::state::ui::UiState;

/// Root application component.
///
/// Owns the shared click counter and provides it via context so the wired
/// buttons in `NavSidebar`, `Editor`, and `PublishControls` all feed the same
/// value. Composes the page grid: header on top, then nav, editor pane, and
/// publish panel left to right.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    provide_context(ui);

    view! {
        <Title text="Draftboard"/>

        <div class="shell">
            <header class="shell__header">
                <Logo class="logo"/>
            </header>
            <div class="shell__workspace">
                <NavSidebar/>
                <Editor/>
                <PublishControls/>
            </div>
        </div>
    }
}
