//! Navigation sidebar with the Posts and Plugins toggle buttons.

#[cfg(test)]
#[path = "nav_sidebar_test.rs"]
mod nav_sidebar_test;

use leptos::prelude::*;

use crate::state::ui::UiState;

/// Class string for a nav tab button.
///
/// The active marking is static markup in this scaffold: "Posts" always
/// carries the active modifier and "Plugins" never does. Real navigation
/// would derive this from a selected-tab state owned by the root.
pub(crate) fn tab_class(active: bool) -> &'static str {
    if active {
        "nav__tab nav__tab--active"
    } else {
        "nav__tab"
    }
}

/// Left navigation sidebar.
///
/// Both buttons increment the shared counter as placeholder navigation;
/// neither tracks which tab is selected yet.
#[component]
pub fn NavSidebar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let on_posts = move |_| ui.update(UiState::record_click);
    let on_plugins = move |_| ui.update(UiState::record_click);

    view! {
        <div class="nav">
            <button class=tab_class(true) on:click=on_posts>
                "Posts"
            </button>
            <button class=tab_class(false) on:click=on_plugins>
                "Plugins"
            </button>
        </div>
    }
}
