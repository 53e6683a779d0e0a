//! Static brand mark rendered from the inlined SVG asset.

use leptos::prelude::*;

/// Vector mark inlined at compile time, same shape the bundler's SVG loader
/// would have produced at build time.
static LOGO_SVG: &str = include_str!("../../assets/logo.svg");

/// Pure presentational brand mark.
///
/// Accepts a styling class and renders the fixed vector image. No state,
/// no failure modes.
#[component]
pub fn Logo(#[prop(into)] class: String) -> impl IntoView {
    view! { <span class=class inner_html=LOGO_SVG></span> }
}
