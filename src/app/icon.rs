use leptos::prelude::*;

use crate::social::Icon;

/// Inline stroked SVG for an [`Icon`], coloured by the surrounding text colour.
#[component]
pub fn IconSvg(
    icon: Icon,
    #[prop(default = "w-5 h-5")] class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            aria-hidden="true"
            data-icon=icon.id()
            inner_html=icon.svg_body()
        ></svg>
    }
}
