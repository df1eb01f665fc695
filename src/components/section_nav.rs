//! Section Navigation Component
//!
//! Nav bar for switching between the top-level sections.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::section::{nav_class, Section};

#[component]
pub fn SectionNav() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <nav class="nav-bar">
            {Section::ALL
                .into_iter()
                .map(|section| {
                    view! {
                        <button
                            class=move || nav_class(ctx.section.get(), section)
                            on:click=move |_| ctx.activate(section)
                        >
                            {section.label()}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
