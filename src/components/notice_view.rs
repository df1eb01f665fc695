//! Notice Component
//!
//! Renders the current transient notification, if any. Placed as the first
//! child of every section panel; only the active panel is displayed, so the
//! notice shows up inside the active section.

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn NoticeView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    move || {
        ctx.toasts.current_read.get().map(|toast| {
            view! { <div class=toast.kind.css_class()>{toast.message}</div> }
        })
    }
}
