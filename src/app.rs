//! Dine-Scout Frontend App
//!
//! Top-level component: nav bar plus the four section panels. Shared state
//! (active section, notifications, the restaurant listing) is provided to the
//! tree here.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_toast::create_toast_signals;
use reactive_stores::Store;

use crate::components::{
    NoticeView, RegisterForm, RestaurantList, ReviewForm, SearchFilters, SectionNav,
};
use crate::context::AppContext;
use crate::section::{panel_class, Section};
use crate::store::{reload_restaurants, AppState};

#[component]
pub fn App() -> impl IntoView {
    let (section, set_section) = signal(Section::Restaurants);
    let toasts = create_toast_signals();
    let store = Store::new(AppState::default());

    // Provide context to all children
    provide_context(AppContext::new((section, set_section), toasts));
    provide_context(store);

    // Load the listing on mount
    Effect::new(move |_| {
        spawn_local(async move {
            reload_restaurants(store).await;
        });
    });

    view! {
        <header class="app-header">
            <h1>"Montreal Restaurant Guide"</h1>
            <SectionNav />
        </header>

        <main class="app-main">
            <section
                id=Section::Restaurants.dom_id()
                class=move || panel_class(section.get(), Section::Restaurants)
            >
                <NoticeView />
                <h2>"Restaurants"</h2>
                <RestaurantList />
            </section>

            <section
                id=Section::Search.dom_id()
                class=move || panel_class(section.get(), Section::Search)
            >
                <NoticeView />
                <h2>"Search & Filter"</h2>
                <SearchFilters />
                <RestaurantList />
            </section>

            <section
                id=Section::Reviews.dom_id()
                class=move || panel_class(section.get(), Section::Reviews)
            >
                <NoticeView />
                <h2>"Add Review"</h2>
                <ReviewForm />
            </section>

            <section
                id=Section::Register.dom_id()
                class=move || panel_class(section.get(), Section::Register)
            >
                <NoticeView />
                <h2>"Register"</h2>
                <RegisterForm />
            </section>
        </main>
    }
}
