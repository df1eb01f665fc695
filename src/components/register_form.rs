//! Registration Form Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::AppContext;
use crate::models::NewUser;

#[component]
pub fn RegisterForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (username, set_username) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let user = NewUser {
            username: username.get(),
            email: email.get(),
            password: password.get(),
        };
        if user.username.is_empty() || user.email.is_empty() || user.password.is_empty() {
            ctx.notify_error("Please fill in all fields.");
            return;
        }

        spawn_local(async move {
            match api::users::register(&user).await {
                Ok(created) => {
                    ctx.notify_success(format!(
                        "User registered successfully! User ID: {}",
                        created.id
                    ));
                    set_username.set(String::new());
                    set_email.set(String::new());
                    set_password.set(String::new());
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("Error registering user: {err}").into());
                    ctx.notify_error("Registration failed. Please try again.");
                }
            }
        });
    };

    view! {
        <form class="register-form" on:submit=on_submit>
            <input
                type="text"
                placeholder="Username"
                prop:value=move || username.get()
                on:input=move |ev| set_username.set(event_target_value(&ev))
            />
            <input
                type="email"
                placeholder="Email"
                prop:value=move || email.get()
                on:input=move |ev| set_email.set(event_target_value(&ev))
            />
            <input
                type="password"
                placeholder="Password"
                prop:value=move || password.get()
                on:input=move |ev| set_password.set(event_target_value(&ev))
            />
            <button type="submit">"Register"</button>
        </form>
    }
}
