//! Contact page with a feedback form.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::app_shell::AppShell;
use crate::state::session::use_session;
use crate::util::guard::install_unauth_redirect;
use crate::util::notice::blocking_notice;

const FEEDBACK_PENDING: &str =
    "Feedback submission is not connected to a backend yet. Your message was not sent.";

#[component]
pub fn ContactPage() -> impl IntoView {
    let session = use_session();
    install_unauth_redirect(session, use_navigate());

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        blocking_notice(FEEDBACK_PENDING);
    };

    view! {
        <AppShell>
            <div class="static-page">
                <h1>"Contact"</h1>
                <p>"Questions, feedback, or partnership inquiries — send us a note."</p>
                <form class="contact-form" on:submit=on_submit>
                    <input
                        class="field__input"
                        type="text"
                        placeholder="Your name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <input
                        class="field__input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <textarea
                        class="field__input contact-form__message"
                        placeholder="Your message"
                        prop:value=move || message.get()
                        on:input=move |ev| message.set(event_target_value(&ev))
                    ></textarea>
                    <button class="btn btn--primary" type="submit">
                        "Send Message"
                    </button>
                </form>
            </div>
        </AppShell>
    }
}
