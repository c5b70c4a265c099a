//! Settings page: profile, application, security, and appearance sections.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::app_shell::AppShell;
use crate::state::session::use_session;
use crate::state::settings::{Language, SettingsForm, parse_threshold};
use crate::util::guard::install_unauth_redirect;
use crate::util::notice::blocking_notice;

const SAVE_PENDING: &str =
    "Settings sync is not connected to a backend yet; values apply to this session only.";

#[component]
pub fn SettingsPage() -> impl IntoView {
    let session = use_session();
    install_unauth_redirect(session, use_navigate());

    let form = RwSignal::new(SettingsForm::default());
    let identity = session.current_identity();
    let (username, email, name) = identity
        .map(|i| (i.username, i.email, i.name))
        .unwrap_or_default();

    let on_save = move |_| blocking_notice(SAVE_PENDING);

    view! {
        <AppShell>
            <div class="settings-page">
                <header class="settings-page__header">
                    <div>
                        <h1>"Settings"</h1>
                        <p class="page-subtitle">
                            "Manage your account preferences and application settings"
                        </p>
                    </div>
                    <a href="/dashboard" class="btn">"Back to Dashboard"</a>
                </header>

                <div class="settings-page__grid">
                    <section class="panel">
                        <h2 class="panel__title">"Profile"</h2>
                        <label class="field">
                            "Username"
                            <input class="field__input" type="text" value=username/>
                        </label>
                        <label class="field">
                            "Email"
                            <input class="field__input" type="email" value=email/>
                        </label>
                        <label class="field">
                            "Full Name"
                            <input class="field__input" type="text" value=name/>
                        </label>
                    </section>

                    <section class="panel">
                        <h2 class="panel__title">"Application"</h2>
                        <div class="toggle-row">
                            <div>
                                <p class="toggle-row__label">"Notifications"</p>
                                <p class="toggle-row__hint">"Receive analysis alerts"</p>
                            </div>
                            <button
                                class="btn btn--toggle"
                                on:click=move |_| {
                                    form.update(|f| f.notifications = !f.notifications);
                                }
                            >
                                {move || if form.get().notifications { "On" } else { "Off" }}
                            </button>
                        </div>
                        <div class="toggle-row">
                            <div>
                                <p class="toggle-row__label">"Auto-save Results"</p>
                                <p class="toggle-row__hint">
                                    "Automatically save analysis results"
                                </p>
                            </div>
                            <button
                                class="btn btn--toggle"
                                on:click=move |_| form.update(|f| f.auto_save = !f.auto_save)
                            >
                                {move || if form.get().auto_save { "On" } else { "Off" }}
                            </button>
                        </div>
                        <label class="field">
                            "Confidence Threshold (%)"
                            <input
                                class="field__input"
                                type="number"
                                min="0"
                                max="100"
                                prop:value=move || form.get().confidence_threshold.to_string()
                                on:input=move |ev| {
                                    if let Some(value) = parse_threshold(&event_target_value(&ev)) {
                                        form.update(|f| f.confidence_threshold = value);
                                    }
                                }
                            />
                        </label>
                    </section>

                    <section class="panel">
                        <h2 class="panel__title">"Security & Privacy"</h2>
                        <button class="btn panel__row-btn">"Change Password"</button>
                        <button class="btn panel__row-btn">"Two-Factor Authentication"</button>
                        <button class="btn panel__row-btn">"Download My Data"</button>
                        <button class="btn btn--danger panel__row-btn">"Delete Account"</button>
                    </section>

                    <section class="panel">
                        <h2 class="panel__title">"Appearance"</h2>
                        <div class="toggle-row">
                            <div>
                                <p class="toggle-row__label">"Dark Mode"</p>
                                <p class="toggle-row__hint">"Use dark theme"</p>
                            </div>
                            <button
                                class="btn btn--toggle"
                                on:click=move |_| form.update(|f| f.dark_mode = !f.dark_mode)
                            >
                                {move || if form.get().dark_mode { "On" } else { "Off" }}
                            </button>
                        </div>
                        <label class="field">
                            "Language"
                            <select
                                class="field__input"
                                prop:value=move || form.get().language.code()
                                on:change=move |ev| {
                                    if let Some(lang) = Language::parse(&event_target_value(&ev)) {
                                        form.update(|f| f.language = lang);
                                    }
                                }
                            >
                                {Language::ALL
                                    .into_iter()
                                    .map(|lang| {
                                        view! {
                                            <option value=lang.code()>{lang.label()}</option>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </select>
                        </label>
                    </section>
                </div>

                <div class="settings-page__save">
                    <button class="btn btn--primary" on:click=on_save>
                        "Save All Settings"
                    </button>
                </div>
            </div>
        </AppShell>
    }
}
