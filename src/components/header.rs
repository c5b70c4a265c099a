//! Top bar with sidebar toggle, dark-mode toggle, and settings link.

use leptos::prelude::*;

use crate::util::dark_mode;

#[component]
pub fn Header(sidebar_open: RwSignal<bool>, dark: RwSignal<bool>) -> impl IntoView {
    let on_menu = move |_| sidebar_open.update(|open| *open = !*open);
    let on_dark = move |_| dark.set(dark_mode::toggle(dark.get_untracked()));

    view! {
        <header class="topbar">
            <button class="btn btn--icon topbar__menu" on:click=on_menu title="Menu">
                "\u{2630}"
            </button>
            <div class="topbar__actions">
                <button class="btn btn--icon" on:click=on_dark title="Toggle dark mode">
                    {move || if dark.get() { "\u{2600}" } else { "\u{263e}" }}
                </button>
                <a href="/settings" class="btn btn--icon" title="Settings">
                    "\u{2699}"
                </a>
            </div>
        </header>
    }
}
