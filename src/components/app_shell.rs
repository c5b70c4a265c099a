//! Application shell wrapping every authenticated page.

use leptos::prelude::*;

use crate::components::header::Header;
use crate::components::sidebar::Sidebar;
use crate::util::dark_mode;

/// Sidebar + header chrome around page content.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let sidebar_open = RwSignal::new(false);
    let dark = RwSignal::new(dark_mode::read_preference());
    dark_mode::apply(dark.get_untracked());

    view! {
        <div class="app-shell">
            <Sidebar open=sidebar_open/>
            <div class="app-shell__main">
                <Header sidebar_open=sidebar_open dark=dark/>
                <main class="app-shell__content">{children()}</main>
            </div>
        </div>
    }
}
