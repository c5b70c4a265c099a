//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::analysis::ProviderHandle;
use crate::analysis::pending::PENDING_PROVIDER;
use crate::pages::{
    about::AboutPage, contact::ContactPage, dashboard::DashboardPage, face::FaceAnalysisPage,
    faq::FaqPage, fusion::FusionDashboardPage, how_it_works::HowItWorksPage, landing::LandingPage,
    login::LoginPage, reports::ReportsPage, settings::SettingsPage, signup::SignupPage,
    text::TextAnalysisPage, voice::VoiceAnalysisPage,
};
use crate::state::session::{LocalSessionStore, SessionService};

/// Root application component.
///
/// Injects the session service and the analysis provider, then sets up
/// client-side routing. Swap the provider here once a model backend exists.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // localStorage is synchronous, so restore finishes before the first
    // route renders and guards never see a half-loaded session.
    let session = SessionService::new(LocalSessionStore);
    session.restore();
    provide_context(session);

    provide_context(ProviderHandle(&PENDING_PROVIDER));

    view! {
        <Stylesheet id="leptos" href="/style.css"/>
        <Title text="TruthLens"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LandingPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=StaticSegment("voice-analysis") view=VoiceAnalysisPage/>
                <Route path=StaticSegment("face-analysis") view=FaceAnalysisPage/>
                <Route path=StaticSegment("text-analysis") view=TextAnalysisPage/>
                <Route path=StaticSegment("fusion-dashboard") view=FusionDashboardPage/>
                <Route path=StaticSegment("reports") view=ReportsPage/>
                <Route path=StaticSegment("settings") view=SettingsPage/>
                <Route path=StaticSegment("about") view=AboutPage/>
                <Route path=StaticSegment("how-it-works") view=HowItWorksPage/>
                <Route path=StaticSegment("faq") view=FaqPage/>
                <Route path=StaticSegment("contact") view=ContactPage/>
            </Routes>
        </Router>
    }
}
