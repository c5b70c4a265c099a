//! Public marketing landing page.

use leptos::prelude::*;

const FEATURES: [(&str, &str); 3] = [
    ("Voice", "Vocal stress, pitch stability, and speech-pattern cues"),
    ("Face", "Micro-expressions and behavioral cues from live or uploaded video"),
    ("Text", "Linguistic and semantic deception markers in written statements"),
];

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing-page">
            <section class="landing-hero">
                <h1 class="landing-hero__title">"TruthLens"</h1>
                <p class="landing-hero__tagline">
                    "Multi-modal lie detection across voice, face, and text — fused into one verdict."
                </p>
                <div class="landing-hero__actions">
                    <a href="/login" class="btn btn--primary">"Sign In"</a>
                    <a href="/signup" class="btn">"Create Account"</a>
                </div>
            </section>
            <section class="landing-features">
                {FEATURES
                    .into_iter()
                    .map(|(title, blurb)| {
                        view! {
                            <div class="landing-features__card">
                                <h2>{title}</h2>
                                <p>{blurb}</p>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </section>
        </div>
    }
}
