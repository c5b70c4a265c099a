//! Guided walkthrough stepping through the pipeline with simulated data.
//!
//! Each step pulls from the mock response table after a short delay, so the
//! demo behaves like a live run without any model backend.

use leptos::prelude::*;

use crate::analysis::FusionReport;
#[cfg(feature = "csr")]
use crate::analysis::{AnalysisProvider, mock::MOCK_PROVIDER};
use crate::util::format::format_percent;

const STEPS: [(&str, u32); 4] = [
    ("Voice Analysis", 2000),
    ("Face Analysis", 2500),
    ("Text Analysis", 2000),
    ("Fusion Processing", 1500),
];

#[component]
pub fn DemoMode(on_complete: Callback<FusionReport>) -> impl IntoView {
    let running = RwSignal::new(false);
    let current_step = RwSignal::new(0_usize);
    let step_scores = RwSignal::new(Vec::<f32>::new());

    let on_run = move |_| {
        if running.get() {
            return;
        }
        running.set(true);
        current_step.set(0);
        step_scores.set(Vec::new());

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            for (index, (_, delay_ms)) in STEPS.iter().enumerate() {
                current_step.set(index);
                crate::util::latency::artificial_delay(*delay_ms).await;
                let confidence = match index {
                    0 => MOCK_PROVIDER.voice("demo").map(|r| r.confidence),
                    1 => MOCK_PROVIDER.face("demo").map(|r| r.confidence),
                    2 => MOCK_PROVIDER.text("demo").map(|r| r.confidence),
                    _ => MOCK_PROVIDER.fusion().map(|r| r.confidence),
                };
                if let Ok(value) = confidence {
                    step_scores.update(|scores| scores.push(value));
                }
            }
            current_step.set(STEPS.len());
            if let Ok(report) = MOCK_PROVIDER.fusion() {
                on_complete.run(report);
            }
            running.set(false);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = on_complete;
            running.set(false);
        }
    };

    view! {
        <div class="demo-mode">
            <h2 class="demo-mode__title">"Demo Mode"</h2>
            <p class="demo-mode__subtitle">
                "Step through the detection pipeline with simulated data"
            </p>
            <Show when=move || !running.get()>
                <button class="btn btn--primary" on:click=on_run>
                    "Start Demo"
                </button>
            </Show>
            <Show when=move || running.get()>
                <ul class="demo-mode__steps">
                    {STEPS
                        .iter()
                        .enumerate()
                        .map(|(index, (name, _))| {
                            let state_class = move || {
                                if current_step.get() > index {
                                    "demo-mode__step demo-mode__step--done"
                                } else if current_step.get() == index {
                                    "demo-mode__step demo-mode__step--active"
                                } else {
                                    "demo-mode__step"
                                }
                            };
                            let score = move || {
                                step_scores
                                    .get()
                                    .get(index)
                                    .map(|value| format_percent(*value))
                            };
                            view! {
                                <li class=state_class>
                                    <span>{*name}</span>
                                    <span class="demo-mode__score">{score}</span>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
            </Show>
        </div>
    }
}
