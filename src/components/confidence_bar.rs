//! Horizontal score bar for per-modality confidences.

use leptos::prelude::*;

use crate::util::format::format_percent;

#[component]
pub fn ConfidenceBar(label: &'static str, value: f32) -> impl IntoView {
    let percent = (value.clamp(0.0, 1.0) * 100.0).round() as i32;
    view! {
        <div class="confidence-bar">
            <div class="confidence-bar__head">
                <span class="confidence-bar__label">{label}</span>
                <span class="confidence-bar__value">{format_percent(value)}</span>
            </div>
            <div class="confidence-bar__track">
                <div class="confidence-bar__fill" style=format!("width: {percent}%")></div>
            </div>
        </div>
    }
}
