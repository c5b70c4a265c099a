//! Small labeled-value card for stats rows.

use leptos::prelude::*;

#[component]
pub fn StatCard(label: &'static str, value: String, accent: &'static str) -> impl IntoView {
    view! {
        <div class=format!("stat-card stat-card--{accent}")>
            <p class="stat-card__label">{label}</p>
            <p class="stat-card__value">{value}</p>
        </div>
    }
}
