//! Summary Card Component

use fitscore_domain::dashboard::SummaryMetric;
use leptos::prelude::*;

use crate::context::use_locale;

/// Headline number with a translated title and subtitle
#[component]
pub fn SummaryCard(metric: SummaryMetric) -> impl IntoView {
    let i18n = use_locale();
    let SummaryMetric { title, value, subtitle, variant } = metric;

    view! {
        <div class=variant.class()>
            <h3 class="summary-card-title">{move || i18n.t(title)}</h3>
            <p class="summary-card-value">{value}</p>
            <p class="summary-card-subtitle">{move || i18n.t(subtitle)}</p>
        </div>
    }
}
