//! Dashboard Page
//!
//! Summary cards, score distribution and weekly trends over sample data.

use fitscore_domain::dashboard::{bar_percent, score_distribution, summary_metrics, weekly_trends};
use leptos::prelude::*;

use crate::components::{LanguageSwitcher, Logo, SummaryCard};
use crate::context::use_locale;
use crate::store::{store_navigate, use_app_store, Page};

#[component]
fn ScoreDistribution() -> impl IntoView {
    let i18n = use_locale();
    let buckets = score_distribution();
    let max = buckets.iter().map(|b| b.count).max().unwrap_or(0);

    view! {
        <section class="chart-card">
            <h3>{move || i18n.t("dashboard.scoreDistribution")}</h3>
            {buckets
                .into_iter()
                .map(|bucket| {
                    let width = format!("width: {:.1}%", bar_percent(bucket.count, max));
                    let count = bucket.count;
                    view! {
                        <div class="bar-row">
                            <span class="bar-label">{bucket.label()}</span>
                            <div class="bar-track">
                                <div class="bar-fill" style=width></div>
                            </div>
                            <span class="bar-value">
                                {move || i18n.t_with("dashboard.candidates", &[("count", &count.to_string())])}
                            </span>
                        </div>
                    }
                })
                .collect_view()}
        </section>
    }
}

#[component]
fn WeeklyTrends() -> impl IntoView {
    let i18n = use_locale();

    view! {
        <section class="chart-card">
            <h3>{move || i18n.t("dashboard.weeklyTrends")}</h3>
            <table class="data-table">
                <thead>
                    <tr>
                        <th></th>
                        <th>{move || i18n.t("dashboard.avgScore")}</th>
                        <th>{move || i18n.t("dashboard.hired")}</th>
                    </tr>
                </thead>
                <tbody>
                    {weekly_trends()
                        .into_iter()
                        .map(|trend| {
                            let week = trend.week.to_string();
                            let width = format!("width: {}%", trend.avg_score);
                            view! {
                                <tr>
                                    <td>{move || i18n.t_with("dashboard.week", &[("n", &week)])}</td>
                                    <td>
                                        <div class="bar-track">
                                            <div class="bar-fill" style=width></div>
                                        </div>
                                        <span class="bar-value">{trend.avg_score}</span>
                                    </td>
                                    <td>{trend.hired}</td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </section>
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let i18n = use_locale();
    let store = use_app_store();

    view! {
        <div class="dashboard">
            <header class="page-header">
                <Logo />
                <LanguageSwitcher />
            </header>
            <main class="dashboard-main">
                <div class="dashboard-heading">
                    <div>
                        <h1>{move || i18n.t("dashboard.title")}</h1>
                        <p>{move || i18n.t("dashboard.subtitle")}</p>
                    </div>
                    <div class="header-actions">
                        <button
                            class="btn btn-outline"
                            on:click=move |_| store_navigate(&store, Page::Onboarding)
                        >
                            {move || i18n.t("nav.recalibrateModel")}
                        </button>
                        <button class="btn btn-primary" disabled=true>
                            {move || i18n.t("nav.scoreNewCandidate")}
                        </button>
                    </div>
                </div>
                <div class="summary-cards">
                    {summary_metrics()
                        .into_iter()
                        .map(|metric| view! { <SummaryCard metric=metric /> })
                        .collect_view()}
                </div>
                <div class="charts">
                    <ScoreDistribution />
                    <WeeklyTrends />
                </div>
            </main>
        </div>
    }
}
