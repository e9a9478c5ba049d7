//! Application Shell - root layout of the app
//!
//! Contains:
//! - `AppShell` - top navigation plus the active screen's view

use crate::dashboards::d100_overview::ui::dashboard::OverviewDashboard;
use crate::dashboards::d101_study_plan::ui::dashboard::StudyRecommendations;
use crate::domain::a001_document::ui::list::DocumentLibrary;
use crate::layout::global_context::{AppGlobalContext, Screen};
use crate::layout::nav::Navigation;
use crate::shared::toast::ToastHost;
use crate::usecases::u101_upload_documents::view::DocumentUpload;
use crate::usecases::u102_generate_assessment::view::AssessmentGenerator;
use leptos::prelude::*;

/// Main application layout.
///
/// Owns the only cross-component state (the active screen, through
/// `AppGlobalContext`) and initializes router integration for syncing it
/// with the URL (?active=...).
#[component]
pub fn AppShell() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    // Initialize router integration. This runs once when the component is created.
    ctx.init_router_integration();

    let on_change = Callback::new(move |screen: Screen| ctx.activate(screen));

    view! {
        <div class="app-layout">
            <Navigation active=ctx.active.read_only() on_change=on_change />

            <main class="app-main">
                {move || match ctx.active.get() {
                    Screen::Dashboard => view! { <OverviewDashboard /> }.into_any(),
                    Screen::Upload => view! { <DocumentUpload /> }.into_any(),
                    Screen::Assessments => view! { <AssessmentGenerator /> }.into_any(),
                    Screen::Study => view! { <StudyRecommendations /> }.into_any(),
                    Screen::Library => view! { <DocumentLibrary /> }.into_any(),
                }}
            </main>

            <ToastHost />
        </div>
    }
}
