//! Navigation component - application top bar.
//!
//! Contains:
//! - Brand block with logo and product name
//! - One button per screen
//! - Decorative settings button

use crate::layout::global_context::Screen;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct NavItem {
    screen: Screen,
    label: &'static str,
    icon: &'static str,
}

fn nav_items() -> Vec<NavItem> {
    vec![
        NavItem {
            screen: Screen::Dashboard,
            label: "Dashboard",
            icon: "bar-chart",
        },
        NavItem {
            screen: Screen::Upload,
            label: "Upload Documents",
            icon: "upload",
        },
        NavItem {
            screen: Screen::Assessments,
            label: "Assessments",
            icon: "file-text",
        },
        NavItem {
            screen: Screen::Study,
            label: "Study Plan",
            icon: "brain",
        },
        NavItem {
            screen: Screen::Library,
            label: "Library",
            icon: "book-open",
        },
    ]
}

/// Top navigation bar.
///
/// Owns no state: receives the active screen as a reactive value and
/// reports selections through `on_change`.
#[component]
pub fn Navigation(active: ReadSignal<Screen>, on_change: Callback<Screen>) -> impl IntoView {
    view! {
        <nav class="top-header">
            <div class="top-header__brand">
                <span class="top-header__logo">{icon("brain")}</span>
                <span class="top-header__title">"AdaptLearn"</span>
            </div>

            <div class="top-header__nav">
                {nav_items()
                    .into_iter()
                    .map(|item| {
                        let screen = item.screen;
                        view! {
                            <button
                                class="top-header__nav-btn"
                                class:top-header__nav-btn--active=move || active.get() == screen
                                on:click=move |_| on_change.run(screen)
                            >
                                {icon(item.icon)}
                                <span class="top-header__nav-label">{item.label}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="top-header__actions">
                // Decorative: the prototype has no settings screen
                <button class="top-header__icon-btn" title="Settings">
                    {icon("settings")}
                </button>
            </div>
        </nav>
    }
}
