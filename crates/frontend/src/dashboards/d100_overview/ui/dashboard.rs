//! Overview dashboard - the landing screen.
//!
//! Static render of the learner's headline numbers: stat cards, per-subject
//! progress, recent activities. No state, no actions beyond decorative
//! buttons.

use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use contracts::enums::Subject;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct StatCard {
    label: &'static str,
    value: &'static str,
    change: &'static str,
    icon: &'static str,
}

fn stat_cards() -> Vec<StatCard> {
    vec![
        StatCard {
            label: "Documents Processed",
            value: "24",
            change: "+3 this week",
            icon: "file-text",
        },
        StatCard {
            label: "Assessments Completed",
            value: "18",
            change: "85% avg score",
            icon: "target",
        },
        StatCard {
            label: "Study Streak",
            value: "12 days",
            change: "Personal best!",
            icon: "award",
        },
        StatCard {
            label: "Time Studied",
            value: "2.4h",
            change: "Today",
            icon: "clock",
        },
    ]
}

#[derive(Clone, Debug, PartialEq)]
struct Activity {
    title: &'static str,
    time: &'static str,
    score: Option<&'static str>,
}

fn recent_activities() -> Vec<Activity> {
    vec![
        Activity {
            title: "Biology Chapter 5 Quiz",
            time: "2 hours ago",
            score: Some("92%"),
        },
        Activity {
            title: "Physics Lecture Notes",
            time: "4 hours ago",
            score: None,
        },
        Activity {
            title: "Chemistry Review Session",
            time: "1 day ago",
            score: None,
        },
        Activity {
            title: "Suggested: Mathematics Practice",
            time: "2 days ago",
            score: None,
        },
    ]
}

fn subject_progress() -> Vec<(Subject, u32)> {
    vec![
        (Subject::Biology, 78),
        (Subject::Chemistry, 65),
        (Subject::Physics, 82),
        (Subject::Mathematics, 56),
    ]
}

#[component]
pub fn OverviewDashboard() -> impl IntoView {
    view! {
        <PageFrame page_id="d100_overview--dashboard" category=PAGE_CAT_DASHBOARD>
            // Welcome banner
            <div class="welcome-banner">
                <h2 class="welcome-banner__title">"Welcome back, Alex!"</h2>
                <p class="welcome-banner__text">
                    "You're making great progress. Keep up the excellent work!"
                </p>
                <div class="welcome-banner__actions">
                    // Decorative actions, as in the rest of the prototype
                    <button class="button button--secondary">
                        {icon("book-open")}
                        "Continue Learning"
                    </button>
                    <button class="button button--outline">
                        {icon("trending-up")}
                        "View Progress"
                    </button>
                </div>
            </div>

            // Stat cards
            <div class="stat-grid">
                {stat_cards().into_iter().map(|stat| view! {
                    <div class="card stat-card">
                        <div class="stat-card__header">
                            <span class="stat-card__label">{stat.label}</span>
                            {icon(stat.icon)}
                        </div>
                        <div class="stat-card__value">{stat.value}</div>
                        <div class="stat-card__change">{stat.change}</div>
                    </div>
                }).collect_view()}
            </div>

            <div class="dashboard-columns">
                // Learning progress per subject
                <div class="card dashboard-columns__main">
                    <div class="card__header">
                        <h3 class="card__title">"Learning Progress"</h3>
                        <p class="card__description">"Your progress across different subjects"</p>
                    </div>
                    <div class="card__content">
                        {subject_progress().into_iter().map(|(subject, percent)| view! {
                            <div class="progress-row">
                                <div class="progress-row__labels">
                                    <span class="progress-row__subject">{subject.display_name()}</span>
                                    <span class="progress-row__percent">{format!("{}%", percent)}</span>
                                </div>
                                <div class="progress">
                                    <div
                                        class="progress__bar"
                                        style=format!("width: {}%;", percent)
                                    ></div>
                                </div>
                            </div>
                        }).collect_view()}
                    </div>
                </div>

                // Recent activities
                <div class="card">
                    <div class="card__header">
                        <h3 class="card__title">"Recent Activities"</h3>
                        <p class="card__description">"Your latest learning activities"</p>
                    </div>
                    <div class="card__content">
                        {recent_activities().into_iter().map(|activity| view! {
                            <div class="activity-row">
                                <span class="activity-row__dot"></span>
                                <div class="activity-row__body">
                                    <p class="activity-row__title">{activity.title}</p>
                                    <p class="activity-row__time">{activity.time}</p>
                                    {activity.score.map(|score| view! {
                                        <p class="activity-row__score">{format!("Score: {}", score)}</p>
                                    })}
                                </div>
                            </div>
                        }).collect_view()}
                    </div>
                </div>
            </div>
        </PageFrame>
    }
}
