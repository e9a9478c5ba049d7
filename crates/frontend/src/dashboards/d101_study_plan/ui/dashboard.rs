//! Study recommendations screen.
//!
//! Static render of the recommended plan and weak areas from the seed set.
//! "AI-powered" is a label only; nothing here computes anything.

use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use contracts::domain::a003_study_plan::{
    seed_study_plan, seed_weak_areas, ActivityKind, Priority,
};
use leptos::prelude::*;

fn activity_icon(kind: ActivityKind) -> &'static str {
    match kind {
        ActivityKind::Review => "book-open",
        ActivityKind::Practice => "target",
        ActivityKind::Assessment => "brain",
        ActivityKind::NewTopic => "star",
    }
}

fn priority_class(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "badge badge--destructive",
        Priority::Medium => "badge badge--warning",
        Priority::Low => "badge badge--success",
    }
}

fn confidence_class(confidence: u32) -> &'static str {
    if confidence < 50 {
        "weak-area__confidence--low"
    } else if confidence < 70 {
        "weak-area__confidence--medium"
    } else {
        "weak-area__confidence--high"
    }
}

#[component]
pub fn StudyRecommendations() -> impl IntoView {
    let plan = seed_study_plan();
    let weak_areas = seed_weak_areas();

    view! {
        <PageFrame page_id="d101_study_plan--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="header">
                <div class="header__content">
                    <h2 class="header__title">"AI Study Recommendations"</h2>
                    <p class="header__subtitle">
                        "Personalized learning path based on your performance and progress"
                    </p>
                </div>
            </div>

            // Today's focus banner
            <div class="card focus-banner">
                <div class="card__header">
                    <h3 class="card__title">{icon("brain")} " Today's Focus"</h3>
                    <p class="card__description">"Recommended activities for optimal learning"</p>
                </div>
                <div class="focus-banner__stats">
                    <div class="focus-banner__stat">
                        <div class="focus-banner__value">"2.5h"</div>
                        <div class="focus-banner__label">"Recommended Study Time"</div>
                    </div>
                    <div class="focus-banner__stat">
                        <div class="focus-banner__value">"4"</div>
                        <div class="focus-banner__label">"Priority Topics"</div>
                    </div>
                    <div class="focus-banner__stat">
                        <div class="focus-banner__value">"85%"</div>
                        <div class="focus-banner__label">"Success Prediction"</div>
                    </div>
                </div>
            </div>

            <div class="dashboard-columns">
                // Recommended study plan
                <div class="dashboard-columns__main">
                    <h3 class="section-title">"Recommended Study Plan"</h3>
                    {plan.into_iter().map(|item| view! {
                        <div class="card plan-card">
                            <div class="plan-card__row">
                                <span class="plan-card__icon">{icon(activity_icon(item.kind))}</span>
                                <div class="plan-card__body">
                                    <div class="plan-card__heading">
                                        <h4 class="plan-card__title">{item.title.clone()}</h4>
                                        <span class=priority_class(item.priority)>
                                            {item.priority.code()}
                                        </span>
                                    </div>
                                    <p class="plan-card__description">{item.description.clone()}</p>
                                    <div class="plan-card__meta">
                                        <span class="plan-card__time">
                                            {icon("clock")}
                                            {item.estimated_time.clone()}
                                        </span>
                                        <span>{item.subject.display_name()}</span>
                                    </div>
                                </div>
                                // Decorative
                                <button class="button button--primary button--sm">
                                    "Start"
                                    {icon("arrow-right")}
                                </button>
                            </div>
                            {(item.progress > 0).then(|| view! {
                                <div class="plan-card__progress">
                                    <div class="progress-row__labels">
                                        <span>"Progress"</span>
                                        <span>{format!("{}%", item.progress)}</span>
                                    </div>
                                    <div class="progress progress--thin">
                                        <div
                                            class="progress__bar"
                                            style=format!("width: {}%;", item.progress)
                                        ></div>
                                    </div>
                                </div>
                            })}
                        </div>
                    }).collect_view()}
                </div>

                // Weak areas + streak
                <div>
                    <h3 class="section-title">"Areas for Improvement"</h3>

                    <div class="card">
                        <div class="card__header">
                            <h4 class="card__title">{icon("trending-up")} " Focus Areas"</h4>
                        </div>
                        <div class="card__content">
                            {weak_areas.into_iter().map(|area| view! {
                                <div class="weak-area">
                                    <div class="weak-area__heading">
                                        <div>
                                            <h5 class="weak-area__topic">{area.topic.clone()}</h5>
                                            <p class="weak-area__subject">{area.subject.display_name()}</p>
                                        </div>
                                        <span class="badge badge--outline">
                                            {format!("{}%", area.last_score)}
                                        </span>
                                    </div>
                                    <div class="weak-area__confidence">
                                        <div class="progress-row__labels">
                                            <span>"Confidence"</span>
                                            <span class=confidence_class(area.confidence)>
                                                {format!("{}%", area.confidence)}
                                            </span>
                                        </div>
                                        <div class="progress progress--thin">
                                            <div
                                                class="progress__bar"
                                                style=format!("width: {}%;", area.confidence)
                                            ></div>
                                        </div>
                                    </div>
                                    <p class="weak-area__action">{area.recommended_action.clone()}</p>
                                </div>
                            }).collect_view()}
                        </div>
                    </div>

                    <div class="card streak-card">
                        <div class="card__header">
                            <h4 class="card__title">"Learning Streak"</h4>
                        </div>
                        <div class="card__content streak-card__content">
                            <div class="streak-card__days">"12"</div>
                            <p class="streak-card__label">"Days in a row"</p>
                            // Decorative
                            <button class="button button--outline button--sm">
                                {icon("star")}
                                "Keep it going!"
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        </PageFrame>
    }
}
