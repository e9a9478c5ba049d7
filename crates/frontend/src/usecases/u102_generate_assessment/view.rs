use super::service::generate_assessment;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_USECASE;
use crate::shared::toast::ToastService;
use contracts::domain::a002_assessment::{
    seed_assessments, Assessment, AssessmentKind, AssessmentStatus, Difficulty,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

fn status_icon(status: AssessmentStatus) -> &'static str {
    match status {
        AssessmentStatus::Completed => "check-circle",
        AssessmentStatus::Ready => "play",
        AssessmentStatus::Draft => "clock",
    }
}

fn status_class(status: AssessmentStatus) -> &'static str {
    match status {
        AssessmentStatus::Completed => "badge badge--success",
        AssessmentStatus::Ready => "badge badge--primary",
        AssessmentStatus::Draft => "badge badge--warning",
    }
}

fn difficulty_class(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => "badge badge--outline badge--success",
        Difficulty::Medium => "badge badge--outline badge--warning",
        Difficulty::Hard => "badge badge--outline badge--destructive",
    }
}

/// Assessments screen: generation form plus the assessment history.
#[component]
pub fn AssessmentGenerator() -> impl IntoView {
    let assessments = RwSignal::new(seed_assessments());
    let (is_generating, set_is_generating) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");

    // Form state is decorative: the selects hold their values, but the
    // generate action does not read them (matching the source behavior).
    let (selected_document, set_selected_document) = signal(String::new());
    let (selected_kind, set_selected_kind) = signal(String::new());
    let (selected_difficulty, set_selected_difficulty) = signal(String::new());

    let handle_generate = move |_| {
        if is_generating.get_untracked() {
            return;
        }
        set_is_generating.set(true);

        spawn_local(async move {
            match generate_assessment().await {
                Ok(assessment) => {
                    log::info!("assessment generated: '{}'", assessment.title);
                    assessments.try_update(|list| list.insert(0, assessment));
                    set_is_generating.try_update(|value| *value = false);
                    set_error.try_update(|value| *value = None);
                    toasts.push("Assessment Generated!", "Your new quiz is ready to take");
                }
                Err(e) => {
                    // Unreachable with the current simulation
                    log::error!("assessment generation failed: {}", e);
                    set_is_generating.try_update(|value| *value = false);
                    set_error.try_update(|value| *value = Some(e.to_string()));
                }
            }
        });
    };

    view! {
        <PageFrame page_id="u102_generate_assessment--usecase" category=PAGE_CAT_USECASE>
            <div class="header">
                <div class="header__content">
                    <h2 class="header__title">"Assessment Generator"</h2>
                    <p class="header__subtitle">
                        "AI-powered quiz and test generation from your documents"
                    </p>
                </div>
                <div class="header__actions">
                    <button
                        class="button button--primary"
                        class:button--busy=move || is_generating.get()
                        disabled=move || is_generating.get()
                        on:click=handle_generate
                    >
                        {move || if is_generating.get() { icon("brain") } else { icon("plus") }}
                        {move || if is_generating.get() {
                            " Generating..."
                        } else {
                            " Generate Assessment"
                        }}
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! {
                <div class="warning-box">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            // Generation options
            <div class="card">
                <div class="card__header">
                    <h3 class="card__title">"Quick Generate"</h3>
                    <p class="card__description">
                        "Create assessments from your uploaded documents"
                    </p>
                </div>
                <div class="card__content generate-form">
                    <div class="generate-form__field">
                        <label class="generate-form__label">"Document"</label>
                        <select
                            class="select"
                            prop:value=move || selected_document.get()
                            on:change=move |ev| set_selected_document.set(event_target_value(&ev))
                        >
                            <option value="">"Select document"</option>
                            <option value="biology">"Biology Chapter 5"</option>
                            <option value="chemistry">"Chemical Bonding"</option>
                            <option value="physics">"Mechanics"</option>
                            <option value="math">"Algebra Fundamentals"</option>
                        </select>
                    </div>

                    <div class="generate-form__field">
                        <label class="generate-form__label">"Assessment Type"</label>
                        <select
                            class="select"
                            prop:value=move || selected_kind.get()
                            on:change=move |ev| set_selected_kind.set(event_target_value(&ev))
                        >
                            <option value="">"Select type"</option>
                            {AssessmentKind::all().into_iter().map(|kind| view! {
                                <option value=kind.code()>{kind.display_name()}</option>
                            }).collect_view()}
                        </select>
                    </div>

                    <div class="generate-form__field">
                        <label class="generate-form__label">"Difficulty"</label>
                        <select
                            class="select"
                            prop:value=move || selected_difficulty.get()
                            on:change=move |ev| set_selected_difficulty.set(event_target_value(&ev))
                        >
                            <option value="">"Select difficulty"</option>
                            {Difficulty::all().into_iter().map(|difficulty| view! {
                                <option value=difficulty.code()>{difficulty.display_name()}</option>
                            }).collect_view()}
                        </select>
                    </div>
                </div>
            </div>

            // Assessment history
            <div class="assessment-list">
                <For
                    each=move || assessments.get()
                    key=|assessment| assessment.id
                    children=move |assessment: Assessment| {
                        view! {
                            <div class="card assessment-card">
                                <div class="assessment-card__row">
                                    <div class="assessment-card__body">
                                        <div class="assessment-card__heading">
                                            {icon("file-text")}
                                            <h3 class="assessment-card__title">
                                                {assessment.title.clone()}
                                            </h3>
                                            <span class="assessment-card__status-icon">
                                                {icon(status_icon(assessment.status))}
                                            </span>
                                        </div>

                                        <p class="assessment-card__source">
                                            {format!("Based on: {}", assessment.source_document)}
                                        </p>

                                        <div class="assessment-card__meta">
                                            <span class=status_class(assessment.status)>
                                                {assessment.status.code()}
                                            </span>
                                            <span class=difficulty_class(assessment.difficulty)>
                                                {assessment.difficulty.code()}
                                            </span>
                                            <span class="assessment-card__questions">
                                                {format!("{} questions", assessment.questions)}
                                            </span>
                                            <span class="assessment-card__created">
                                                {assessment.created_label.clone()}
                                            </span>
                                        </div>

                                        {assessment.score.map(|score| view! {
                                            <div class="assessment-card__score">
                                                <span>"Last Score: "</span>
                                                <span class="assessment-card__score-value">
                                                    {format!("{}%", score)}
                                                </span>
                                            </div>
                                        })}
                                    </div>

                                    // Decorative actions per status
                                    <div class="assessment-card__actions">
                                        {(assessment.status == AssessmentStatus::Ready).then(|| view! {
                                            <button class="button button--primary button--sm">
                                                {icon("play")}
                                                "Start Quiz"
                                            </button>
                                        })}
                                        {(assessment.status == AssessmentStatus::Completed).then(|| view! {
                                            <button class="button button--outline button--sm">
                                                {icon("target")}
                                                "Review"
                                            </button>
                                        })}
                                    </div>
                                </div>
                            </div>
                        }
                    }
                />
            </div>
        </PageFrame>
    }
}
