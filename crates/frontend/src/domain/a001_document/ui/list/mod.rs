use crate::shared::format::format_upload_date;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a001_document::{seed_documents, Document, DocumentFilter, ProcessingStatus};
use contracts::enums::{DocumentKind, Subject};
use leptos::prelude::*;

fn status_class(status: ProcessingStatus) -> &'static str {
    match status {
        ProcessingStatus::Processed => "badge badge--success",
        ProcessingStatus::Processing => "badge badge--warning",
        ProcessingStatus::Failed => "badge badge--destructive",
    }
}

/// Document library: the seed document set behind a synchronous
/// search/subject/type filter. Recomputed on every keystroke.
#[component]
#[allow(non_snake_case)]
pub fn DocumentLibrary() -> impl IntoView {
    let documents = RwSignal::new(seed_documents());
    let (search_term, set_search_term) = signal(String::new());
    let (selected_subject, set_selected_subject) = signal("all".to_string());
    let (selected_kind, set_selected_kind) = signal("all".to_string());

    // "all" is not a subject/kind code, so from_code maps it to None
    let filtered = move || {
        let filter = DocumentFilter {
            search: search_term.get(),
            subject: Subject::from_code(&selected_subject.get()),
            kind: DocumentKind::from_code(&selected_kind.get()),
        };
        documents.with(|docs| filter.apply(docs))
    };

    let total = move || documents.with(|docs| docs.len());
    let processed = move || {
        documents.with(|docs| {
            docs.iter()
                .filter(|d| d.status == ProcessingStatus::Processed)
                .count()
        })
    };
    let assessments_created =
        move || documents.with(|docs| docs.iter().map(|d| d.assessments).sum::<u32>());

    view! {
        <PageFrame page_id="a001_document--list" category=PAGE_CAT_LIST>
            <div class="header">
                <div class="header__content">
                    <h2 class="header__title">"Document Library"</h2>
                    <p class="header__subtitle">
                        "Manage your uploaded study materials and generated assessments"
                    </p>
                </div>
            </div>

            // Filters
            <div class="card filter-bar">
                <div class="filter-bar__search">
                    <span class="filter-bar__search-icon">{icon("search")}</span>
                    <input
                        type="text"
                        class="input filter-bar__input"
                        placeholder="Search documents, tags, or descriptions..."
                        prop:value=move || search_term.get()
                        on:input=move |ev| set_search_term.set(event_target_value(&ev))
                    />
                </div>

                <select
                    class="select"
                    on:change=move |ev| set_selected_subject.set(event_target_value(&ev))
                >
                    <option value="all">"All Subjects"</option>
                    {Subject::all().into_iter().map(|subject| view! {
                        <option value=subject.code()>{subject.display_name()}</option>
                    }).collect_view()}
                </select>

                <select
                    class="select"
                    on:change=move |ev| set_selected_kind.set(event_target_value(&ev))
                >
                    <option value="all">"All Types"</option>
                    {DocumentKind::all().into_iter().map(|kind| view! {
                        <option value=kind.code()>{kind.display_name()}</option>
                    }).collect_view()}
                </select>
            </div>

            // Library stats
            <div class="stat-grid stat-grid--compact">
                <div class="card stat-card stat-card--center">
                    <div class="stat-card__value">{total}</div>
                    <div class="stat-card__label">"Total Documents"</div>
                </div>
                <div class="card stat-card stat-card--center">
                    <div class="stat-card__value">{processed}</div>
                    <div class="stat-card__label">"Processed"</div>
                </div>
                <div class="card stat-card stat-card--center">
                    <div class="stat-card__value">{assessments_created}</div>
                    <div class="stat-card__label">"Assessments Created"</div>
                </div>
                <div class="card stat-card stat-card--center">
                    <div class="stat-card__value">{Subject::all().len()}</div>
                    <div class="stat-card__label">"Subjects"</div>
                </div>
            </div>

            // Document cards
            <div class="doc-list">
                <For
                    each=filtered
                    key=|doc| doc.id
                    children=move |doc: Document| {
                        view! {
                            <div class="card doc-card">
                                <div class="doc-card__row">
                                    <span class=format!(
                                        "doc-card__kind doc-card__kind--{}",
                                        doc.kind.code(),
                                    )>
                                        {icon("file-text")}
                                    </span>

                                    <div class="doc-card__body">
                                        <div class="doc-card__heading">
                                            <h3 class="doc-card__title">{doc.title.clone()}</h3>
                                            <span class=status_class(doc.status)>
                                                {doc.status.code()}
                                            </span>
                                        </div>

                                        <p class="doc-card__description">{doc.description.clone()}</p>

                                        <div class="doc-card__meta">
                                            <span>{icon("book-open")} {doc.subject.display_name()}</span>
                                            <span>{icon("calendar")} {format_upload_date(doc.upload_date)}</span>
                                            <span>{icon("eye")} {format!("{} views", doc.views)}</span>
                                            <span>{doc.size_label.clone()}</span>
                                        </div>

                                        <div class="doc-card__tags">
                                            {doc.tags.iter().map(|tag| view! {
                                                <span class="badge badge--outline badge--sm">
                                                    {icon("tag")}
                                                    {tag.clone()}
                                                </span>
                                            }).collect_view()}
                                        </div>

                                        {(doc.assessments > 0).then(|| view! {
                                            <div class="doc-card__assessments">
                                                {format!("{} assessment(s) generated", doc.assessments)}
                                            </div>
                                        })}
                                    </div>

                                    // Decorative actions, no handlers in this prototype
                                    <div class="doc-card__actions">
                                        <button class="button button--outline button--sm">
                                            {icon("eye")}
                                            "View"
                                        </button>
                                        <button class="button button--outline button--sm">
                                            {icon("download")}
                                            "Download"
                                        </button>
                                        <button class="button button--outline button--sm button--danger">
                                            {icon("trash")}
                                        </button>
                                    </div>
                                </div>
                            </div>
                        }
                    }
                />
            </div>

            // Empty state
            <Show when=move || filtered().is_empty()>
                <div class="card empty-state">
                    <span class="empty-state__icon">{icon("book-open")}</span>
                    <h3 class="empty-state__title">"No documents found"</h3>
                    <p class="empty-state__text">
                        "Try adjusting your search criteria or upload some documents to get started"
                    </p>
                    // Decorative
                    <button class="button button--primary">
                        {icon("file-text")}
                        "Upload Documents"
                    </button>
                </div>
            </Show>
        </PageFrame>
    }
}
