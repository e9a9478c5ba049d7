use super::{PROCESSING_DELAY_MS, UPLOAD_TICK_MAX_PERCENT, UPLOAD_TICK_MS};
use crate::shared::format::format_file_size;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_USECASE;
use crate::shared::toast::ToastService;
use contracts::domain::common::AggregateId;
use contracts::usecases::u101_upload_documents::{
    UploadEvent, UploadId, UploadStatus, UploadedFile,
};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;
use wasm_bindgen::JsCast;

fn file_icon(mime_type: &str) -> (&'static str, &'static str) {
    if mime_type.contains("pdf") {
        ("file", "queue-item__icon--pdf")
    } else if mime_type.contains("image") {
        ("image", "queue-item__icon--image")
    } else {
        ("file-text", "queue-item__icon--plain")
    }
}

fn list_files(list: web_sys::FileList) -> Vec<web_sys::File> {
    (0..list.length()).filter_map(|i| list.item(i)).collect()
}

/// Drive one queued file through the simulated pipeline.
///
/// The timers live here; every transition goes through the contracts
/// state machine. Each file runs its own independent loop, and a file
/// removed from the queue simply stops receiving events.
fn simulate_upload(files: RwSignal<Vec<UploadedFile>>, id: UploadId) {
    spawn_local(async move {
        // Upload phase: random progress increments on a fixed tick
        loop {
            TimeoutFuture::new(UPLOAD_TICK_MS).await;
            let amount = js_sys::Math::random() * UPLOAD_TICK_MAX_PERCENT;
            let status = files.try_update(|queue| {
                queue.iter_mut().find(|f| f.id == id).map(|f| {
                    f.apply(UploadEvent::Tick { amount });
                    f.status
                })
            });
            match status {
                Some(Some(UploadStatus::Uploading)) => continue,
                Some(Some(UploadStatus::Processing)) => break,
                // File removed from the queue, or the screen is gone
                _ => return,
            }
        }

        log::debug!("upload finished, processing file {}", id.as_string());

        // Processing phase: one fixed delay
        TimeoutFuture::new(PROCESSING_DELAY_MS).await;
        let status = files.try_update(|queue| {
            queue.iter_mut().find(|f| f.id == id).map(|f| {
                f.apply(UploadEvent::ProcessingDone);
                f.status
            })
        });
        if matches!(status, Some(Some(UploadStatus::Completed))) {
            log::debug!("processing completed for file {}", id.as_string());
        }
    });
}

/// Upload screen: dropzone plus the processing queue.
#[component]
pub fn DocumentUpload() -> impl IntoView {
    let files = RwSignal::new(Vec::<UploadedFile>::new());
    let (drag_active, set_drag_active) = signal(false);
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");

    let add_files = move |selected: Vec<web_sys::File>| {
        if selected.is_empty() {
            return;
        }
        let count = selected.len();
        let mut ids = Vec::with_capacity(count);
        files.update(|queue| {
            for file in &selected {
                let id = UploadId::new(Uuid::new_v4());
                queue.push(UploadedFile::new(
                    id,
                    file.name(),
                    file.size() as u64,
                    file.type_(),
                ));
                ids.push(id);
            }
        });
        log::info!("{} file(s) queued for upload", count);
        for id in ids {
            simulate_upload(files, id);
        }
        toasts.push(
            "Files Added",
            format!("{} file(s) added for processing", count),
        );
    };

    let remove_file = move |id: UploadId| {
        files.update(|queue| queue.retain(|f| f.id != id));
    };

    let open_picker = move |_| {
        if let Some(window) = web_sys::window() {
            if let Some(document) = window.document() {
                if let Some(input) = document.get_element_by_id("file-input") {
                    if let Ok(input) = input.dyn_into::<web_sys::HtmlElement>() {
                        input.click();
                    }
                }
            }
        }
    };

    view! {
        <PageFrame page_id="u101_upload_documents--usecase" category=PAGE_CAT_USECASE>
            <div class="card">
                <div class="card__header">
                    <h2 class="card__title">"Upload Documents"</h2>
                    <p class="card__description">
                        "Upload your study materials for AI-powered processing and assessment generation"
                    </p>
                </div>
                <div class="card__content">
                    <div
                        class="dropzone"
                        class:dropzone--active=move || drag_active.get()
                        on:dragenter=move |ev: web_sys::DragEvent| {
                            ev.prevent_default();
                            set_drag_active.set(true);
                        }
                        on:dragover=move |ev: web_sys::DragEvent| {
                            ev.prevent_default();
                            set_drag_active.set(true);
                        }
                        on:dragleave=move |ev: web_sys::DragEvent| {
                            ev.prevent_default();
                            set_drag_active.set(false);
                        }
                        on:drop=move |ev: web_sys::DragEvent| {
                            ev.prevent_default();
                            set_drag_active.set(false);
                            let dropped = ev
                                .data_transfer()
                                .and_then(|dt| dt.files())
                                .map(list_files)
                                .unwrap_or_default();
                            add_files(dropped);
                        }
                    >
                        <span class="dropzone__icon">{icon("upload")}</span>
                        <h3 class="dropzone__title">
                            {move || if drag_active.get() {
                                "Drop files here"
                            } else {
                                "Upload your documents"
                            }}
                        </h3>
                        <p class="dropzone__text">
                            "Drag and drop files here, or click to select files"
                        </p>
                        <div class="dropzone__formats">
                            <span>"PDF"</span>
                            <span>"•"</span>
                            <span>"DOCX"</span>
                            <span>"•"</span>
                            <span>"TXT"</span>
                            <span>"•"</span>
                            <span>"Images"</span>
                        </div>
                        <input
                            type="file"
                            id="file-input"
                            style="display: none;"
                            multiple
                            accept=".pdf,.doc,.docx,.txt,.jpg,.jpeg,.png"
                            on:change=move |ev: web_sys::Event| {
                                let input: web_sys::HtmlInputElement =
                                    ev.target().unwrap().dyn_into().unwrap();
                                let selected =
                                    input.files().map(list_files).unwrap_or_default();
                                add_files(selected);
                                // Clear input so the same file can be picked again
                                input.set_value("");
                            }
                        />
                        <button class="button button--primary" on:click=open_picker>
                            {icon("upload")}
                            "Select Files"
                        </button>
                    </div>
                </div>
            </div>

            <Show when=move || !files.get().is_empty()>
                <div class="card">
                    <div class="card__header">
                        <h3 class="card__title">"Processing Queue"</h3>
                        <p class="card__description">
                            {move || {
                                let queue = files.get();
                                let completed = queue
                                    .iter()
                                    .filter(|f| f.status == UploadStatus::Completed)
                                    .count();
                                format!("{} of {} files processed", completed, queue.len())
                            }}
                        </p>
                    </div>
                    <div class="card__content">
                        <For
                            each=move || files.get()
                            key=|file| file.id
                            children=move |file: UploadedFile| {
                                let id = file.id;
                                let (icon_name, icon_class) = file_icon(&file.mime_type);
                                let size_label = format_file_size(file.size_bytes);

                                // Rows are keyed by id, so progress and status
                                // are read live from the queue signal
                                let status = Signal::derive(move || {
                                    files.with(|queue| {
                                        queue
                                            .iter()
                                            .find(|f| f.id == id)
                                            .map(|f| f.status)
                                            .unwrap_or(UploadStatus::Completed)
                                    })
                                });
                                let progress = Signal::derive(move || {
                                    files.with(|queue| {
                                        queue
                                            .iter()
                                            .find(|f| f.id == id)
                                            .map(|f| f.progress)
                                            .unwrap_or(0.0)
                                    })
                                });

                                view! {
                                    <div class="queue-item">
                                        <span class=format!("queue-item__icon {}", icon_class)>
                                            {icon(icon_name)}
                                        </span>
                                        <div class="queue-item__body">
                                            <div class="queue-item__heading">
                                                <span class="queue-item__name">{file.name.clone()}</span>
                                                <button
                                                    class="queue-item__remove"
                                                    on:click=move |_| remove_file(id)
                                                >
                                                    {icon("x")}
                                                </button>
                                            </div>
                                            <div class="queue-item__meta">
                                                <span>{size_label}</span>
                                                <span class="queue-item__status">
                                                    {move || status.get().display_name()}
                                                </span>
                                                <Show when=move || status.get() == UploadStatus::Completed>
                                                    <span class="queue-item__done">{icon("check-circle")}</span>
                                                </Show>
                                            </div>
                                            <Show when=move || status.get() != UploadStatus::Completed>
                                                <div class="progress progress--thin">
                                                    <div
                                                        class="progress__bar"
                                                        style=move || format!(
                                                            "width: {}%;",
                                                            progress.get().round(),
                                                        )
                                                    ></div>
                                                </div>
                                            </Show>
                                        </div>
                                    </div>
                                }
                            }
                        />
                    </div>
                </div>
            </Show>
        </PageFrame>
    }
}
