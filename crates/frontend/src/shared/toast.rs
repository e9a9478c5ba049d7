use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// How long a toast stays on screen before auto-dismiss
const TOAST_DISMISS_MS: u32 = 4000;

#[derive(Clone, PartialEq)]
pub struct ToastEntry {
    id: u64,
    pub title: String,
    pub description: String,
}

/// Centralized notification stack.
///
/// - `push` shows a toast and schedules its auto-dismiss
/// - Dismissal is deferred through the async queue, so a toast closed from
///   its own click handler is removed on the next tick
#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<Vec<ToastEntry>>,
    next_id: RwSignal<u64>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
        }
    }

    /// Show a toast with a title and a description line.
    pub fn push(&self, title: impl Into<String>, description: impl Into<String>) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        let entry = ToastEntry {
            id,
            title: title.into(),
            description: description.into(),
        };
        self.toasts.update(|toasts| toasts.push(entry));

        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_DISMISS_MS).await;
            svc.dismiss(id);
        });
    }

    pub fn dismiss(&self, id: u64) {
        // try_update: the dismiss timer may outlive the reactive owner
        self.toasts.try_update(|toasts| {
            toasts.retain(|toast| toast.id != id);
        });
    }
}

/// Renders the toast stack at the application root.
///
/// Must be mounted exactly once.
#[component]
pub fn ToastHost() -> impl IntoView {
    let svc = use_context::<ToastService>()
        .expect("ToastService not provided in context (provide it in app root)");

    view! {
        <Show when=move || !svc.toasts.get().is_empty()>
            <div class="toast-stack">
                <For
                    each=move || svc.toasts.get()
                    key=|toast| toast.id
                    children=move |toast: ToastEntry| {
                        let id = toast.id;
                        view! {
                            <div class="toast">
                                <div class="toast__body">
                                    <div class="toast__title">{toast.title.clone()}</div>
                                    <div class="toast__description">{toast.description.clone()}</div>
                                </div>
                                <button
                                    class="toast__close"
                                    on:click=move |_| svc.dismiss(id)
                                >
                                    {crate::shared::icons::icon("x")}
                                </button>
                            </div>
                        }
                    }
                />
            </div>
        </Show>
    }
}
