use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use std::sync::Arc;
use wasm_bindgen_futures::spawn_local;

/// Kind of a notice, decides styling and dismissal
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NoticeKind {
    Success,
    Error,
    Info,
}

/// Optional action button on a notice (e.g. retry of failed rows)
#[derive(Clone)]
pub struct NoticeAction {
    pub label: String,
    pub run: Arc<dyn Fn() + Send + Sync>,
}

#[derive(Clone)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub message: String,
    pub action: Option<NoticeAction>,
}

/// How long success and info notices stay up
const AUTO_DISMISS_MS: u32 = 6_000;

/// Toast notification service.
///
/// Success and info notices dismiss themselves; errors stay until closed
/// so a failure is never missed.
#[derive(Clone, Copy)]
pub struct NotifyService {
    notices: RwSignal<Vec<Notice>>,
    next_id: RwSignal<u64>,
}

impl NotifyService {
    pub fn new() -> Self {
        Self {
            notices: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
        }
    }

    fn push(&self, kind: NoticeKind, message: String, action: Option<NoticeAction>) {
        let id = self.next_id.get();
        self.next_id.set(id + 1);

        self.notices.update(|n| {
            n.push(Notice {
                id,
                kind,
                message,
                action,
            });
        });

        if kind != NoticeKind::Error {
            let svc = *self;
            spawn_local(async move {
                TimeoutFuture::new(AUTO_DISMISS_MS).await;
                svc.dismiss(id);
            });
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(NoticeKind::Success, message.into(), None);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(NoticeKind::Info, message.into(), None);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(NoticeKind::Error, message.into(), None);
    }

    /// Error notice with an action button, used for scoped retries
    pub fn error_with_action(
        &self,
        message: impl Into<String>,
        label: impl Into<String>,
        run: impl Fn() + Send + Sync + 'static,
    ) {
        let action = NoticeAction {
            label: label.into(),
            run: Arc::new(run),
        };
        self.push(NoticeKind::Error, message.into(), Some(action));
    }

    pub fn dismiss(&self, id: u64) {
        self.notices.update(|n| {
            n.retain(|notice| notice.id != id);
        });
    }
}

fn notice_class(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::Success => "alert alert--success",
        NoticeKind::Error => "alert alert--error",
        NoticeKind::Info => "alert alert--info",
    }
}

/// Renders the toast stack at the application root.
///
/// Must be mounted exactly once.
#[component]
pub fn NotifyHost() -> impl IntoView {
    let svc = use_context::<NotifyService>()
        .expect("NotifyService not provided in context (provide it in app root)");

    view! {
        <div class="notify-stack">
            <For
                each=move || svc.notices.get()
                key=|notice| notice.id
                children=move |notice| {
                    let id = notice.id;
                    let action = notice.action.clone();

                    view! {
                        <div class=notice_class(notice.kind)>
                            <span class="alert__message">{notice.message.clone()}</span>
                            {action.map(|action| {
                                let run = action.run.clone();
                                view! {
                                    <button
                                        class="alert__action"
                                        on:click=move |_| {
                                            run();
                                            svc.dismiss(id);
                                        }
                                    >
                                        {action.label.clone()}
                                    </button>
                                }
                            })}
                            <button
                                class="alert__close"
                                on:click=move |_| svc.dismiss(id)
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
