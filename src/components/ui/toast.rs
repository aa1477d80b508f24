//! Auto-dismissing toast notifications for CRUD outcomes. The provider owns
//! the stack and exposes it through context; `show` schedules removal so
//! toasts never outlive their welcome.

use leptos::prelude::*;

/// How long a toast stays on screen.
const DISMISS_AFTER_MS: u32 = 3_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
}

#[derive(Clone, Copy)]
pub struct ToastContext {
    toasts: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u64>,
}

impl ToastContext {
    fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(0),
        }
    }

    /// Appends a toast and returns its id.
    fn push(&self, message: impl Into<String>, kind: ToastKind) -> u64 {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.toasts.update(|toasts| {
            toasts.push(Toast {
                id,
                message: message.into(),
                kind,
            });
        });
        id
    }

    /// Removes a toast by id; unknown ids are ignored.
    fn dismiss(&self, id: u64) {
        self.toasts.update(|toasts| toasts.retain(|toast| toast.id != id));
    }

    /// Shows a toast and schedules its removal.
    pub fn show(&self, message: impl Into<String>, kind: ToastKind) {
        let id = self.push(message, kind);
        #[cfg(target_arch = "wasm32")]
        {
            let context = *self;
            gloo_timers::callback::Timeout::new(DISMISS_AFTER_MS, move || context.dismiss(id))
                .forget();
        }
        #[cfg(not(target_arch = "wasm32"))]
        let _ = id;
    }
}

/// Provides the toast context and renders the stack above the app.
#[component]
pub fn ToastProvider(children: Children) -> impl IntoView {
    let context = ToastContext::new();
    provide_context(context);

    view! {
        {children()}
        <ToastHost />
    }
}

/// Returns the toast context or a detached fallback stack.
pub fn use_toasts() -> ToastContext {
    use_context::<ToastContext>().unwrap_or_else(ToastContext::new)
}

#[component]
fn ToastHost() -> impl IntoView {
    let context = use_toasts();
    let toasts = move || context.toasts.get();

    view! {
        <div class="fixed bottom-4 right-4 z-50 flex flex-col gap-2" aria-live="polite">
            <For each=toasts key=|toast| toast.id children=|toast| view! { <ToastCard toast=toast /> } />
        </div>
    }
}

#[component]
fn ToastCard(toast: Toast) -> impl IntoView {
    let class = match toast.kind {
        ToastKind::Success => {
            "rounded-lg border border-emerald-200 bg-emerald-50 px-4 py-3 text-sm text-emerald-700 shadow-lg dark:border-emerald-400 dark:bg-emerald-900/80 dark:text-emerald-200"
        }
        ToastKind::Error => {
            "rounded-lg border border-red-200 bg-red-50 px-4 py-3 text-sm text-red-700 shadow-lg dark:border-red-400 dark:bg-red-900/80 dark:text-red-200"
        }
        ToastKind::Info => {
            "rounded-lg border border-blue-200 bg-blue-50 px-4 py-3 text-sm text-blue-700 shadow-lg dark:border-blue-400 dark:bg-blue-900/80 dark:text-blue-200"
        }
    };

    view! { <div class=class role="status">{toast.message}</div> }
}

#[cfg(test)]
mod tests {
    use super::{ToastContext, ToastKind};
    use leptos::prelude::GetUntracked;

    #[test]
    fn push_assigns_increasing_ids_and_dismiss_removes() {
        let context = ToastContext::new();
        let first = context.push("Product added Successfully", ToastKind::Success);
        let second = context.push("Failed to delete product", ToastKind::Error);
        assert!(second > first);
        assert_eq!(context.toasts.get_untracked().len(), 2);

        context.dismiss(first);
        let remaining = context.toasts.get_untracked();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, second);

        // unknown ids are ignored
        context.dismiss(first);
        assert_eq!(context.toasts.get_untracked().len(), 1);
    }
}
