//! App-level toast stack.
//!
//! Pages raise notifications through `notify`; the `Toaster` mounted by the
//! root component renders whatever is queued in the shared `ToastState`.

use leptos::prelude::*;

use crate::state::toast::{TOAST_LIFETIME_MS, ToastKind, ToastState};

/// Queue a toast and schedule its removal.
pub fn notify(toasts: RwSignal<ToastState>, kind: ToastKind, message: &str) {
    let Some(id) = toasts.try_update(|s| s.push(kind, message)) else {
        return;
    };
    #[cfg(feature = "hydrate")]
    gloo_timers::callback::Timeout::new(TOAST_LIFETIME_MS, move || {
        toasts.update(|s| s.dismiss(id));
    })
    .forget();
    #[cfg(not(feature = "hydrate"))]
    let _ = (id, TOAST_LIFETIME_MS);
}

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toaster" aria-live="polite">
            <For
                each=move || toasts.get().items
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div
                            class=toast.kind.class_name()
                            role="status"
                            on:click=move |_| toasts.update(|s| s.dismiss(id))
                        >
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
