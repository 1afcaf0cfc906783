//! Toast stack and the helper forms use to raise notices.
//!
//! TRADE-OFFS
//! ==========
//! Expiry timers exist only in the browser build; elsewhere toasts stay until
//! dismissed by click, which keeps native builds free of timer dependencies.

use leptos::prelude::*;

use crate::state::toast::{Notice, ToastKind, ToastState};

#[cfg(test)]
#[path = "toaster_test.rs"]
mod toaster_test;

fn toast_class(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Success => "toast toast--success",
        ToastKind::Error => "toast toast--error",
    }
}

/// Push `notice` onto the shared queue and schedule its removal.
pub fn notify(toasts: RwSignal<ToastState>, notice: Notice, ttl_ms: u32) {
    if let Some(id) = toasts.try_update(|t| t.push(notice)) {
        schedule_dismiss(toasts, id, ttl_ms);
    }
}

#[cfg(feature = "csr")]
fn schedule_dismiss(toasts: RwSignal<ToastState>, id: u64, ttl_ms: u32) {
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(ttl_ms).await;
        toasts.update(|t| {
            t.dismiss(id);
        });
    });
}

#[cfg(not(feature = "csr"))]
fn schedule_dismiss(_toasts: RwSignal<ToastState>, _id: u64, _ttl_ms: u32) {}

/// Renders the shared toast queue. Click a toast to dismiss it.
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <ol class="toaster" aria-live="polite">
            <For
                each=move || toasts.get().items
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <li
                            class=toast_class(toast.notice.kind)
                            on:click=move |_| toasts.update(|t| {
                                t.dismiss(id);
                            })
                        >
                            {toast.notice.message}
                        </li>
                    }
                }
            />
        </ol>
    }
}
