//! Toast-style stack for transient notices.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages push notices through `push_notices`; this component renders them
//! and runs their follow-up actions (reload, navigate, focus field).

use leptos::prelude::*;

use crate::state::notices::{Notice, NoticeAction, NoticeTone, NoticesState};
use crate::util::browser;

/// Push notices and schedule their removal after `NOTICE_TTL_MS`.
pub fn push_notices(notices: RwSignal<NoticesState>, items: Vec<Notice>) {
    if items.is_empty() {
        return;
    }
    #[cfg(feature = "hydrate")]
    let ids: Vec<String> = items.iter().map(|n| n.id.clone()).collect();
    notices.update(|s| s.extend(items));

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(crate::state::notices::NOTICE_TTL_MS)).await;
        notices.update(|s| {
            for id in &ids {
                s.dismiss(id);
            }
        });
    });
}

fn tone_class(tone: NoticeTone) -> &'static str {
    match tone {
        NoticeTone::Success => "notice notice--success",
        NoticeTone::Error => "notice notice--error",
    }
}

#[component]
pub fn NoticeStack() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticesState>>();

    // Navigation renders as a link so the router handles it client-side.
    let run_action = Callback::new(move |(id, action): (String, NoticeAction)| {
        match action {
            NoticeAction::Retry => browser::reload_page(),
            NoticeAction::Navigate { .. } => {}
            NoticeAction::FocusField(field) => browser::focus_element(field.key()),
        }
        notices.update(|s| s.dismiss(&id));
    });

    view! {
        <div class="notice-stack" role="status" aria-live="polite">
            {move || {
                notices
                    .get()
                    .items
                    .into_iter()
                    .map(|notice| {
                        let dismiss_id = notice.id.clone();
                        let action_id = notice.id.clone();
                        let action = notice.action.clone();
                        view! {
                            <div class=tone_class(notice.tone)>
                                <strong class="notice__title">{notice.title}</strong>
                                <p class="notice__body">{notice.body}</p>
                                {action.map(|action| {
                                    let label = action.label().to_owned();
                                    if let NoticeAction::Navigate { path, .. } = &action {
                                        let path = path.clone();
                                        return view! {
                                            <a
                                                class="btn notice__action"
                                                href=path
                                                on:click=move |_| run_action.run((action_id.clone(), action.clone()))
                                            >
                                                {label}
                                            </a>
                                        }
                                            .into_any();
                                    }
                                    view! {
                                        <button
                                            class="btn notice__action"
                                            on:click=move |_| run_action.run((action_id.clone(), action.clone()))
                                        >
                                            {label}
                                        </button>
                                    }
                                        .into_any()
                                })}
                                <button
                                    class="notice__close"
                                    title="Dismiss"
                                    aria-label="Dismiss"
                                    on:click=move |_| notices.update(|s| s.dismiss(&dismiss_id))
                                >
                                    "✕"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
