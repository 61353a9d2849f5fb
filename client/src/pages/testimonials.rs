//! Moderation queue for pending testimonials.
//!
//! Both requests carry the stored bearer token; without one the backend
//! rejects them and the rejection surfaces as a notice.

use leptos::prelude::*;

use crate::app::api_handle;
use crate::net::types::Testimonial;
use crate::state::notices::NoticesState;
use crate::state::testimonials::TestimonialsState;

#[component]
pub fn TestimonialsPage() -> impl IntoView {
    let api = api_handle();
    let notices = expect_context::<RwSignal<NoticesState>>();
    let state = RwSignal::new(TestimonialsState { loading: true, ..TestimonialsState::default() });

    #[cfg(feature = "hydrate")]
    {
        let api = api.clone();
        leptos::task::spawn_local(async move {
            let result = crate::state::testimonials::load_pending(api.as_ref()).await;
            let mut items = Vec::new();
            state.update(|s| items = s.finish_load(result));
            crate::components::notice_stack::push_notices(notices, items);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = notices;
    }

    let on_approve = Callback::new(move |testimonial_id: String| {
        let mut started = false;
        state.update(|s| started = s.begin_approve(&testimonial_id));
        if !started {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                let result = crate::state::testimonials::approve(api.as_ref(), &testimonial_id).await;
                let mut items = Vec::new();
                state.update(|s| items = s.finish_approve(&testimonial_id, result));
                crate::components::notice_stack::push_notices(notices, items);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &api;
        }
    });

    view! {
        <div class="testimonials-page">
            <header class="testimonials-page__header">
                <h1>"Pending testimonials"</h1>
            </header>
            <Show
                when=move || !state.with(|s| s.loading)
                fallback=move || view! { <p>"Loading testimonials..."</p> }
            >
                {move || {
                    let pending = state.with(|s| s.pending.clone());
                    if pending.is_empty() {
                        return view! { <p class="testimonials-page__empty">"No testimonials awaiting approval."</p> }
                            .into_any();
                    }
                    view! {
                        <ul class="testimonial-list">
                            {pending
                                .into_iter()
                                .map(|t| testimonial_item(t, state, on_approve))
                                .collect::<Vec<_>>()}
                        </ul>
                    }
                    .into_any()
                }}
            </Show>
        </div>
    }
}

fn testimonial_item(
    testimonial: Testimonial,
    state: RwSignal<TestimonialsState>,
    on_approve: Callback<String>,
) -> impl IntoView {
    let id = testimonial.id.clone();
    let approving_id = testimonial.id.clone();
    let is_approving = move || state.with(|s| s.approving.as_deref() == Some(approving_id.as_str()));
    let rating = testimonial.rating.map(|r| format!("{r}/5"));

    view! {
        <li class="testimonial">
            <strong class="testimonial__name">{testimonial.name.unwrap_or_else(|| "Anonymous".to_owned())}</strong>
            {rating.map(|r| view! { <span class="testimonial__rating">{r}</span> })}
            <p class="testimonial__message">{testimonial.message.unwrap_or_default()}</p>
            <button
                class="btn btn--primary"
                disabled=move || state.with(|s| s.approving.is_some())
                on:click=move |_| on_approve.run(id.clone())
            >
                {move || if is_approving() { "Approving..." } else { "Approve" }}
            </button>
        </li>
    }
}
