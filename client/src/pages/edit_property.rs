//! Edit page for a single property, addressed by `/properties/:id/edit`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The record and the tenant list load together; the form only mounts once
//! both arrived, pre-filled from the server copy. A failed load shows an
//! error state with a reload action instead of an empty form.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::app::api_handle;
use crate::components::property_form::PropertyForm;
use crate::net::types::PropertyPayload;
use crate::state::edit_property::{EditPropertyState, PROPERTIES_PATH};
use crate::state::notices::NoticesState;
use crate::state::properties::Operation;
use crate::state::property_form::FormMode;
use crate::util::browser;

#[component]
pub fn EditPropertyPage() -> impl IntoView {
    let api = api_handle();
    let notices = expect_context::<RwSignal<NoticesState>>();
    let params = use_params_map();
    let property_id = params.read_untracked().get("id").unwrap_or_default();
    let state = RwSignal::new(EditPropertyState::default());

    let mut loading = false;
    state.update(|s| loading = s.begin(Operation::Loading));

    #[cfg(feature = "hydrate")]
    {
        if loading {
            let api = api.clone();
            let property_id = property_id.clone();
            leptos::task::spawn_local(async move {
                let result = crate::state::edit_property::load_property(api.as_ref(), &property_id).await;
                let mut items = Vec::new();
                state.update(|s| items = s.finish_load(result));
                crate::components::notice_stack::push_notices(notices, items);
            });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (loading, notices);
    }

    let on_submit = Callback::new(move |payload: PropertyPayload| {
        let mut started = false;
        state.update(|s| started = s.begin(Operation::Updating));
        if !started {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            let property_id = property_id.clone();
            leptos::task::spawn_local(async move {
                let result = crate::state::edit_property::update_property(api.as_ref(), &property_id, &payload).await;
                let mut items = Vec::new();
                state.update(|s| items = s.finish_update(result));
                crate::components::notice_stack::push_notices(notices, items);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&api, &property_id, payload);
        }
    });

    let busy = Signal::derive(move || state.with(EditPropertyState::is_busy));
    let tenants = Signal::derive(move || state.with(|s| s.tenants.clone()));
    // Memos keep the form mounted across later record and busy updates.
    let load_error = Memo::new(move |_| state.with(|s| s.load_error.clone()));
    let loaded = Memo::new(move |_| state.with(EditPropertyState::is_loaded));

    view! {
        <div class="edit-property-page">
            <header class="edit-property-page__header">
                <a class="btn" href=PROPERTIES_PATH>
                    "Back to list"
                </a>
                <h1>"Edit property"</h1>
            </header>
            {move || {
                if let Some(error) = load_error.get() {
                    return view! {
                        <div class="edit-property-page__error">
                            <p>"The property could not be loaded."</p>
                            <p class="edit-property-page__error-detail">{error}</p>
                            <button class="btn" on:click=move |_| browser::reload_page()>
                                "Retry"
                            </button>
                        </div>
                    }
                    .into_any();
                }
                let record = if loaded.get() { state.with_untracked(|s| s.record.clone()) } else { None };
                match record {
                    Some(record) => {
                        view! { <PropertyForm mode=FormMode::Edit initial=record tenants busy on_submit /> }.into_any()
                    }
                    None => view! { <p class="edit-property-page__loading">"Loading property..."</p> }.into_any(),
                }
            }}
        </div>
    }
}
