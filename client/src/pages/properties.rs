//! Property list page with inline create form and row deletion.
//!
//! SYSTEM CONTEXT
//! ==============
//! Loads properties and tenants once on mount, then reconciles the in-memory
//! snapshot from server confirmations only. List and form are mutually
//! exclusive halves of the page. The create form stays mounted while hidden
//! so its draft survives toggling and a confirmed create clears it through
//! `form_reset_seq`.

use leptos::prelude::*;

use crate::app::api_handle;
use crate::components::property_form::PropertyForm;
use crate::components::property_list::PropertyList;
use crate::net::types::PropertyPayload;
use crate::state::notices::NoticesState;
use crate::state::properties::{Operation, PageMode, PropertiesState};
use crate::state::property_form::FormMode;

#[component]
pub fn PropertiesPage() -> impl IntoView {
    let api = api_handle();
    let notices = expect_context::<RwSignal<NoticesState>>();
    let state = RwSignal::new(PropertiesState::default());

    let mut loading = false;
    state.update(|s| loading = s.begin(Operation::Loading));

    #[cfg(feature = "hydrate")]
    {
        if loading {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                let result = crate::state::properties::load_catalog(api.as_ref()).await;
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

    let on_create = Callback::new({
        let api = api.clone();
        move |payload: PropertyPayload| {
            let mut started = false;
            state.update(|s| started = s.begin(Operation::Creating));
            if !started {
                return;
            }
            #[cfg(feature = "hydrate")]
            {
                let api = api.clone();
                leptos::task::spawn_local(async move {
                    let result = crate::state::properties::create_property(api.as_ref(), &payload).await;
                    let mut items = Vec::new();
                    state.update(|s| items = s.finish_create(result));
                    crate::components::notice_stack::push_notices(notices, items);
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&api, payload);
            }
        }
    });

    let on_delete = Callback::new(move |property_id: String| {
        let mut started = false;
        state.update(|s| started = s.begin(Operation::Deleting(property_id.clone())));
        if !started {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                let result = crate::state::properties::delete_property(api.as_ref(), &property_id).await;
                let mut items = Vec::new();
                state.update(|s| items = s.finish_delete(&property_id, result));
                crate::components::notice_stack::push_notices(notices, items);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &api;
        }
    });

    let busy = Signal::derive(move || state.with(PropertiesState::is_busy));
    let collection = Signal::derive(move || state.with(|s| s.collection.clone()));
    let tenants = Signal::derive(move || state.with(|s| s.tenants.clone()));
    let reset_seq = Signal::derive(move || state.with(|s| s.form_reset_seq));
    let deleting = Signal::derive(move || match state.with(|s| s.operation.clone()) {
        Operation::Deleting(id) => Some(id),
        _ => None,
    });
    let loading = Signal::derive(move || state.with(|s| s.operation == Operation::Loading));
    let form_open = move || state.with(|s| s.mode == PageMode::FormOpen);

    view! {
        <div class="properties-page">
            <header class="properties-page__header">
                <h1>"Properties"</h1>
                <button class="btn btn--primary" on:click=move |_| state.update(PropertiesState::toggle_mode)>
                    {move || if form_open() { "Back to list" } else { "Add property" }}
                </button>
            </header>
            <Show when=move || loading.get()>
                <p class="properties-page__loading">"Loading properties..."</p>
            </Show>
            <Show when=move || !form_open()>
                <PropertyList collection loading busy deleting on_delete />
            </Show>
            <div class="properties-page__form" hidden=move || !form_open()>
                <PropertyForm
                    mode=FormMode::Create
                    tenants
                    busy
                    reset_seq
                    on_submit=on_create
                    on_cancel=Callback::new(move |()| state.update(PropertiesState::toggle_mode))
                />
            </div>
        </div>
    }
}
