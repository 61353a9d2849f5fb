//! Read-only view of one property, addressed by `/properties/:id`.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::app::api_handle;
use crate::net::types::PropertyRecord;
use crate::state::edit_property::{EditPropertyState, PROPERTIES_PATH};
use crate::state::notices::NoticesState;
use crate::state::properties::Operation;
use crate::util::browser;
use crate::util::property_display::{NOT_SPECIFIED, row};

#[component]
pub fn PropertyDetailPage() -> impl IntoView {
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
        let _ = (loading, notices, api);
    }

    let edit_href = format!("/properties/{property_id}/edit");

    view! {
        <div class="property-detail-page">
            <header class="property-detail-page__header">
                <a class="btn" href=PROPERTIES_PATH>
                    "Back to list"
                </a>
                <h1>"Property"</h1>
                <a class="btn btn--primary" href=edit_href>
                    "Edit"
                </a>
            </header>
            {move || {
                let (record, tenant, error) = state
                    .with(|s| (s.record.clone(), s.tenant_name().map(str::to_owned), s.load_error.clone()));
                match (record, error) {
                    (Some(record), _) => detail(&record, tenant).into_any(),
                    (None, Some(error)) => view! {
                        <div class="property-detail-page__error">
                            <p>"The property could not be loaded."</p>
                            <p>{error}</p>
                            <button class="btn" on:click=move |_| browser::reload_page()>
                                "Retry"
                            </button>
                        </div>
                    }
                    .into_any(),
                    (None, None) => view! { <p>"Loading property..."</p> }.into_any(),
                }
            }}
        </div>
    }
}

fn detail(record: &PropertyRecord, tenant: Option<String>) -> impl IntoView {
    let cells = row(record);
    let description = if record.description.trim().is_empty() {
        NOT_SPECIFIED.to_owned()
    } else {
        record.description.clone()
    };
    let tenant = tenant.or_else(|| record.tenant_id.clone()).unwrap_or_else(|| "No tenant".to_owned());

    view! {
        <dl class="property-detail">
            <dt>"Address"</dt>
            <dd>{cells.address}</dd>
            <dt>"Type"</dt>
            <dd>{cells.kind}</dd>
            <dt>"Rent"</dt>
            <dd>{cells.amount}</dd>
            <dt>"Status"</dt>
            <dd>
                <span class=cells.status.tone.class()>{cells.status.label}</span>
            </dd>
            <dt>"Bedrooms"</dt>
            <dd>{cells.bedrooms}</dd>
            <dt>"Bathrooms"</dt>
            <dd>{cells.bathrooms}</dd>
            <dt>"Description"</dt>
            <dd>{description}</dd>
            <dt>"Tenant"</dt>
            <dd>{tenant}</dd>
        </dl>
    }
}
