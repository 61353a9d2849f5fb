//! Create/edit form for a single property.
//!
//! DESIGN
//! ======
//! The form owns its draft and validation messages. It never talks to the
//! network: a valid submission is handed to the parent as a
//! `PropertyPayload`, and the parent signals a confirmed create by bumping
//! `reset_seq`. A failed submission leaves every typed value in place.

use leptos::prelude::*;

use crate::net::types::{NO_TENANT, PropertyPayload, PropertyRecord, PropertyStatus, PropertyType, Tenant};
use crate::state::property_form::{Field, FieldErrors, FormMode, PropertyDraft, after_success, reset_requested};
use crate::util::browser;
use crate::util::property_display::{status_label, type_label};

#[component]
pub fn PropertyForm(
    mode: FormMode,
    #[prop(optional)] initial: Option<PropertyRecord>,
    #[prop(into)] tenants: Signal<Vec<Tenant>>,
    #[prop(into)] busy: Signal<bool>,
    #[prop(optional, into)] reset_seq: Option<Signal<u64>>,
    on_submit: Callback<PropertyPayload>,
    #[prop(optional)] on_cancel: Option<Callback<()>>,
) -> impl IntoView {
    let draft = RwSignal::new(initial.as_ref().map_or_else(PropertyDraft::default, PropertyDraft::from_record));
    let errors = RwSignal::new(FieldErrors::new());

    Effect::new(move |prev: Option<u64>| {
        let seq = reset_seq.map_or(0, |s| s.get());
        if reset_requested(prev, seq) {
            draft.update(|d| *d = after_success(mode, d));
            errors.set(FieldErrors::new());
        }
        seq
    });

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        match draft.with_untracked(|d| d.validate(mode)) {
            Ok(payload) => {
                errors.set(FieldErrors::new());
                on_submit.run(payload);
            }
            Err(found) => {
                if let Some(first) = found.keys().next() {
                    browser::focus_element(first.key());
                }
                errors.set(found);
            }
        }
    };

    let shows_unit_details = move || draft.with(PropertyDraft::shows_unit_details);

    view! {
        <form class="property-form" novalidate=true on:submit=on_form_submit>
            {input_field(Field::Address, "text", draft, errors)}

            <label class="property-form__field" for=Field::PropertyType.key()>
                {Field::PropertyType.label()}
                <select
                    id=Field::PropertyType.key()
                    on:change=move |ev| draft.update(|d| d.set(Field::PropertyType, event_target_value(&ev)))
                >
                    <option value="" selected=move || draft.with(|d| d.property_type.is_empty())>
                        "Select a type"
                    </option>
                    {PropertyType::ALL
                        .into_iter()
                        .map(|kind| {
                            view! {
                                <option
                                    value=kind.as_str()
                                    selected=move || draft.with(|d| d.property_type == kind.as_str())
                                >
                                    {type_label(kind)}
                                </option>
                            }
                        })
                        .collect::<Vec<_>>()}
                </select>
                {error_text(Field::PropertyType, errors)}
            </label>

            {input_field(Field::RentAmount, "number", draft, errors)}

            <Show when=move || mode.shows_status()>
                <label class="property-form__field" for=Field::Status.key()>
                    {Field::Status.label()}
                    <select
                        id=Field::Status.key()
                        on:change=move |ev| draft.update(|d| d.set(Field::Status, event_target_value(&ev)))
                    >
                        {PropertyStatus::ALL
                            .into_iter()
                            .map(|status| {
                                view! {
                                    <option
                                        value=status.as_str()
                                        selected=move || draft.with(|d| d.status == status.as_str())
                                    >
                                        {status_label(status)}
                                    </option>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                    {error_text(Field::Status, errors)}
                </label>
            </Show>
            <Show when=move || mode.shows_default_status_notice()>
                <p class="property-form__hint">"New properties are created as Available."</p>
            </Show>

            <Show when=shows_unit_details>
                {input_field(Field::Bedrooms, "number", draft, errors)}
                {input_field(Field::Bathrooms, "number", draft, errors)}
            </Show>

            <label class="property-form__field" for=Field::Description.key()>
                {Field::Description.label()}
                <textarea
                    id=Field::Description.key()
                    prop:value=move || draft.with(|d| d.description.clone())
                    on:input=move |ev| draft.update(|d| d.set(Field::Description, event_target_value(&ev)))
                ></textarea>
                {error_text(Field::Description, errors)}
            </label>

            <label class="property-form__field" for=Field::TenantId.key()>
                {Field::TenantId.label()}
                <select
                    id=Field::TenantId.key()
                    on:change=move |ev| draft.update(|d| d.set(Field::TenantId, event_target_value(&ev)))
                >
                    <option value=NO_TENANT selected=move || draft.with(|d| d.tenant_id == NO_TENANT)>
                        "No tenant"
                    </option>
                    {move || {
                        tenants
                            .get()
                            .into_iter()
                            .map(|tenant| {
                                let id = tenant.tenant_id.clone();
                                let selected_id = id.clone();
                                view! {
                                    <option
                                        value=id
                                        selected=move || draft.with(|d| d.tenant_id == selected_id)
                                    >
                                        {tenant.name}
                                    </option>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </select>
                {error_text(Field::TenantId, errors)}
            </label>

            <div class="property-form__actions">
                {on_cancel.map(|cancel| {
                    view! {
                        <button type="button" class="btn" on:click=move |_| cancel.run(())>
                            "Cancel"
                        </button>
                    }
                })}
                <button type="submit" class="btn btn--primary" disabled=move || busy.get()>
                    {move || if busy.get() { "Saving..." } else { mode.submit_label() }}
                </button>
            </div>
        </form>
    }
}

fn input_field(
    field: Field,
    input_type: &'static str,
    draft: RwSignal<PropertyDraft>,
    errors: RwSignal<FieldErrors>,
) -> impl IntoView {
    view! {
        <label class="property-form__field" for=field.key()>
            {field.label()}
            <input
                id=field.key()
                type=input_type
                min=(input_type == "number").then_some("0")
                class:property-form__input--invalid=move || errors.with(|e| e.contains_key(&field))
                prop:value=move || draft.with(|d| d.get(field).to_owned())
                on:input=move |ev| draft.update(|d| d.set(field, event_target_value(&ev)))
            />
            {error_text(field, errors)}
        </label>
    }
}

fn error_text(field: Field, errors: RwSignal<FieldErrors>) -> impl IntoView {
    move || {
        errors
            .with(|e| e.get(&field).copied())
            .map(|message| view! { <span class="property-form__error">{message}</span> })
    }
}
