//! Tabular view of the property collection.

use leptos::prelude::*;

use crate::net::types::PropertyCollection;
use crate::util::property_display::{ListView, PropertyRow, list_view_while};

#[component]
pub fn PropertyList(
    #[prop(into)] collection: Signal<PropertyCollection>,
    /// True until the first catalog load settles.
    #[prop(into)]
    loading: Signal<bool>,
    /// Disables row actions while any request is pending.
    #[prop(into)]
    busy: Signal<bool>,
    /// Id of the row whose delete is in flight.
    #[prop(into)]
    deleting: Signal<Option<String>>,
    on_delete: Callback<String>,
) -> impl IntoView {
    move || {
        let is_loading = loading.get();
        match collection.with(|c| list_view_while(c, is_loading)) {
            ListView::Pending => ().into_any(),
            ListView::Invalid => view! {
                <p class="property-list__invalid">"The property list could not be read."</p>
            }
            .into_any(),
            ListView::Empty => view! { <p class="property-list__empty">"No properties registered yet."</p> }.into_any(),
            ListView::Rows(rows) => view! {
                <table class="property-list">
                    <thead>
                        <tr>
                            <th>"Address"</th>
                            <th>"Type"</th>
                            <th>"Rent"</th>
                            <th>"Bedrooms"</th>
                            <th>"Bathrooms"</th>
                            <th>"Status"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {rows
                            .into_iter()
                            .map(|row| property_row(row, busy, deleting, on_delete))
                            .collect::<Vec<_>>()}
                    </tbody>
                </table>
            }
            .into_any(),
        }
    }
}

fn property_row(
    row: PropertyRow,
    busy: Signal<bool>,
    deleting: Signal<Option<String>>,
    on_delete: Callback<String>,
) -> impl IntoView {
    let view_href = format!("/properties/{}", row.property_id);
    let edit_href = format!("/properties/{}/edit", row.property_id);
    let delete_id = row.property_id.clone();
    let row_id = row.property_id;
    let is_deleting = move || deleting.with(|d| d.as_deref() == Some(row_id.as_str()));

    view! {
        <tr>
            <td>{row.address}</td>
            <td>{row.kind}</td>
            <td>{row.amount}</td>
            <td>{row.bedrooms}</td>
            <td>{row.bathrooms}</td>
            <td>
                <span class=row.status.tone.class()>{row.status.label}</span>
            </td>
            <td class="property-list__actions">
                <a class="btn" href=view_href>
                    "View"
                </a>
                <a class="btn" href=edit_href>
                    "Edit"
                </a>
                <button
                    class="btn btn--danger"
                    disabled=move || busy.get()
                    on:click=move |_| on_delete.run(delete_id.clone())
                >
                    {move || if is_deleting() { "Deleting..." } else { "Delete" }}
                </button>
            </td>
        </tr>
    }
}
