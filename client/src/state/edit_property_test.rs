use futures::executor::block_on;

use super::*;
use crate::net::fake_api::{FakeApi, record, tenant};
use crate::net::types::{ErrorBody, FieldError};
use crate::state::notices::{CONNECTIVITY_MESSAGE, NoticeTone};
use crate::state::property_form::{Field, FormMode, PropertyDraft};

fn loaded() -> EditPropertyState {
    EditPropertyState { record: Some(record("p-1", "Av. X, 10")), ..EditPropertyState::default() }
}

// =============================================================
// loadOne
// =============================================================

#[test]
fn starts_unloaded() {
    let state = EditPropertyState::default();
    assert!(!state.is_loaded());
    assert!(state.load_error.is_none());
}

#[test]
fn load_fetches_record_and_tenants() {
    let api = FakeApi::default();
    *api.property.lock().unwrap() = Ok(record("p-1", "Av. X, 10"));
    *api.tenants.lock().unwrap() = Ok(vec![tenant("t-1", "Ana")]);

    let mut state = EditPropertyState::default();
    assert!(state.begin(Operation::Loading));
    let notices = state.finish_load(block_on(load_property(&api, "p-1")));
    assert!(notices.is_empty());
    assert!(state.is_loaded());
    assert_eq!(state.tenants.len(), 1);
    assert!(api.calls().contains(&"get_property:p-1".to_owned()));
    assert!(!state.is_busy());
}

#[test]
fn load_failure_offers_retry_and_keeps_form_hidden() {
    let api = FakeApi::default();
    *api.property.lock().unwrap() = Err(ApiError::from_response(404, r#"{"message":"Property not found"}"#));

    let mut state = EditPropertyState::default();
    let notices = state.finish_load(block_on(load_property(&api, "missing")));
    assert!(!state.is_loaded());
    assert!(state.load_error.is_some());
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].action, Some(NoticeAction::Retry));
}

#[test]
fn tenant_failure_discards_loaded_record() {
    let api = FakeApi::default();
    *api.property.lock().unwrap() = Ok(record("p-1", "Av. X, 10"));
    *api.tenants.lock().unwrap() = Err(ApiError::Connectivity("offline".to_owned()));

    let mut state = EditPropertyState::default();
    state.finish_load(block_on(load_property(&api, "p-1")));
    assert!(state.record.is_none());
}

// =============================================================
// update
// =============================================================

#[test]
fn update_replaces_record_and_offers_navigation() {
    let api = FakeApi::default();
    let mut saved = record("p-1", "Av. X, 10");
    saved.status = Some("alugado".to_owned());
    *api.updated.lock().unwrap() = Ok(saved.clone());

    let mut state = loaded();
    let mut draft = PropertyDraft::from_record(state.record.as_ref().unwrap());
    draft.status = "alugado".to_owned();
    let payload = draft.validate(FormMode::Edit).unwrap();

    assert!(state.begin(Operation::Updating));
    let notices = state.finish_update(block_on(update_property(&api, "p-1", &payload)));
    assert_eq!(state.record, Some(saved));
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].tone, NoticeTone::Success);
    assert!(matches!(&notices[0].action, Some(NoticeAction::Navigate { path, .. }) if path == PROPERTIES_PATH));
    assert_eq!(api.calls(), vec!["update_property:p-1".to_owned()]);
}

#[test]
fn update_field_errors_become_focusable_notices() {
    let mut state = loaded();
    let err = ApiError::Rejected {
        status: 422,
        body: ErrorBody {
            message: None,
            errors: vec![
                FieldError { field: Some("rent_amount".to_owned()), message: "too high".to_owned() },
                FieldError { field: Some("description".to_owned()), message: "too short".to_owned() },
            ],
        },
    };
    let notices = state.finish_update(Err(err));
    assert_eq!(notices.len(), 2);
    assert_eq!(notices[0].action, Some(NoticeAction::FocusField(Field::RentAmount)));
    assert_eq!(notices[1].action, Some(NoticeAction::FocusField(Field::Description)));
    assert_eq!(state.record, Some(record("p-1", "Av. X, 10")));
}

#[test]
fn update_connectivity_failure_uses_generic_message() {
    let mut state = loaded();
    let notices = state.finish_update(Err(ApiError::Connectivity("timeout".to_owned())));
    assert_eq!(notices[0].body, CONNECTIVITY_MESSAGE);
    assert!(!state.is_busy());
}

#[test]
fn tenant_name_resolves_association() {
    let mut state = loaded();
    state.tenants = vec![tenant("t-1", "Ana")];
    assert_eq!(state.tenant_name(), None);
    state.record.as_mut().unwrap().tenant_id = Some("t-1".to_owned());
    assert_eq!(state.tenant_name(), Some("Ana"));
}
