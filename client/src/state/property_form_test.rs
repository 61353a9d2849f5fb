use super::*;

// =============================================================
// Helpers
// =============================================================

fn house_draft() -> PropertyDraft {
    PropertyDraft {
        address: "Av. X, 10".to_owned(),
        property_type: "casa".to_owned(),
        rent_amount: "15000".to_owned(),
        bedrooms: "3".to_owned(),
        bathrooms: "2".to_owned(),
        description: "desc".to_owned(),
        ..PropertyDraft::default()
    }
}

// =============================================================
// Defaults and mode rules
// =============================================================

#[test]
fn default_draft_uses_available_status_and_no_tenant() {
    let draft = PropertyDraft::default();
    assert_eq!(draft.status, "disponivel");
    assert_eq!(draft.tenant_id, "none");
    assert!(draft.property_type.is_empty());
}

#[test]
fn status_selector_only_in_edit_mode() {
    assert!(FormMode::Edit.shows_status());
    assert!(!FormMode::Create.shows_status());
}

#[test]
fn default_status_notice_only_in_create_mode() {
    assert!(FormMode::Create.shows_default_status_notice());
    assert!(!FormMode::Edit.shows_default_status_notice());
}

#[test]
fn unit_details_hidden_for_commercial_only() {
    let mut draft = PropertyDraft::default();
    assert!(draft.shows_unit_details());
    draft.property_type = "apartamento".to_owned();
    assert!(draft.shows_unit_details());
    draft.property_type = "comercial".to_owned();
    assert!(!draft.shows_unit_details());
}

#[test]
fn field_keys_round_trip() {
    for field in [
        Field::Address,
        Field::PropertyType,
        Field::RentAmount,
        Field::Status,
        Field::Bedrooms,
        Field::Bathrooms,
        Field::Description,
        Field::TenantId,
    ] {
        assert_eq!(Field::from_key(field.key()), Some(field));
    }
    assert_eq!(Field::from_key("tenant_id"), Some(Field::TenantId));
    assert_eq!(Field::from_key("owner"), None);
}

// =============================================================
// Validation
// =============================================================

#[test]
fn valid_create_draft_produces_payload_without_status() {
    let payload = house_draft().validate(FormMode::Create).unwrap();
    assert_eq!(payload.address, "Av. X, 10");
    assert_eq!(payload.property_type, PropertyType::House);
    assert_eq!(payload.rent_amount, 15000.0);
    assert_eq!(payload.bedrooms, Some(3));
    assert_eq!(payload.bathrooms, Some(2));
    assert_eq!(payload.status, None);
    assert_eq!(payload.tenant_id, None);
}

#[test]
fn empty_draft_reports_every_required_field() {
    let errors = PropertyDraft::default().validate(FormMode::Create).unwrap_err();
    assert_eq!(errors.get(&Field::Address), Some(&REQUIRED));
    assert_eq!(errors.get(&Field::PropertyType), Some(&REQUIRED));
    assert_eq!(errors.get(&Field::RentAmount), Some(&REQUIRED));
    assert_eq!(errors.get(&Field::Description), Some(&REQUIRED));
    assert!(!errors.contains_key(&Field::Bedrooms));
    assert!(!errors.contains_key(&Field::Status));
}

#[test]
fn whitespace_address_is_required() {
    let mut draft = house_draft();
    draft.address = "   ".to_owned();
    let errors = draft.validate(FormMode::Create).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[&Field::Address], REQUIRED);
}

#[test]
fn negative_rent_blocks_submission() {
    let mut draft = house_draft();
    draft.rent_amount = "-1".to_owned();
    let errors = draft.validate(FormMode::Create).unwrap_err();
    assert_eq!(errors[&Field::RentAmount], NON_NEGATIVE);
}

#[test]
fn zero_and_fractional_rent_are_accepted() {
    let mut draft = house_draft();
    draft.rent_amount = "0".to_owned();
    assert_eq!(draft.validate(FormMode::Create).unwrap().rent_amount, 0.0);
    draft.rent_amount = " 1250.50 ".to_owned();
    assert_eq!(draft.validate(FormMode::Create).unwrap().rent_amount, 1250.5);
}

#[test]
fn non_numeric_rent_is_invalid() {
    let mut draft = house_draft();
    draft.rent_amount = "abc".to_owned();
    assert_eq!(draft.validate(FormMode::Create).unwrap_err()[&Field::RentAmount], INVALID_NUMBER);
    draft.rent_amount = "NaN".to_owned();
    assert_eq!(draft.validate(FormMode::Create).unwrap_err()[&Field::RentAmount], INVALID_NUMBER);
}

#[test]
fn negative_or_fractional_counts_are_invalid() {
    let mut draft = house_draft();
    draft.bedrooms = "-2".to_owned();
    draft.bathrooms = "1.5".to_owned();
    let errors = draft.validate(FormMode::Create).unwrap_err();
    assert_eq!(errors[&Field::Bedrooms], INVALID_NUMBER);
    assert_eq!(errors[&Field::Bathrooms], INVALID_NUMBER);
}

#[test]
fn empty_counts_are_optional() {
    let mut draft = house_draft();
    draft.bedrooms.clear();
    draft.bathrooms = "  ".to_owned();
    let payload = draft.validate(FormMode::Create).unwrap();
    assert_eq!(payload.bedrooms, None);
    assert_eq!(payload.bathrooms, None);
}

#[test]
fn commercial_ignores_and_drops_unit_details() {
    let mut draft = house_draft();
    draft.property_type = "comercial".to_owned();
    draft.bedrooms = "-5".to_owned();
    draft.bathrooms = "4".to_owned();
    let payload = draft.validate(FormMode::Create).unwrap();
    assert_eq!(payload.property_type, PropertyType::Commercial);
    assert_eq!(payload.bedrooms, None);
    assert_eq!(payload.bathrooms, None);
}

#[test]
fn unknown_type_is_required() {
    let mut draft = house_draft();
    draft.property_type = "castle".to_owned();
    assert_eq!(draft.validate(FormMode::Create).unwrap_err()[&Field::PropertyType], REQUIRED);
}

#[test]
fn edit_mode_sends_selected_status() {
    let mut draft = house_draft();
    draft.status = "manutencao".to_owned();
    let payload = draft.validate(FormMode::Edit).unwrap();
    assert_eq!(payload.status, Some(PropertyStatus::Maintenance));
}

#[test]
fn edit_mode_rejects_unknown_status() {
    let mut draft = house_draft();
    draft.status = "sold".to_owned();
    assert_eq!(draft.validate(FormMode::Edit).unwrap_err()[&Field::Status], INVALID_STATUS);
    // Create mode never reads the status field.
    assert!(draft.validate(FormMode::Create).is_ok());
}

#[test]
fn none_sentinel_becomes_absent_association() {
    let payload = house_draft().validate(FormMode::Create).unwrap();
    assert_eq!(payload.tenant_id, None);
    let json = serde_json::to_value(&payload).unwrap();
    assert_eq!(json["tenantId"], serde_json::Value::Null);
}

#[test]
fn selected_tenant_passes_through() {
    let mut draft = house_draft();
    draft.tenant_id = "t-17".to_owned();
    assert_eq!(draft.validate(FormMode::Create).unwrap().tenant_id.as_deref(), Some("t-17"));
}

// =============================================================
// Pre-fill and submit outcome
// =============================================================

#[test]
fn from_record_prefills_edit_form() {
    let record = PropertyRecord {
        property_id: "p-1".to_owned(),
        address: "Rua Y".to_owned(),
        property_type: Some("apartamento".to_owned()),
        rent_amount: Some(8000.0),
        status: Some("alugado".to_owned()),
        bedrooms: Some(2),
        bathrooms: None,
        description: "flat".to_owned(),
        tenant_id: Some("t-1".to_owned()),
    };
    let draft = PropertyDraft::from_record(&record);
    assert_eq!(draft.property_type, "apartamento");
    assert_eq!(draft.rent_amount, "8000");
    assert_eq!(draft.status, "alugado");
    assert_eq!(draft.bedrooms, "2");
    assert_eq!(draft.bathrooms, "");
    assert_eq!(draft.tenant_id, "t-1");
}

#[test]
fn from_record_without_tenant_uses_sentinel() {
    let record = PropertyRecord {
        property_id: "p-1".to_owned(),
        address: "Rua Y".to_owned(),
        property_type: None,
        rent_amount: None,
        status: Some("unknown".to_owned()),
        bedrooms: None,
        bathrooms: None,
        description: String::new(),
        tenant_id: None,
    };
    let draft = PropertyDraft::from_record(&record);
    assert_eq!(draft.tenant_id, NO_TENANT);
    assert_eq!(draft.status, "disponivel");
}

#[test]
fn create_success_resets_and_edit_success_keeps_values() {
    let submitted = house_draft();
    assert_eq!(after_success(FormMode::Create, &submitted), PropertyDraft::default());
    assert_eq!(after_success(FormMode::Edit, &submitted), submitted);
}

#[test]
fn reset_fires_only_when_sequence_moves_after_mount() {
    assert!(!reset_requested(None, 0));
    assert!(!reset_requested(None, 3));
    assert!(!reset_requested(Some(2), 2));
    assert!(reset_requested(Some(2), 3));
}

#[test]
fn confirmed_create_while_form_hidden_still_clears_draft() {
    use crate::net::fake_api::record;
    use crate::state::properties::{Operation, PageMode, PropertiesState};

    let mut page = PropertiesState { mode: PageMode::FormOpen, ..PropertiesState::default() };
    let observed = page.form_reset_seq;
    let submitted = house_draft();

    assert!(page.begin(Operation::Creating));
    page.finish_create(Ok(record("p-1", "Av. X, 10")));
    assert_eq!(page.mode, PageMode::Listing);

    assert!(reset_requested(Some(observed), page.form_reset_seq));
    assert_eq!(after_success(FormMode::Create, &submitted), PropertyDraft::default());
}

#[test]
fn set_and_get_address_each_field() {
    let mut draft = PropertyDraft::default();
    draft.set(Field::Bathrooms, "4".to_owned());
    draft.set(Field::TenantId, "t-2".to_owned());
    assert_eq!(draft.get(Field::Bathrooms), "4");
    assert_eq!(draft.get(Field::TenantId), "t-2");
}
