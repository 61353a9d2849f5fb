//! Scripted `RentalApi` used by workflow tests.

use std::sync::Mutex;

use async_trait::async_trait;

use super::api::RentalApi;
use super::error::ApiError;
use super::types::{PropertyCollection, PropertyPayload, PropertyRecord, Tenant, Testimonial};

/// Every method returns a clone of its scripted result and logs the call.
pub(crate) struct FakeApi {
    pub properties: Mutex<Result<PropertyCollection, ApiError>>,
    pub property: Mutex<Result<PropertyRecord, ApiError>>,
    pub tenants: Mutex<Result<Vec<Tenant>, ApiError>>,
    pub created: Mutex<Result<PropertyRecord, ApiError>>,
    pub updated: Mutex<Result<PropertyRecord, ApiError>>,
    pub deleted: Mutex<Result<(), ApiError>>,
    pub testimonials: Mutex<Result<Vec<Testimonial>, ApiError>>,
    pub approved: Mutex<Result<(), ApiError>>,
    pub calls: Mutex<Vec<String>>,
    pub payloads: Mutex<Vec<PropertyPayload>>,
}

impl Default for FakeApi {
    fn default() -> Self {
        Self {
            properties: Mutex::new(Ok(PropertyCollection::default())),
            property: Mutex::new(Err(ApiError::Unavailable)),
            tenants: Mutex::new(Ok(Vec::new())),
            created: Mutex::new(Err(ApiError::Unavailable)),
            updated: Mutex::new(Err(ApiError::Unavailable)),
            deleted: Mutex::new(Ok(())),
            testimonials: Mutex::new(Ok(Vec::new())),
            approved: Mutex::new(Ok(())),
            calls: Mutex::new(Vec::new()),
            payloads: Mutex::new(Vec::new()),
        }
    }
}

impl FakeApi {
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn payloads(&self) -> Vec<PropertyPayload> {
        self.payloads.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

pub(crate) fn record(id: &str, address: &str) -> PropertyRecord {
    PropertyRecord {
        property_id: id.to_owned(),
        address: address.to_owned(),
        property_type: Some("casa".to_owned()),
        rent_amount: Some(15000.0),
        status: Some("disponivel".to_owned()),
        bedrooms: Some(3),
        bathrooms: Some(2),
        description: "desc".to_owned(),
        tenant_id: None,
    }
}

pub(crate) fn tenant(id: &str, name: &str) -> Tenant {
    Tenant { tenant_id: id.to_owned(), name: name.to_owned() }
}

#[async_trait(?Send)]
impl RentalApi for FakeApi {
    async fn list_properties(&self) -> Result<PropertyCollection, ApiError> {
        self.record("list_properties".to_owned());
        self.properties.lock().unwrap().clone()
    }

    async fn get_property(&self, property_id: &str) -> Result<PropertyRecord, ApiError> {
        self.record(format!("get_property:{property_id}"));
        self.property.lock().unwrap().clone()
    }

    async fn create_property(&self, payload: &PropertyPayload) -> Result<PropertyRecord, ApiError> {
        self.record("create_property".to_owned());
        self.payloads.lock().unwrap().push(payload.clone());
        self.created.lock().unwrap().clone()
    }

    async fn update_property(&self, property_id: &str, payload: &PropertyPayload) -> Result<PropertyRecord, ApiError> {
        self.record(format!("update_property:{property_id}"));
        self.payloads.lock().unwrap().push(payload.clone());
        self.updated.lock().unwrap().clone()
    }

    async fn delete_property(&self, property_id: &str) -> Result<(), ApiError> {
        self.record(format!("delete_property:{property_id}"));
        self.deleted.lock().unwrap().clone()
    }

    async fn list_tenants(&self) -> Result<Vec<Tenant>, ApiError> {
        self.record("list_tenants".to_owned());
        self.tenants.lock().unwrap().clone()
    }

    async fn list_pending_testimonials(&self) -> Result<Vec<Testimonial>, ApiError> {
        self.record("list_pending_testimonials".to_owned());
        self.testimonials.lock().unwrap().clone()
    }

    async fn approve_testimonial(&self, testimonial_id: &str) -> Result<(), ApiError> {
        self.record(format!("approve_testimonial:{testimonial_id}"));
        self.approved.lock().unwrap().clone()
    }
}
