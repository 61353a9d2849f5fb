//! Single-record state for the edit and detail pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! The record is loaded together with the tenant list. Until both arrive the
//! page shows a blocking loading indicator; the form is never rendered with
//! partially loaded data.

#[cfg(test)]
#[path = "edit_property_test.rs"]
mod edit_property_test;

use crate::net::api::RentalApi;
use crate::net::error::ApiError;
use crate::net::types::{PropertyPayload, PropertyRecord, Tenant};
use crate::state::notices::{Notice, NoticeAction};
use crate::state::properties::{Operation, tenant_name};

pub const PROPERTIES_PATH: &str = "/properties";

#[derive(Clone, Debug, Default)]
pub struct EditPropertyState {
    pub record: Option<PropertyRecord>,
    pub tenants: Vec<Tenant>,
    /// Set when the initial load failed; cleared by a successful load.
    pub load_error: Option<String>,
    pub operation: Operation,
}

impl EditPropertyState {
    pub fn is_loaded(&self) -> bool {
        self.record.is_some()
    }

    pub fn is_busy(&self) -> bool {
        !self.operation.is_idle()
    }

    /// Claim the operation token. Returns `false` while another request is pending.
    pub fn begin(&mut self, operation: Operation) -> bool {
        if self.is_busy() {
            return false;
        }
        self.operation = operation;
        true
    }

    /// Apply the record + tenants load. Failure offers a full page reload.
    pub fn finish_load(&mut self, result: Result<(PropertyRecord, Vec<Tenant>), ApiError>) -> Vec<Notice> {
        self.operation = Operation::Idle;
        match result {
            Ok((record, tenants)) => {
                self.record = Some(record);
                self.tenants = tenants;
                self.load_error = None;
                Vec::new()
            }
            Err(err) => {
                self.load_error = Some(err.to_string());
                let mut notices = Notice::from_api_error("Could not load property", &err);
                if let Some(last) = notices.last_mut() {
                    last.action = Some(NoticeAction::Retry);
                }
                notices
            }
        }
    }

    /// Apply an update result. Success replaces the record with the server copy.
    pub fn finish_update(&mut self, result: Result<PropertyRecord, ApiError>) -> Vec<Notice> {
        self.operation = Operation::Idle;
        match result {
            Ok(record) => {
                let address = record.address.clone();
                self.record = Some(record);
                vec![
                    Notice::success("Property updated", format!("{address} was saved.")).with_action(
                        NoticeAction::Navigate { label: "Back to list".to_owned(), path: PROPERTIES_PATH.to_owned() },
                    ),
                ]
            }
            Err(err) => Notice::from_api_error("Could not update property", &err),
        }
    }

    pub fn tenant_name(&self) -> Option<&str> {
        let tenant_id = self.record.as_ref()?.tenant_id.as_deref()?;
        tenant_name(&self.tenants, tenant_id)
    }
}

/// Fetch the record and the tenant list concurrently.
///
/// # Errors
///
/// Returns the first request failure; nothing from the other request is kept.
pub async fn load_property(api: &dyn RentalApi, property_id: &str) -> Result<(PropertyRecord, Vec<Tenant>), ApiError> {
    futures::future::try_join(api.get_property(property_id), api.list_tenants()).await
}

/// # Errors
///
/// Propagates the request failure unchanged.
pub async fn update_property(
    api: &dyn RentalApi,
    property_id: &str,
    payload: &PropertyPayload,
) -> Result<PropertyRecord, ApiError> {
    let record = api.update_property(property_id, payload).await?;
    log::info!("updated property {property_id}");
    Ok(record)
}
