//! Property list page state, workflows, and reconciliation.
//!
//! DESIGN
//! ======
//! The page keeps one in-memory snapshot of the collection. It is only
//! changed after the server confirms a mutation: created records are
//! appended from the server echo, deleted ones are filtered out by id. There
//! is no re-fetch after a mutation and nothing is persisted locally.
//!
//! A single `Operation` token gates create, delete, and the initial load.
//! It is advisory: it disables controls, it does not lock anything.

#[cfg(test)]
#[path = "properties_test.rs"]
mod properties_test;

use crate::net::api::RentalApi;
use crate::net::error::ApiError;
use crate::net::types::{PropertyCollection, PropertyPayload, PropertyRecord, Tenant};
use crate::state::notices::Notice;

/// Which half of the page is visible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PageMode {
    #[default]
    Listing,
    FormOpen,
}

/// The request currently in flight, if any.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Operation {
    #[default]
    Idle,
    Loading,
    Creating,
    Updating,
    Deleting(String),
}

impl Operation {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_deleting(&self, property_id: &str) -> bool {
        matches!(self, Self::Deleting(id) if id == property_id)
    }
}

/// Properties plus the tenants used by the association selector.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    pub properties: PropertyCollection,
    pub tenants: Vec<Tenant>,
}

#[derive(Clone, Debug, Default)]
pub struct PropertiesState {
    pub collection: PropertyCollection,
    pub tenants: Vec<Tenant>,
    pub mode: PageMode,
    pub operation: Operation,
    /// Bumped after a confirmed create so the form clears itself.
    pub form_reset_seq: u64,
}

impl PropertiesState {
    /// Switch between list and form. Immediate and unconditional.
    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            PageMode::Listing => PageMode::FormOpen,
            PageMode::FormOpen => PageMode::Listing,
        };
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

    /// Apply a catalog load. On failure the last-known data stays.
    pub fn finish_load(&mut self, result: Result<Catalog, ApiError>) -> Vec<Notice> {
        self.operation = Operation::Idle;
        match result {
            Ok(catalog) => {
                self.collection = catalog.properties;
                self.tenants = catalog.tenants;
                Vec::new()
            }
            Err(err) => Notice::from_api_error("Could not load properties", &err),
        }
    }

    /// Apply a create result. Failure keeps the form open with its input.
    pub fn finish_create(&mut self, result: Result<PropertyRecord, ApiError>) -> Vec<Notice> {
        self.operation = Operation::Idle;
        match result {
            Ok(record) => {
                let address = record.address.clone();
                self.collection = with_created(&self.collection, record);
                self.mode = PageMode::Listing;
                self.form_reset_seq += 1;
                vec![Notice::success("Property created", format!("{address} was added."))]
            }
            Err(err) => Notice::from_api_error("Could not create property", &err),
        }
    }

    /// Apply a delete result. Nothing is removed unless the server confirmed it.
    pub fn finish_delete(&mut self, property_id: &str, result: Result<(), ApiError>) -> Vec<Notice> {
        self.operation = Operation::Idle;
        match result {
            Ok(()) => {
                self.collection = without(&self.collection, property_id);
                vec![Notice::success("Property deleted", "The property was removed.")]
            }
            Err(err) => Notice::from_api_error("Could not delete property", &err),
        }
    }

    pub fn tenant_name(&self, tenant_id: &str) -> Option<&str> {
        tenant_name(&self.tenants, tenant_id)
    }
}

pub fn tenant_name<'a>(tenants: &'a [Tenant], tenant_id: &str) -> Option<&'a str> {
    tenants.iter().find(|t| t.tenant_id == tenant_id).map(|t| t.name.as_str())
}

// =============================================================================
// RECONCILIATION
// =============================================================================

/// Append the server echo of a created record.
pub fn with_created(collection: &PropertyCollection, record: PropertyRecord) -> PropertyCollection {
    let mut items = collection.records().to_vec();
    items.push(record);
    PropertyCollection::Valid(items)
}

/// Remove by `propertyId`. An absent id leaves the collection as it was.
pub fn without(collection: &PropertyCollection, property_id: &str) -> PropertyCollection {
    match collection {
        PropertyCollection::Valid(items) => {
            PropertyCollection::Valid(items.iter().filter(|r| r.property_id != property_id).cloned().collect())
        }
        PropertyCollection::Malformed => PropertyCollection::Malformed,
    }
}

// =============================================================================
// WORKFLOWS
// =============================================================================

/// Fetch properties and tenants concurrently; either failure fails the whole load.
///
/// # Errors
///
/// Returns the first request failure. No partial catalog is produced.
pub async fn load_catalog(api: &dyn RentalApi) -> Result<Catalog, ApiError> {
    let (properties, tenants) = futures::future::try_join(api.list_properties(), api.list_tenants()).await?;
    if properties == PropertyCollection::Malformed {
        log::warn!("property list response was not a collection");
    }
    Ok(Catalog { properties, tenants })
}

/// # Errors
///
/// Propagates the request failure unchanged.
pub async fn create_property(api: &dyn RentalApi, payload: &PropertyPayload) -> Result<PropertyRecord, ApiError> {
    let record = api.create_property(payload).await?;
    log::info!("created property {}", record.property_id);
    Ok(record)
}

/// # Errors
///
/// Propagates the request failure unchanged.
pub async fn delete_property(api: &dyn RentalApi, property_id: &str) -> Result<(), ApiError> {
    api.delete_property(property_id).await?;
    log::info!("deleted property {property_id}");
    Ok(())
}

