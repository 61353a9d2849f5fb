//! Property form input, validation, and mode rules.
//!
//! DESIGN
//! ======
//! The form keeps raw text exactly as typed (`PropertyDraft`) and only turns
//! it into a typed `PropertyPayload` through `validate`. Nothing reaches the
//! network layer unless validation succeeds, and a failed submission never
//! clears the draft.

#[cfg(test)]
#[path = "property_form_test.rs"]
mod property_form_test;

use std::collections::BTreeMap;

use crate::net::types::{NO_TENANT, PropertyPayload, PropertyRecord, PropertyStatus, PropertyType};

pub const REQUIRED: &str = "required";
pub const NON_NEGATIVE: &str = "must be non-negative";
pub const INVALID_NUMBER: &str = "invalid number";
pub const INVALID_STATUS: &str = "invalid status";

/// Whether the form creates a new record or edits an existing one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Create,
    Edit,
}

impl FormMode {
    /// Status is server-assigned on create and editable afterwards.
    pub fn shows_status(self) -> bool {
        matches!(self, Self::Edit)
    }

    /// "Will be created as Available by default" notice.
    pub fn shows_default_status_notice(self) -> bool {
        matches!(self, Self::Create)
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            Self::Create => "Create property",
            Self::Edit => "Save changes",
        }
    }
}

/// Form fields, keyed by their wire names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Address,
    PropertyType,
    RentAmount,
    Status,
    Bedrooms,
    Bathrooms,
    Description,
    TenantId,
}

impl Field {
    /// Wire name; also used as the DOM id of the input.
    pub fn key(self) -> &'static str {
        match self {
            Self::Address => "address",
            Self::PropertyType => "property_type",
            Self::RentAmount => "rent_amount",
            Self::Status => "status",
            Self::Bedrooms => "bedrooms",
            Self::Bathrooms => "bathrooms",
            Self::Description => "description",
            Self::TenantId => "tenantId",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "address" => Some(Self::Address),
            "property_type" => Some(Self::PropertyType),
            "rent_amount" => Some(Self::RentAmount),
            "status" => Some(Self::Status),
            "bedrooms" => Some(Self::Bedrooms),
            "bathrooms" => Some(Self::Bathrooms),
            "description" => Some(Self::Description),
            "tenantId" | "tenant_id" => Some(Self::TenantId),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Address => "Address",
            Self::PropertyType => "Type",
            Self::RentAmount => "Rent amount (MZN)",
            Self::Status => "Status",
            Self::Bedrooms => "Bedrooms",
            Self::Bathrooms => "Bathrooms",
            Self::Description => "Description",
            Self::TenantId => "Tenant",
        }
    }
}

/// Validation messages keyed by field, in display order.
pub type FieldErrors = BTreeMap<Field, &'static str>;

/// Raw form input.
#[derive(Clone, Debug, PartialEq)]
pub struct PropertyDraft {
    pub address: String,
    /// Wire value of the selected type, empty while unselected.
    pub property_type: String,
    pub rent_amount: String,
    /// Only read in edit mode.
    pub status: String,
    pub bedrooms: String,
    pub bathrooms: String,
    pub description: String,
    /// Tenant id or the `"none"` sentinel.
    pub tenant_id: String,
}

impl Default for PropertyDraft {
    fn default() -> Self {
        Self {
            address: String::new(),
            property_type: String::new(),
            rent_amount: String::new(),
            status: PropertyStatus::default().as_str().to_owned(),
            bedrooms: String::new(),
            bathrooms: String::new(),
            description: String::new(),
            tenant_id: NO_TENANT.to_owned(),
        }
    }
}

impl PropertyDraft {
    /// Pre-fill from a loaded record for edit mode.
    pub fn from_record(record: &PropertyRecord) -> Self {
        let defaults = Self::default();
        Self {
            address: record.address.clone(),
            property_type: record.kind().map(|k| k.as_str().to_owned()).unwrap_or_default(),
            rent_amount: record.rent_amount.map(|a| a.to_string()).unwrap_or_default(),
            status: record.known_status().map_or(defaults.status, |s| s.as_str().to_owned()),
            bedrooms: record.bedrooms.map(|n| n.to_string()).unwrap_or_default(),
            bathrooms: record.bathrooms.map(|n| n.to_string()).unwrap_or_default(),
            description: record.description.clone(),
            tenant_id: record.tenant_id.clone().unwrap_or(defaults.tenant_id),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Address => &self.address,
            Field::PropertyType => &self.property_type,
            Field::RentAmount => &self.rent_amount,
            Field::Status => &self.status,
            Field::Bedrooms => &self.bedrooms,
            Field::Bathrooms => &self.bathrooms,
            Field::Description => &self.description,
            Field::TenantId => &self.tenant_id,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Address => &mut self.address,
            Field::PropertyType => &mut self.property_type,
            Field::RentAmount => &mut self.rent_amount,
            Field::Status => &mut self.status,
            Field::Bedrooms => &mut self.bedrooms,
            Field::Bathrooms => &mut self.bathrooms,
            Field::Description => &mut self.description,
            Field::TenantId => &mut self.tenant_id,
        };
        *slot = value;
    }

    pub fn kind(&self) -> Option<PropertyType> {
        PropertyType::parse(&self.property_type)
    }

    /// Bedroom/bathroom inputs are hidden for commercial units in every mode.
    pub fn shows_unit_details(&self) -> bool {
        self.kind().map_or(true, PropertyType::requires_unit_details)
    }

    /// Turn the draft into a payload, or report every failing field.
    ///
    /// # Errors
    ///
    /// Returns the field-keyed messages when any rule fails; no partial
    /// payload is produced.
    pub fn validate(&self, mode: FormMode) -> Result<PropertyPayload, FieldErrors> {
        let mut errors = FieldErrors::new();

        let address = self.address.trim();
        if address.is_empty() {
            errors.insert(Field::Address, REQUIRED);
        }

        let kind = self.kind();
        if kind.is_none() {
            errors.insert(Field::PropertyType, REQUIRED);
        }

        let rent_amount = match parse_amount(&self.rent_amount) {
            Ok(amount) => Some(amount),
            Err(message) => {
                errors.insert(Field::RentAmount, message);
                None
            }
        };

        let mut bedrooms = None;
        let mut bathrooms = None;
        if self.shows_unit_details() {
            match parse_count(&self.bedrooms) {
                Ok(count) => bedrooms = count,
                Err(message) => {
                    errors.insert(Field::Bedrooms, message);
                }
            }
            match parse_count(&self.bathrooms) {
                Ok(count) => bathrooms = count,
                Err(message) => {
                    errors.insert(Field::Bathrooms, message);
                }
            }
        }

        let description = self.description.trim();
        if description.is_empty() {
            errors.insert(Field::Description, REQUIRED);
        }

        let status = match mode {
            FormMode::Create => None,
            FormMode::Edit => {
                let parsed = PropertyStatus::parse(&self.status);
                if parsed.is_none() {
                    errors.insert(Field::Status, INVALID_STATUS);
                }
                parsed
            }
        };

        let (Some(property_type), Some(rent_amount), true) = (kind, rent_amount, errors.is_empty()) else {
            return Err(errors);
        };

        Ok(PropertyPayload {
            address: address.to_owned(),
            property_type,
            rent_amount,
            status,
            bedrooms,
            bathrooms,
            description: description.to_owned(),
            tenant_id: tenant_association(&self.tenant_id),
        })
    }
}

/// Draft to show after the parent confirms a successful submission.
pub fn after_success(mode: FormMode, submitted: &PropertyDraft) -> PropertyDraft {
    match mode {
        FormMode::Create => PropertyDraft::default(),
        FormMode::Edit => submitted.clone(),
    }
}

/// Whether a reset sequence moved since the previous observation. The first
/// observation only records the baseline.
pub fn reset_requested(previous: Option<u64>, current: u64) -> bool {
    previous.is_some_and(|p| p != current)
}

/// Translate the selector value into an optional association.
pub fn tenant_association(raw: &str) -> Option<String> {
    let value = raw.trim();
    if value.is_empty() || value == NO_TENANT {
        None
    } else {
        Some(value.to_owned())
    }
}

fn parse_amount(raw: &str) -> Result<f64, &'static str> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(REQUIRED);
    }
    let amount = value.parse::<f64>().map_err(|_| INVALID_NUMBER)?;
    if !amount.is_finite() {
        return Err(INVALID_NUMBER);
    }
    if amount < 0.0 {
        return Err(NON_NEGATIVE);
    }
    Ok(amount)
}

fn parse_count(raw: &str) -> Result<Option<u32>, &'static str> {
    let value = raw.trim();
    if value.is_empty() {
        return Ok(None);
    }
    let count = value.parse::<i64>().map_err(|_| INVALID_NUMBER)?;
    u32::try_from(count).map(Some).map_err(|_| INVALID_NUMBER)
}
