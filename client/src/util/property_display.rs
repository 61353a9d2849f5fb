//! Display projection for property lists and detail views.
//!
//! DESIGN
//! ======
//! Rows are computed from the collection without touching the DOM so the
//! list's fallback texts and badge mapping can be unit tested. Invalid and
//! empty collections are terminal display states, not errors.

#[cfg(test)]
#[path = "property_display_test.rs"]
mod property_display_test;

use crate::net::types::{PropertyCollection, PropertyRecord, PropertyStatus, PropertyType};

pub const NOT_AVAILABLE: &str = "N/A";
pub const NOT_APPLICABLE: &str = "Not applicable";
pub const NOT_SPECIFIED: &str = "Not specified";
pub const CURRENCY: &str = "MZN";

/// Visual class of a status badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BadgeTone {
    Success,
    Destructive,
    Warning,
    Neutral,
}

impl BadgeTone {
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "badge badge--success",
            Self::Destructive => "badge badge--destructive",
            Self::Warning => "badge badge--warning",
            Self::Neutral => "badge",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusBadge {
    pub tone: BadgeTone,
    pub label: String,
}

/// Derived cells for one list row.
#[derive(Clone, Debug, PartialEq)]
pub struct PropertyRow {
    pub property_id: String,
    pub address: String,
    pub kind: String,
    pub amount: String,
    pub bedrooms: String,
    pub bathrooms: String,
    pub status: StatusBadge,
}

/// What the list renders.
#[derive(Clone, Debug, PartialEq)]
pub enum ListView {
    /// Nothing loaded yet; the page shows its own loading indicator.
    Pending,
    /// The list endpoint did not return a collection.
    Invalid,
    Empty,
    Rows(Vec<PropertyRow>),
}

pub fn list_view(collection: &PropertyCollection) -> ListView {
    match collection {
        PropertyCollection::Malformed => ListView::Invalid,
        PropertyCollection::Valid(items) if items.is_empty() => ListView::Empty,
        PropertyCollection::Valid(items) => ListView::Rows(items.iter().map(row).collect()),
    }
}

/// `list_view` for a page that may still be loading. An empty collection
/// is not reported as empty until the load has finished.
pub fn list_view_while(collection: &PropertyCollection, loading: bool) -> ListView {
    match list_view(collection) {
        ListView::Empty if loading => ListView::Pending,
        view => view,
    }
}

pub fn row(record: &PropertyRecord) -> PropertyRow {
    PropertyRow {
        property_id: record.property_id.clone(),
        address: record.address.clone(),
        kind: type_cell(record),
        amount: amount_cell(record.rent_amount),
        bedrooms: unit_cell(record, record.bedrooms),
        bathrooms: unit_cell(record, record.bathrooms),
        status: status_badge(record.status.as_deref()),
    }
}

pub fn type_cell(record: &PropertyRecord) -> String {
    match record.property_type.as_deref().map(str::trim) {
        Some(kind) if !kind.is_empty() => kind.to_owned(),
        _ => NOT_AVAILABLE.to_owned(),
    }
}

pub fn amount_cell(amount: Option<f64>) -> String {
    amount.map_or_else(|| NOT_AVAILABLE.to_owned(), |value| format!("{value} {CURRENCY}"))
}

fn unit_cell(record: &PropertyRecord, value: Option<u32>) -> String {
    if !record.shows_unit_details() {
        return NOT_APPLICABLE.to_owned();
    }
    value.map_or_else(|| NOT_SPECIFIED.to_owned(), |n| n.to_string())
}

/// Badge for a raw status value; matching is case-insensitive on both the
/// English names and the wire values.
pub fn status_badge(raw: Option<&str>) -> StatusBadge {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return StatusBadge { tone: BadgeTone::Neutral, label: NOT_AVAILABLE.to_owned() };
    };
    let known = match raw.to_lowercase().as_str() {
        "available" | "disponivel" => Some(PropertyStatus::Available),
        "rented" | "alugado" => Some(PropertyStatus::Rented),
        "maintenance" | "manutencao" => Some(PropertyStatus::Maintenance),
        _ => None,
    };
    match known {
        Some(status) => StatusBadge { tone: status_tone(status), label: status_label(status).to_owned() },
        None => StatusBadge { tone: BadgeTone::Neutral, label: raw.to_owned() },
    }
}

fn status_tone(status: PropertyStatus) -> BadgeTone {
    match status {
        PropertyStatus::Available => BadgeTone::Success,
        PropertyStatus::Rented => BadgeTone::Destructive,
        PropertyStatus::Maintenance => BadgeTone::Warning,
    }
}

pub fn status_label(status: PropertyStatus) -> &'static str {
    match status {
        PropertyStatus::Available => "Available",
        PropertyStatus::Rented => "Rented",
        PropertyStatus::Maintenance => "Maintenance",
    }
}

pub fn type_label(kind: PropertyType) -> &'static str {
    match kind {
        PropertyType::House => "House",
        PropertyType::Apartment => "Apartment",
        PropertyType::Commercial => "Commercial",
    }
}
