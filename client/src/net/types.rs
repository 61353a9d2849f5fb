//! Wire DTOs for the rental REST API.
//!
//! DESIGN
//! ======
//! Records coming back from the server are decoded leniently: identifiers may
//! be numbers or strings, decimals may arrive as numeric strings, and the
//! enumerated columns are kept raw so unknown values can still be displayed.
//! Outgoing payloads are strict and only ever built by form validation.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Sentinel used by the tenant selector for "no tenant".
pub const NO_TENANT: &str = "none";

/// Kind of rental unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyType {
    #[serde(rename = "casa")]
    House,
    #[serde(rename = "apartamento")]
    Apartment,
    #[serde(rename = "comercial")]
    Commercial,
}

impl PropertyType {
    pub const ALL: [Self; 3] = [Self::House, Self::Apartment, Self::Commercial];

    /// Parse a wire value (`casa`, `apartamento`, `comercial`).
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "casa" => Some(Self::House),
            "apartamento" => Some(Self::Apartment),
            "comercial" => Some(Self::Commercial),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::House => "casa",
            Self::Apartment => "apartamento",
            Self::Commercial => "comercial",
        }
    }

    /// Whether bedroom/bathroom counts apply to this kind of unit.
    pub fn requires_unit_details(self) -> bool {
        !matches!(self, Self::Commercial)
    }
}

/// Occupancy status of a property. The server assigns `Available` on create.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyStatus {
    #[default]
    #[serde(rename = "disponivel")]
    Available,
    #[serde(rename = "alugado")]
    Rented,
    #[serde(rename = "manutencao")]
    Maintenance,
}

impl PropertyStatus {
    pub const ALL: [Self; 3] = [Self::Available, Self::Rented, Self::Maintenance];

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "disponivel" => Some(Self::Available),
            "alugado" => Some(Self::Rented),
            "manutencao" => Some(Self::Maintenance),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Available => "disponivel",
            Self::Rented => "alugado",
            Self::Maintenance => "manutencao",
        }
    }
}

/// A property as returned by `/property/properties`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PropertyRecord {
    /// Server-assigned identifier; immutable after creation.
    #[serde(rename = "propertyId", deserialize_with = "deserialize_id")]
    pub property_id: String,
    #[serde(default)]
    pub address: String,
    /// Raw wire value; see [`PropertyRecord::kind`].
    #[serde(default)]
    pub property_type: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_f64")]
    pub rent_amount: Option<f64>,
    /// Raw wire value; see [`PropertyRecord::known_status`].
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_u32")]
    pub bedrooms: Option<u32>,
    #[serde(default, deserialize_with = "deserialize_optional_u32")]
    pub bathrooms: Option<u32>,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "tenantId", default, deserialize_with = "deserialize_optional_id")]
    pub tenant_id: Option<String>,
}

impl PropertyRecord {
    pub fn kind(&self) -> Option<PropertyType> {
        self.property_type.as_deref().and_then(PropertyType::parse)
    }

    pub fn known_status(&self) -> Option<PropertyStatus> {
        self.status.as_deref().and_then(PropertyStatus::parse)
    }

    /// Unit details are shown unless the record is known to be commercial.
    pub fn shows_unit_details(&self) -> bool {
        self.kind().map_or(true, PropertyType::requires_unit_details)
    }
}

/// Validated form output sent on create (no `status`) and update (with `status`).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PropertyPayload {
    pub address: String,
    pub property_type: PropertyType,
    pub rent_amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PropertyStatus>,
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<u32>,
    pub description: String,
    #[serde(rename = "tenantId")]
    pub tenant_id: Option<String>,
}

/// A tenant available for association.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tenant {
    #[serde(rename = "tenantId", deserialize_with = "deserialize_id")]
    pub tenant_id: String,
    #[serde(default)]
    pub name: String,
}

/// A user testimonial awaiting moderation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    #[serde(alias = "testimonyId", alias = "_id", deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, alias = "content", alias = "text")]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_u32")]
    pub rating: Option<u32>,
}

/// Envelope returned by `PUT /property/properties/{id}`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct UpdateResponse {
    pub property: PropertyRecord,
}

/// Result of decoding the list endpoint, which may not return an array.
#[derive(Clone, Debug, PartialEq)]
pub enum PropertyCollection {
    Valid(Vec<PropertyRecord>),
    Malformed,
}

impl Default for PropertyCollection {
    fn default() -> Self {
        Self::Valid(Vec::new())
    }
}

impl PropertyCollection {
    /// Decode a JSON value. Only a non-array body is `Malformed`; entries
    /// that fail to decode are skipped so the rest of the list still renders.
    pub fn from_value(value: serde_json::Value) -> Self {
        let serde_json::Value::Array(items) = value else {
            return Self::Malformed;
        };
        let records = items
            .into_iter()
            .enumerate()
            .filter_map(|(index, item)| match serde_json::from_value::<PropertyRecord>(item) {
                Ok(record) => Some(record),
                Err(e) => {
                    log::warn!("skipping property list entry {index}: {e}");
                    None
                }
            })
            .collect();
        Self::Valid(records)
    }

    pub fn records(&self) -> &[PropertyRecord] {
        match self {
            Self::Valid(items) => items,
            Self::Malformed => &[],
        }
    }
}

/// Error payload contract: `{ message }` and/or `{ errors: [{ field?, message }] }`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub errors: Vec<FieldError>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    #[serde(default)]
    pub field: Option<String>,
    pub message: String,
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        _ => Err(D::Error::custom("expected string or number identifier")),
    }
}

fn deserialize_optional_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::String(s) if s.is_empty() => Ok(None),
        serde_json::Value::String(s) => Ok(Some(s)),
        serde_json::Value::Number(n) => Ok(Some(n.to_string())),
        _ => Err(D::Error::custom("expected string or number identifier")),
    }
}

fn deserialize_optional_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::Number(n) => Ok(n.as_f64()),
        // Decimal columns are commonly serialized as strings.
        serde_json::Value::String(s) if s.trim().is_empty() => Ok(None),
        serde_json::Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| D::Error::custom(format!("expected decimal, got {s:?}"))),
        _ => Err(D::Error::custom("expected number")),
    }
}

/// Counts outside `u32` (negative, fractional, non-numeric) decode as absent.
fn deserialize_optional_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let count = match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(count.and_then(count_from_f64))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::float_cmp)]
fn count_from_f64(value: f64) -> Option<u32> {
    if value.is_finite() && value.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&value) {
        Some(value as u32)
    } else {
        None
    }
}
