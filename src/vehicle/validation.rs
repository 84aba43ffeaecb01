//! Shape validation for incoming vehicle payloads.

use serde_json::Value;
use thiserror::Error;

use super::record::VehicleRecord;

/// Fields every vehicle must carry, in the order they are checked.
pub const REQUIRED_FIELDS: [&str; 3] = ["id", "name", "status"];

/// Why a candidate payload is not a valid vehicle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The field is absent, null, not a string, or empty.
    #[error("missing or empty field: {0}")]
    MissingField(&'static str),

    /// The id does not look like `V<digits>` (only under a strict policy).
    #[error("invalid vehicle id format: {0}")]
    InvalidIdFormat(String),
}

/// Rules applied on top of the required-field check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationPolicy {
    /// Require ids of the form `V` followed by one or more digits.
    pub enforce_id_format: bool,
}

impl ValidationPolicy {
    pub fn strict() -> Self {
        Self {
            enforce_id_format: true,
        }
    }
}

/// `true` iff `id`, `name` and `status` are all present non-empty strings.
pub fn is_valid(candidate: &Value) -> bool {
    REQUIRED_FIELDS
        .iter()
        .all(|field| non_empty_str(candidate, field).is_some())
}

/// Check a candidate payload and turn it into a record.
pub fn validate(candidate: &Value, policy: &ValidationPolicy) -> Result<VehicleRecord, ValidationError> {
    let id = required(candidate, "id")?;
    let name = required(candidate, "name")?;
    let status = required(candidate, "status")?;

    if policy.enforce_id_format && !is_vehicle_id(id) {
        return Err(ValidationError::InvalidIdFormat(id.to_string()));
    }

    Ok(VehicleRecord::new(id, name, status))
}

/// Re-check a record built in code rather than parsed from a payload.
pub fn check_record(record: &VehicleRecord) -> Result<(), ValidationError> {
    for (field, value) in REQUIRED_FIELDS
        .into_iter()
        .zip([&record.id, &record.name, &record.status])
    {
        if value.is_empty() {
            return Err(ValidationError::MissingField(field));
        }
    }
    Ok(())
}

/// `V` followed by one or more ASCII digits.
pub fn is_vehicle_id(id: &str) -> bool {
    match id.strip_prefix('V') {
        Some(digits) => !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()),
        None => false,
    }
}

fn required<'a>(candidate: &'a Value, field: &'static str) -> Result<&'a str, ValidationError> {
    non_empty_str(candidate, field).ok_or(ValidationError::MissingField(field))
}

fn non_empty_str<'a>(candidate: &'a Value, field: &str) -> Option<&'a str> {
    candidate
        .get(field)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}
