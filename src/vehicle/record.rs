//! Vehicle record shapes.
//!
//! `VehicleRecord` is a complete, validated vehicle. `VehicleEntry` is what the
//! collection store actually holds: single inserts always produce complete
//! entries, while batch inserts and updates skip validation and may leave
//! fields absent.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Conventional status for a vehicle in service.
pub const STATUS_ACTIVE: &str = "active";
/// Conventional status for a parked or decommissioned vehicle.
pub const STATUS_INACTIVE: &str = "inactive";
/// Conventional status for a vehicle in the workshop.
pub const STATUS_MAINTENANCE: &str = "maintenance";

/// The conventional status values. Status is an open string; these are only
/// the values clients are expected to send.
pub const KNOWN_STATUSES: [&str; 3] = [STATUS_ACTIVE, STATUS_INACTIVE, STATUS_MAINTENANCE];

/// A fleet vehicle with all three fields present and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleRecord {
    pub id: String,
    pub name: String,
    pub status: String,
}

impl VehicleRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            status: status.into(),
        }
    }

    /// Whether the status is one of [`KNOWN_STATUSES`].
    pub fn has_known_status(&self) -> bool {
        KNOWN_STATUSES.contains(&self.status.as_str())
    }
}

/// A stored vehicle whose fields may be absent.
///
/// Absent fields are omitted when serialized, so a complete entry serializes
/// exactly like the [`VehicleRecord`] it came from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl VehicleEntry {
    /// Build an entry from arbitrary JSON, keeping only string fields.
    ///
    /// Never fails: non-object values produce an empty entry.
    pub fn from_value(value: &Value) -> Self {
        let field = |name: &str| {
            value
                .get(name)
                .and_then(Value::as_str)
                .map(str::to_string)
        };
        Self {
            id: field("id"),
            name: field("name"),
            status: field("status"),
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// The complete record, if every field is present and non-empty.
    pub fn to_record(&self) -> Option<VehicleRecord> {
        match (self.id(), self.name(), self.status()) {
            (Some(id), Some(name), Some(status))
                if !id.is_empty() && !name.is_empty() && !status.is_empty() =>
            {
                Some(VehicleRecord::new(id, name, status))
            }
            _ => None,
        }
    }
}

impl From<VehicleRecord> for VehicleEntry {
    fn from(record: VehicleRecord) -> Self {
        Self {
            id: Some(record.id),
            name: Some(record.name),
            status: Some(record.status),
        }
    }
}
