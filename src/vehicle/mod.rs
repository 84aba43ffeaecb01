//! Vehicle record model and the validation rules applied to incoming payloads.

mod record;
mod validation;

pub use record::{
    VehicleEntry, VehicleRecord, KNOWN_STATUSES, STATUS_ACTIVE, STATUS_INACTIVE,
    STATUS_MAINTENANCE,
};
pub use validation::{
    check_record, is_valid, is_vehicle_id, validate, ValidationError, ValidationPolicy, REQUIRED_FIELDS,
};
