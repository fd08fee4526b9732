//! Ingest family records from API payloads and persist session preferences.
//!
//! # Example
//!
//! ```
//! use familyaid::json::families_from_json;
//!
//! let families = families_from_json(r#"[
//!     {"fullName": "Ahmed Hassan", "nationalId": "28501150100011", "members": null}
//! ]"#).unwrap();
//! assert!(families[0].members.is_empty());
//! ```

use serde::Deserialize;

use crate::core::{AidError, FamilyRecord, Preferences};

#[derive(Deserialize)]
#[serde(untagged)]
enum FamiliesPayload {
    List(Vec<FamilyRecord>),
    Envelope { data: Vec<FamilyRecord> },
}

/// Decode a list of families: either a bare JSON array or a
/// `{"data": [...]}` envelope.
pub fn families_from_json(payload: &str) -> Result<Vec<FamilyRecord>, AidError> {
    let families = match serde_json::from_str::<FamiliesPayload>(payload) {
        Ok(FamiliesPayload::List(families)) | Ok(FamiliesPayload::Envelope { data: families }) => {
            families
        }
        Err(_) => {
            // Untagged errors say nothing useful; retry as a plain list for the message
            let err = serde_json::from_str::<Vec<FamilyRecord>>(payload)
                .err()
                .map(|e| e.to_string())
                .unwrap_or_else(|| "unrecognized payload".into());
            tracing::debug!(%err, "rejected families payload");
            return Err(AidError::Json(err));
        }
    };
    tracing::debug!(families = families.len(), "decoded families payload");
    Ok(families)
}

/// Decode a single family record.
pub fn family_from_json(payload: &str) -> Result<FamilyRecord, AidError> {
    serde_json::from_str(payload).map_err(|e| AidError::Json(e.to_string()))
}

/// Load stored session preferences. Missing fields fall back to defaults.
pub fn preferences_from_json(payload: &str) -> Result<Preferences, AidError> {
    serde_json::from_str(payload).map_err(|e| AidError::Json(e.to_string()))
}

/// Serialize session preferences for storage.
pub fn preferences_to_json(preferences: &Preferences) -> Result<String, AidError> {
    serde_json::to_string(preferences).map_err(|e| AidError::Json(e.to_string()))
}
