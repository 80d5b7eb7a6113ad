use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// A named container grouping events within an organization
#[derive(Debug, Clone, Serialize, Deserialize, TS, PartialEq, Eq)]
#[ts(export)]
pub struct EventSpace {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
}

/// Body of `POST /functions/v1/delete-event-space`.
///
/// Both identifiers accept a UUID, a slug or a display name. They are optional
/// at the schema level so a missing `spaceId` is reported in the function's own
/// failure shape rather than as a deserialization error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DeleteEventSpaceRequest {
    #[serde(default)]
    pub space_id: Option<String>,
    #[serde(default)]
    pub move_events_to_space_id: Option<String>,
}

/// Result reported by the `delete_event_space_cascade` procedure.
/// Keys other than `events_moved` are passed through untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS, PartialEq)]
#[ts(export)]
pub struct DeleteEventSpaceResult {
    #[serde(default)]
    pub events_moved: i64,
    #[serde(flatten)]
    #[ts(skip)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
