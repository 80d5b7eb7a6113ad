use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Body of `POST /functions/v1/cancel-booking-admin`
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CancelBookingRequest {
    #[serde(default)]
    pub booking_id: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
}

/// Result reported by the `cancel_booking_admin` procedure
#[derive(Debug, Clone, Serialize, Deserialize, TS, PartialEq)]
#[ts(export)]
pub struct CancelBookingResult {
    pub booking_id: Uuid,
    pub status: String,
    #[serde(flatten)]
    #[ts(skip)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
