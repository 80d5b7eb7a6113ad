use shared_types::{CancelBookingRequest, CancelBookingResult};
use tracing::info;
use uuid::Uuid;

use super::FunctionError;
use crate::database::bookings::BookingStore;
use crate::helpers::space_resolver::is_uuid;
use crate::integrations::supabase_auth::CallerIdentity;

pub const FAILURE_MESSAGE: &str = "Failed to cancel booking";
pub const SUCCESS_MESSAGE: &str = "Booking cancelled successfully";

const MAX_REASON_LEN: usize = 500;

/// Cancels a booking on behalf of an organization admin. Whether the caller
/// may do so, and whether the booking is still cancellable, is decided by the
/// `cancel_booking_admin` procedure.
pub async fn cancel_booking_admin(
    store: &dyn BookingStore,
    caller: Option<&CallerIdentity>,
    request: &CancelBookingRequest,
) -> Result<CancelBookingResult, FunctionError> {
    let caller = caller.ok_or(FunctionError::Unauthorized)?;

    let booking_id = match request.booking_id.as_deref() {
        None | Some("") => {
            return Err(FunctionError::InvalidArgument(
                "bookingId is required".to_string(),
            ))
        }
        Some(id) if is_uuid(id) => Uuid::parse_str(id)
            .map_err(|e| FunctionError::InvalidArgument(format!("Invalid bookingId: {}", e)))?,
        Some(_) => {
            return Err(FunctionError::InvalidArgument(
                "bookingId must be a UUID".to_string(),
            ))
        }
    };

    let reason = request
        .reason
        .as_deref()
        .map(str::trim)
        .filter(|r| !r.is_empty());

    if reason.is_some_and(|r| r.chars().count() > MAX_REASON_LEN) {
        return Err(FunctionError::InvalidArgument(format!(
            "reason must be at most {} characters",
            MAX_REASON_LEN
        )));
    }

    info!(%booking_id, admin_id = %caller.user_id, "Cancelling booking");

    let result = store
        .cancel_booking_admin(booking_id, caller.user_id, reason)
        .await?;

    info!(%booking_id, status = %result.status, "Booking cancelled");

    Ok(result)
}
