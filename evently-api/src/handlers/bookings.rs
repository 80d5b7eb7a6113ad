use actix_web::{web, HttpRequest, HttpResponse};
use shared_types::{CancelBookingRequest, FunctionSuccess};

use super::{parse_body, reject, FailedFunction};
use crate::database::bookings::BookingStore;
use crate::functions::cancel_booking_admin::{self as function, FAILURE_MESSAGE, SUCCESS_MESSAGE};
use crate::functions::FunctionError;
use crate::helpers::auth::caller_identity;
use crate::integrations::supabase_auth::AuthVerifier;

/// `POST /functions/v1/cancel-booking-admin`
pub async fn cancel_booking_admin(
    req: HttpRequest,
    body: web::Bytes,
    store: web::Data<dyn BookingStore>,
    verifier: web::Data<dyn AuthVerifier>,
) -> Result<HttpResponse, FailedFunction> {
    let caller = caller_identity(&req, verifier.get_ref())
        .await
        .ok_or_else(|| reject(FunctionError::Unauthorized, FAILURE_MESSAGE))?;

    let request: CancelBookingRequest =
        parse_body(&body).map_err(|e| reject(e, FAILURE_MESSAGE))?;

    let result = function::cancel_booking_admin(store.get_ref(), Some(&caller), &request)
        .await
        .map_err(|e| reject(e, FAILURE_MESSAGE))?;

    Ok(HttpResponse::Ok().json(FunctionSuccess::new(result, SUCCESS_MESSAGE)))
}
