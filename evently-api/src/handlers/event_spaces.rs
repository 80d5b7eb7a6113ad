use actix_web::{web, HttpRequest, HttpResponse};
use shared_types::{DeleteEventSpaceRequest, FunctionSuccess};

use super::{parse_body, reject, FailedFunction};
use crate::database::event_spaces::EventSpaceStore;
use crate::functions::delete_event_space::{self as function, FAILURE_MESSAGE};
use crate::functions::FunctionError;
use crate::helpers::auth::caller_identity;
use crate::integrations::supabase_auth::AuthVerifier;

/// `POST /functions/v1/delete-event-space`
pub async fn delete_event_space(
    req: HttpRequest,
    body: web::Bytes,
    store: web::Data<dyn EventSpaceStore>,
    verifier: web::Data<dyn AuthVerifier>,
) -> Result<HttpResponse, FailedFunction> {
    let caller = caller_identity(&req, verifier.get_ref())
        .await
        .ok_or_else(|| reject(FunctionError::Unauthorized, FAILURE_MESSAGE))?;

    let request: DeleteEventSpaceRequest =
        parse_body(&body).map_err(|e| reject(e, FAILURE_MESSAGE))?;

    let result = function::delete_event_space(store.get_ref(), Some(&caller), &request)
        .await
        .map_err(|e| reject(e, FAILURE_MESSAGE))?;

    let message = function::success_message(&result);
    Ok(HttpResponse::Ok().json(FunctionSuccess::new(result, message)))
}
