use actix_web::http::header::AUTHORIZATION;
use actix_web::HttpRequest;

use crate::integrations::supabase_auth::{AuthVerifier, CallerIdentity};

/// Extracts the token from an `Authorization: Bearer <token>` header
pub fn bearer_token(req: &HttpRequest) -> Option<&str> {
    let value = req.headers().get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();

    if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
        return None;
    }
    Some(token)
}

/// Resolves the request's caller. Any failure along the way (missing header,
/// rejected token, auth service unreachable) leaves the caller absent.
pub async fn caller_identity(
    req: &HttpRequest,
    verifier: &dyn AuthVerifier,
) -> Option<CallerIdentity> {
    let token = bearer_token(req)?;

    match verifier.verify(token).await {
        Ok(caller) => caller,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to verify access token");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_bearer_token() {
        let req = TestRequest::default()
            .insert_header((AUTHORIZATION, "Bearer abc.def"))
            .to_http_request();
        assert_eq!(bearer_token(&req), Some("abc.def"));

        let req = TestRequest::default()
            .insert_header((AUTHORIZATION, "bearer   token "))
            .to_http_request();
        assert_eq!(bearer_token(&req), Some("token"));
    }

    #[test]
    fn test_bearer_token_rejects_other_forms() {
        let req = TestRequest::default().to_http_request();
        assert!(bearer_token(&req).is_none());

        let req = TestRequest::default()
            .insert_header((AUTHORIZATION, "Basic dXNlcjpwYXNz"))
            .to_http_request();
        assert!(bearer_token(&req).is_none());

        let req = TestRequest::default()
            .insert_header((AUTHORIZATION, "Bearer "))
            .to_http_request();
        assert!(bearer_token(&req).is_none());
    }
}
