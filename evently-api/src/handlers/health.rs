use actix_web::{web, HttpResponse};

use crate::database::Database;

pub async fn health(db: web::Data<Database>) -> HttpResponse {
    match db.ping().await {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({
            "status": "healthy",
            "database": "connected"
        })),
        Err(e) => {
            tracing::warn!(error = %e, "Health check could not reach the database");
            HttpResponse::ServiceUnavailable().json(serde_json::json!({
                "status": "unhealthy",
                "database": "disconnected"
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DatabaseConfig;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_unreachable_database_is_unhealthy() {
        let db = Database::connect(&DatabaseConfig {
            url: "postgres://evently@127.0.0.1:1/evently".to_string(),
            max_connections: 1,
            acquire_timeout_secs: 1,
        })
        .unwrap();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(db))
                .route("/health", web::get().to(health)),
        )
        .await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["status"], "unhealthy");
    }
}
