use async_trait::async_trait;
use shared_types::CancelBookingResult;
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use super::StoreError;

#[async_trait]
pub trait BookingStore: Send + Sync {
    /// Runs `cancel_booking_admin`, which verifies the caller administers the
    /// booking's organization before marking it cancelled.
    async fn cancel_booking_admin(
        &self,
        booking_id: Uuid,
        admin_id: Uuid,
        reason: Option<&str>,
    ) -> Result<CancelBookingResult, StoreError>;
}

pub struct PgBookingStore {
    pool: PgPool,
}

impl PgBookingStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingStore for PgBookingStore {
    async fn cancel_booking_admin(
        &self,
        booking_id: Uuid,
        admin_id: Uuid,
        reason: Option<&str>,
    ) -> Result<CancelBookingResult, StoreError> {
        let (Json(result),): (Json<CancelBookingResult>,) = sqlx::query_as(
            "SELECT cancel_booking_admin(p_booking_id => $1, p_admin_id => $2, p_reason => $3)",
        )
        .bind(booking_id)
        .bind(admin_id)
        .bind(reason)
        .fetch_one(&self.pool)
        .await?;

        Ok(result)
    }
}
