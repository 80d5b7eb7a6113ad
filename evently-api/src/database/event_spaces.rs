use async_trait::async_trait;
use shared_types::DeleteEventSpaceResult;
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use super::StoreError;

/// A candidate row for a non-UUID space identifier.
/// `exact` is set when the identifier equals the row's id or slug, as opposed
/// to a case-insensitive name match.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct SpaceMatch {
    pub id: Uuid,
    pub exact: bool,
}

#[async_trait]
pub trait EventSpaceStore: Send + Sync {
    /// Returns at most two candidates, exact matches first
    async fn find_space_matches(&self, identifier: &str) -> Result<Vec<SpaceMatch>, StoreError>;

    /// Runs the `delete_event_space_cascade` procedure, which checks the
    /// caller's permission, moves or blocks on the space's events and deletes
    /// the space in one transaction.
    async fn delete_space_cascade(
        &self,
        space_id: Uuid,
        caller_id: Uuid,
        move_to_space_id: Option<Uuid>,
    ) -> Result<DeleteEventSpaceResult, StoreError>;
}

pub struct PgEventSpaceStore {
    pool: PgPool,
}

impl PgEventSpaceStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventSpaceStore for PgEventSpaceStore {
    async fn find_space_matches(&self, identifier: &str) -> Result<Vec<SpaceMatch>, StoreError> {
        let matches = sqlx::query_as::<_, SpaceMatch>(
            r#"
            SELECT id, (id::text = $1 OR COALESCE(slug = $1, false)) AS exact
            FROM event_spaces
            WHERE id::text = $1 OR slug = $1 OR lower(name) = lower($1)
            ORDER BY exact DESC
            LIMIT 2
            "#,
        )
        .bind(identifier)
        .fetch_all(&self.pool)
        .await?;

        Ok(matches)
    }

    async fn delete_space_cascade(
        &self,
        space_id: Uuid,
        caller_id: Uuid,
        move_to_space_id: Option<Uuid>,
    ) -> Result<DeleteEventSpaceResult, StoreError> {
        let (Json(result),): (Json<DeleteEventSpaceResult>,) = sqlx::query_as(
            "SELECT delete_event_space_cascade(p_space_id => $1, p_user_id => $2, p_move_to_space_id => $3)",
        )
        .bind(space_id)
        .bind(caller_id)
        .bind(move_to_space_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(result)
    }
}
