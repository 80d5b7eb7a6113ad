//! In-memory stand-ins for the store and auth seams

use async_trait::async_trait;
use shared_types::{CancelBookingResult, DeleteEventSpaceResult, EventSpace};
use std::sync::Mutex;
use uuid::Uuid;

use crate::database::bookings::BookingStore;
use crate::database::event_spaces::{EventSpaceStore, SpaceMatch};
use crate::database::StoreError;
use crate::integrations::supabase_auth::{AuthVerifier, CallerIdentity};

/// Mirrors the SQL lookup and records every procedure call
#[derive(Default)]
pub struct MemorySpaceStore {
    pub spaces: Vec<EventSpace>,
    pub lookups: Mutex<Vec<String>>,
    pub deletes: Mutex<Vec<(Uuid, Uuid, Option<Uuid>)>>,
    pub events_moved: i64,
    pub procedure_error: Option<String>,
}

impl MemorySpaceStore {
    pub fn with_spaces(spaces: Vec<EventSpace>) -> Self {
        Self {
            spaces,
            ..Default::default()
        }
    }

    pub fn lookup_count(&self) -> usize {
        self.lookups.lock().unwrap().len()
    }

    pub fn deletes(&self) -> Vec<(Uuid, Uuid, Option<Uuid>)> {
        self.deletes.lock().unwrap().clone()
    }
}

#[async_trait]
impl EventSpaceStore for MemorySpaceStore {
    async fn find_space_matches(&self, identifier: &str) -> Result<Vec<SpaceMatch>, StoreError> {
        self.lookups.lock().unwrap().push(identifier.to_string());

        let mut matches: Vec<SpaceMatch> = self
            .spaces
            .iter()
            .filter_map(|space| {
                let exact = space.id.to_string() == identifier || space.slug == identifier;
                let by_name = space.name.to_lowercase() == identifier.to_lowercase();
                (exact || by_name).then_some(SpaceMatch { id: space.id, exact })
            })
            .collect();
        matches.sort_by_key(|m| !m.exact);
        matches.truncate(2);
        Ok(matches)
    }

    async fn delete_space_cascade(
        &self,
        space_id: Uuid,
        caller_id: Uuid,
        move_to_space_id: Option<Uuid>,
    ) -> Result<DeleteEventSpaceResult, StoreError> {
        self.deletes
            .lock()
            .unwrap()
            .push((space_id, caller_id, move_to_space_id));

        if let Some(msg) = &self.procedure_error {
            return Err(StoreError::Procedure(msg.clone()));
        }
        Ok(DeleteEventSpaceResult {
            events_moved: self.events_moved,
            ..Default::default()
        })
    }
}

#[derive(Default)]
pub struct MemoryBookingStore {
    pub cancellations: Mutex<Vec<(Uuid, Uuid, Option<String>)>>,
    pub procedure_error: Option<String>,
}

impl MemoryBookingStore {
    pub fn cancellations(&self) -> Vec<(Uuid, Uuid, Option<String>)> {
        self.cancellations.lock().unwrap().clone()
    }
}

#[async_trait]
impl BookingStore for MemoryBookingStore {
    async fn cancel_booking_admin(
        &self,
        booking_id: Uuid,
        admin_id: Uuid,
        reason: Option<&str>,
    ) -> Result<CancelBookingResult, StoreError> {
        self.cancellations
            .lock()
            .unwrap()
            .push((booking_id, admin_id, reason.map(str::to_string)));

        if let Some(msg) = &self.procedure_error {
            return Err(StoreError::Procedure(msg.clone()));
        }
        Ok(CancelBookingResult {
            booking_id,
            status: "cancelled".to_string(),
            extra: Default::default(),
        })
    }
}

/// Accepts exactly one token
pub struct StaticAuthVerifier {
    pub token: String,
    pub caller: CallerIdentity,
}

impl StaticAuthVerifier {
    pub fn new(token: &str) -> Self {
        Self {
            token: token.to_string(),
            caller: CallerIdentity {
                user_id: Uuid::new_v4(),
            },
        }
    }
}

#[async_trait]
impl AuthVerifier for StaticAuthVerifier {
    async fn verify(&self, access_token: &str) -> anyhow::Result<Option<CallerIdentity>> {
        Ok((access_token == self.token).then_some(self.caller))
    }
}

pub fn space(name: &str, slug: &str) -> EventSpace {
    EventSpace {
        id: Uuid::new_v4(),
        name: name.to_string(),
        slug: slug.to_string(),
    }
}

pub fn caller() -> CallerIdentity {
    CallerIdentity {
        user_id: Uuid::new_v4(),
    }
}
