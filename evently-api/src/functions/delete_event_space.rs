use shared_types::{DeleteEventSpaceRequest, DeleteEventSpaceResult};
use tracing::info;

use super::FunctionError;
use crate::database::event_spaces::EventSpaceStore;
use crate::helpers::space_resolver::resolve_space_id;
use crate::integrations::supabase_auth::CallerIdentity;

pub const FAILURE_MESSAGE: &str = "Failed to delete event space";

/// Deletes an event space named by id, slug or name, optionally moving its
/// events into another space first.
///
/// Permission checks, the event move and the delete itself all happen inside
/// the `delete_event_space_cascade` procedure; this only resolves identifiers
/// and hands over.
pub async fn delete_event_space(
    store: &dyn EventSpaceStore,
    caller: Option<&CallerIdentity>,
    request: &DeleteEventSpaceRequest,
) -> Result<DeleteEventSpaceResult, FunctionError> {
    let caller = caller.ok_or(FunctionError::Unauthorized)?;

    let space_identifier = request
        .space_id
        .as_deref()
        .filter(|id| !id.trim().is_empty())
        .ok_or_else(|| FunctionError::InvalidArgument("spaceId is required".to_string()))?;

    let space_id = resolve_space_id(store, space_identifier).await?;

    let move_to_space_id = match request
        .move_events_to_space_id
        .as_deref()
        .filter(|id| !id.is_empty())
    {
        Some(identifier) => Some(resolve_space_id(store, identifier).await?),
        None => None,
    };

    if move_to_space_id == Some(space_id) {
        return Err(FunctionError::InvalidArgument(
            "Cannot move events into the space being deleted".to_string(),
        ));
    }

    info!(
        %space_id,
        caller_id = %caller.user_id,
        move_to_space_id = ?move_to_space_id,
        "Deleting event space"
    );

    let result = store
        .delete_space_cascade(space_id, caller.user_id, move_to_space_id)
        .await?;

    info!(%space_id, events_moved = result.events_moved, "Event space deleted");

    Ok(result)
}

pub fn success_message(result: &DeleteEventSpaceResult) -> String {
    match result.events_moved {
        0 => "Event space deleted successfully.".to_string(),
        moved => format!(
            "Event space deleted successfully. {} events were moved.",
            moved
        ),
    }
}
