use regex::Regex;
use std::sync::OnceLock;
use uuid::Uuid;

use crate::database::event_spaces::{EventSpaceStore, SpaceMatch};
use crate::database::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("Event space not found: {0}")]
    NotFound(String),
    /// Several spaces share the name; resolving would mean picking one at random
    #[error("More than one event space is named \"{0}\"; use its slug or id instead")]
    Ambiguous(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

fn uuid_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$")
            .expect("UUID pattern is valid")
    })
}

/// True for canonical `8-4-4-4-12` hex UUIDs, in either case
pub fn is_uuid(identifier: &str) -> bool {
    uuid_pattern().is_match(identifier)
}

/// Maps a UUID, slug or display name to the id of the event space it names.
///
/// UUIDs are taken as already resolved and never looked up. Anything else is
/// matched against id and slug exactly, then against name case-insensitively.
pub async fn resolve_space_id(
    store: &dyn EventSpaceStore,
    identifier: &str,
) -> Result<Uuid, ResolveError> {
    if is_uuid(identifier) {
        return Uuid::parse_str(identifier)
            .map_err(|_| ResolveError::NotFound(identifier.to_string()));
    }

    if identifier.trim().is_empty() {
        return Err(ResolveError::NotFound(identifier.to_string()));
    }

    let matches = store.find_space_matches(identifier).await?;
    pick_match(identifier, &matches)
}

fn pick_match(identifier: &str, matches: &[SpaceMatch]) -> Result<Uuid, ResolveError> {
    if let Some(exact) = matches.iter().find(|m| m.exact) {
        return Ok(exact.id);
    }

    match matches {
        [] => Err(ResolveError::NotFound(identifier.to_string())),
        [only] => Ok(only.id),
        _ => Err(ResolveError::Ambiguous(identifier.to_string())),
    }
}
