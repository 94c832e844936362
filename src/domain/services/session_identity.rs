#[cfg(test)]
#[path = "session_identity_test.rs"]
mod tests;

use crate::domain::models::KeyValueStore;
use crate::domain::models::SessionId;

pub const SENDER_ID_KEY: &str = "sender-id";

pub struct SessionIdentity {}

impl SessionIdentity {
    /// Returns the stored sender ID, creating and persisting one on first run.
    /// Storage failures are logged and the generated ID is still returned, so
    /// chatting works for the lifetime of the process.
    pub async fn get_or_create(store: &(dyn KeyValueStore + Send + Sync)) -> SessionId {
        match store.get_item(SENDER_ID_KEY).await {
            Ok(Some(id)) if !id.is_empty() => {
                return SessionId::new(&id);
            }
            Ok(_) => (),
            Err(err) => {
                tracing::warn!(error = ?err, "Failed to read sender id from storage");
            }
        }

        let id = SessionId::generate();
        if let Err(err) = store.set_item(SENDER_ID_KEY, id.as_str()).await {
            tracing::warn!(error = ?err, "Failed to persist sender id, it will change on restart");
        }

        return id;
    }
}
