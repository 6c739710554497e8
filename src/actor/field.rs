use crate::actor::{parse, ActorIdentifier, ActorRef, FieldError};
use crate::store::EntityStore;
use tracing::debug;

/// Converts actors to and from their API representation.
///
/// Output is always the canonical `"kind:id"` string. Input is lenient about
/// absence (empty string or `0` mean "no actor") and strict about everything
/// else: any failure, malformed or unknown, becomes [`FieldError::UnknownActor`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ActorField;

impl ActorField {
    pub fn to_representation(&self, actor: &ActorRef) -> String {
        actor.actor_id()
    }

    pub async fn to_internal_value<S>(
        &self,
        data: impl Into<ActorIdentifier>,
        store: &S,
    ) -> Result<Option<ActorRef>, FieldError>
    where
        S: EntityStore + ?Sized,
    {
        let data = data.into();
        if data.is_empty() {
            return Ok(None);
        }
        match parse(data, store).await {
            Ok(actor) => Ok(Some(actor)),
            Err(e) => {
                debug!(error = %e, "Rejected actor input");
                Err(FieldError::UnknownActor)
            }
        }
    }
}
