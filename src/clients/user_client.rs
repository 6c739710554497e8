use crate::clients::RecordClient;
use crate::framework::{StoreError, TableClient};
use crate::model::{User, UserCreate, UserUpdate};
use crate::user_table::UserError;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the User table.
#[derive(Clone)]
pub struct UserClient {
    inner: TableClient<User>,
}

impl UserClient {
    pub fn new(inner: TableClient<User>) -> Self {
        Self { inner }
    }

    /// The underlying generic client, for code that speaks [`StoreError`].
    pub fn table(&self) -> &TableClient<User> {
        &self.inner
    }
}

#[async_trait]
impl RecordClient<User> for UserClient {
    type Error = UserError;

    fn inner(&self) -> &TableClient<User> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        match e {
            StoreError::Record(inner) => match inner.downcast::<UserError>() {
                Ok(user_error) => *user_error,
                Err(other) => UserError::TableCommunicationError(other.to_string()),
            },
            other => UserError::TableCommunicationError(other.to_string()),
        }
    }
}

impl UserClient {
    #[instrument(skip(self))]
    pub async fn create_user(&self, params: UserCreate) -> Result<u64, UserError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_user(&self, id: u64, update: UserUpdate) -> Result<User, UserError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(|e| match e {
            StoreError::NotFound(_) => UserError::NotFound(id),
            other => Self::map_error(other),
        })
    }

    /// Marks a user inactive. The row stays resolvable by id.
    pub async fn deactivate(&self, id: u64) -> Result<User, UserError> {
        let update = UserUpdate {
            is_active: Some(false),
            ..Default::default()
        };
        self.update_user(id, update).await
    }

    /// Fetches a user that must exist.
    pub async fn require(&self, id: u64) -> Result<User, UserError> {
        self.get(id).await?.ok_or(UserError::NotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::MockClient;

    #[tokio::test]
    async fn test_record_errors_keep_their_type() {
        let mut mock = MockClient::<User>::new();
        mock.expect_create().return_ok(7);
        mock.expect_create()
            .return_err(StoreError::Record(Box::new(UserError::ValidationError(
                "username \"alice\" is already taken".into(),
            ))));
        mock.expect_create().return_err(StoreError::TableClosed);

        let client = UserClient::new(mock.client());
        let params = || UserCreate::new("alice", "alice@example.com");

        assert_eq!(client.create_user(params()).await, Ok(7));
        assert!(matches!(
            client.create_user(params()).await,
            Err(UserError::ValidationError(msg)) if msg.contains("already taken")
        ));
        assert!(matches!(
            client.create_user(params()).await,
            Err(UserError::TableCommunicationError(_))
        ));
        mock.verify();
    }
}
