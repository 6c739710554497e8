use crate::clients::RecordClient;
use crate::framework::{StoreError, TableClient};
use crate::model::{Team, TeamCreate, TeamUpdate};
use crate::team_table::TeamError;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Team table.
#[derive(Clone)]
pub struct TeamClient {
    inner: TableClient<Team>,
}

impl TeamClient {
    pub fn new(inner: TableClient<Team>) -> Self {
        Self { inner }
    }

    /// The underlying generic client, for code that speaks [`StoreError`].
    pub fn table(&self) -> &TableClient<Team> {
        &self.inner
    }
}

#[async_trait]
impl RecordClient<Team> for TeamClient {
    type Error = TeamError;

    fn inner(&self) -> &TableClient<Team> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        match e {
            StoreError::Record(inner) => match inner.downcast::<TeamError>() {
                Ok(team_error) => *team_error,
                Err(other) => TeamError::TableCommunicationError(other.to_string()),
            },
            other => TeamError::TableCommunicationError(other.to_string()),
        }
    }
}

impl TeamClient {
    #[instrument(skip(self))]
    pub async fn create_team(&self, params: TeamCreate) -> Result<u64, TeamError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_team(&self, id: u64, update: TeamUpdate) -> Result<Team, TeamError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(|e| match e {
            StoreError::NotFound(_) => TeamError::NotFound(id),
            other => Self::map_error(other),
        })
    }

    /// Finds the team with `slug` inside one organization.
    pub async fn by_slug(&self, organization_id: u64, slug: &str) -> Result<Team, TeamError> {
        self.find(slug.to_string())
            .await?
            .into_iter()
            .find(|team| team.organization_id == organization_id)
            .ok_or_else(|| TeamError::UnknownSlug {
                organization_id,
                slug: slug.to_string(),
            })
    }
}
