use crate::clients::{TeamClient, UserClient};
use crate::config::{ConfigError, DirectoryConfig};
use crate::resolver::ActorResolver;
use crate::store::{KindRegistry, RegistryError};
use crate::{team_table, user_table};
use thiserror::Error;
use tracing::{error, info};

/// Errors raised while starting or stopping a [`DirectorySystem`].
#[derive(Debug, Error)]
pub enum SystemError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("Table task failed: {0}")]
    TaskFailed(#[from] tokio::task::JoinError),
}

/// The running actor directory: one table per actor kind plus the registry over them.
///
/// `DirectorySystem` is responsible for:
/// - **Lifecycle Management**: starting and stopping the user and team tables
/// - **Wiring**: building the [`KindRegistry`] once, from the table clients
///
/// # Example
///
/// ```ignore
/// let system = DirectorySystem::new(DirectoryConfig::from_env()?)?;
/// let alice = system.users.create_user(UserCreate::new("alice", "alice@example.com")).await?;
///
/// let resolver = system.resolver();
/// let actor = resolver.parse("alice").await?;
/// let entity = resolver.resolve_one(actor).await?;
///
/// drop(resolver);
/// system.shutdown().await?;
/// ```
pub struct DirectorySystem {
    /// Client for the User table
    pub users: UserClient,

    /// Client for the Team table
    pub teams: TeamClient,

    registry: KindRegistry,

    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl DirectorySystem {
    /// Starts both tables and builds the kind registry.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(config: DirectoryConfig) -> Result<Self, SystemError> {
        config.validate()?;

        let (user_actor, users) = user_table::new(config.table_buffer);
        let (team_actor, teams) = team_table::new(config.table_buffer);
        let registry = KindRegistry::new(users.clone(), teams.clone())?;

        let handles = vec![tokio::spawn(user_actor.run()), tokio::spawn(team_actor.run())];
        info!(table_buffer = config.table_buffer, "Directory started");

        Ok(Self {
            users,
            teams,
            registry,
            handles,
        })
    }

    /// The registry, for callers that want the raw [`EntityStore`](crate::store::EntityStore).
    pub fn registry(&self) -> KindRegistry {
        self.registry.clone()
    }

    /// A resolver reading from this directory.
    pub fn resolver(&self) -> ActorResolver<KindRegistry> {
        ActorResolver::new(self.registry())
    }

    /// Gracefully shuts the directory down.
    ///
    /// Dropping the clients closes the table channels and each table exits its
    /// loop. Registries and resolvers handed out earlier hold client clones:
    /// drop them first, or the tables keep running and this call waits for them.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down directory...");

        drop(self.users);
        drop(self.teams);
        drop(self.registry);

        // Join every table before reporting the first failure.
        let mut first_failure = None;
        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Table task failed");
                first_failure.get_or_insert(e);
            }
        }
        if let Some(e) = first_failure {
            return Err(e.into());
        }

        info!("Directory shutdown complete.");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    #[tokio::test]
    async fn test_shutdown_joins_every_table_before_failing() {
        let mut system = DirectorySystem::new(DirectoryConfig::default()).unwrap();
        let finished = Arc::new(AtomicBool::new(false));
        let flag = finished.clone();
        system
            .handles
            .insert(0, tokio::spawn(async { panic!("table crashed") }));
        system.handles.push(tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            flag.store(true, Ordering::SeqCst);
        }));

        let err = system.shutdown().await.unwrap_err();
        assert!(matches!(err, SystemError::TaskFailed(_)));
        assert!(finished.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_rejects_invalid_config() {
        let result = DirectorySystem::new(DirectoryConfig { table_buffer: 0 });
        assert!(matches!(result, Err(SystemError::Config(ConfigError::ZeroBuffer))));
    }
}
