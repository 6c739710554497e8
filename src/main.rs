//! Demo: start a directory, seed it, and resolve a handful of identifiers.

use actor_resolver::actor::{ActorField, ActorIdentifier, ActorRef};
use actor_resolver::config::DirectoryConfig;
use actor_resolver::lifecycle::{setup_tracing, DirectorySystem};
use actor_resolver::model::{TeamCreate, UserCreate};
use std::collections::HashMap;
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = DirectoryConfig::from_env()?;
    let system = DirectorySystem::new(config)?;

    let span = tracing::info_span!("seeding");
    let (maisey, backend) = async {
        let maisey = system
            .users
            .create_user(UserCreate::new("maiseythedog", "maisey@dogsrule.com"))
            .await?;
        system
            .users
            .create_user(UserCreate::new("alice", "alice@example.com"))
            .await?;
        let backend = system
            .teams
            .create_team(TeamCreate::new(1, "backend", "Backend"))
            .await?;
        Ok::<_, Box<dyn std::error::Error>>((maisey, backend))
    }
    .instrument(span)
    .await?;
    info!(maisey, backend, "Directory seeded");

    let resolver = system.resolver();
    let field = ActorField;

    let inputs: Vec<ActorIdentifier> = vec![
        maisey.into(),
        "2".into(),
        "team:1".into(),
        "maisey@dogsrule.com".into(),
        "team:abc".into(),
        "nobody".into(),
    ];

    let span = tracing::info_span!("parsing");
    let mut parsed = Vec::new();
    async {
        for input in inputs {
            match resolver.parse(input.clone()).await {
                Ok(actor) => {
                    info!(?input, actor = %field.to_representation(&actor), "Parsed");
                    parsed.push(actor);
                }
                Err(e) => warn!(?input, error = %e, "Rejected"),
            }
        }
    }
    .instrument(span)
    .await;

    // One lookup per kind, regardless of how many references.
    parsed.push(ActorRef::team(99));
    let resolved = resolver.resolve_many(&parsed).await?;
    for entity in &resolved {
        info!(actor = %entity.actor_ref(), name = entity.display_name(), "Resolved");
    }

    let owners = HashMap::from([("owner", ActorRef::user(maisey)), ("ghost", ActorRef::team(99))]);
    match resolver.resolve_dict(owners).await {
        Ok(map) => info!(resolved = map.len(), "Resolved owners"),
        Err(e) => warn!(error = %e, "Owner lookup failed"),
    }

    drop(resolver);
    system.shutdown().await?;
    info!("Demo completed successfully");
    Ok(())
}
