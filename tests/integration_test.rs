use actor_resolver::actor::{ActorField, ActorKind, ActorRef, FieldError, ParseError, ResolvedActor};
use actor_resolver::clients::RecordClient;
use actor_resolver::config::DirectoryConfig;
use actor_resolver::framework::StoreError;
use actor_resolver::lifecycle::DirectorySystem;
use actor_resolver::model::{TeamCreate, TeamUpdate, UserCreate};
use actor_resolver::resolver::{ActorResolver, ResolveError};
use actor_resolver::store::{EntityStore, KindRegistry};
use actor_resolver::team_table::TeamError;
use actor_resolver::user_table::UserError;
use async_trait::async_trait;
use std::collections::{BTreeSet, HashMap};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Passes through to the real registry, counting every store call.
struct CountingStore {
    inner: KindRegistry,
    by_id: AtomicUsize,
    by_ids: AtomicUsize,
    lookups: AtomicUsize,
}

#[async_trait]
impl EntityStore for CountingStore {
    async fn fetch_by_id(
        &self,
        kind: ActorKind,
        id: u64,
    ) -> Result<Option<ResolvedActor>, StoreError> {
        self.by_id.fetch_add(1, Ordering::SeqCst);
        self.inner.fetch_by_id(kind, id).await
    }

    async fn fetch_by_ids(
        &self,
        kind: ActorKind,
        ids: &BTreeSet<u64>,
    ) -> Result<Vec<ResolvedActor>, StoreError> {
        self.by_ids.fetch_add(1, Ordering::SeqCst);
        self.inner.fetch_by_ids(kind, ids).await
    }

    async fn find_principals_by_lookup_key(
        &self,
        key: &str,
    ) -> Result<Vec<ResolvedActor>, StoreError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.inner.find_principals_by_lookup_key(key).await
    }
}

async fn seeded() -> DirectorySystem {
    let system = DirectorySystem::new(DirectoryConfig::default()).unwrap();
    for (username, email) in [
        ("maiseythedog", "maisey@dogsrule.com"),
        ("alice", "alice@example.com"),
        ("bob", "bob@example.com"),
    ] {
        system
            .users
            .create_user(UserCreate::new(username, email))
            .await
            .unwrap();
    }
    for slug in ["backend", "frontend"] {
        system
            .teams
            .create_team(TeamCreate::new(1, slug, slug))
            .await
            .unwrap();
    }
    system
}

/// Full end-to-end run against real tables.
#[tokio::test]
async fn test_parse_and_resolve_against_real_tables() {
    let system = seeded().await;
    let resolver = system.resolver();

    // Every documented identifier form
    let cases: Vec<(actor_resolver::actor::ActorIdentifier, ActorRef)> = vec![
        (1231u64.into(), ActorRef::user(1231)),
        ("1231".into(), ActorRef::user(1231)),
        ("user:1231".into(), ActorRef::user(1231)),
        ("team:1231".into(), ActorRef::team(1231)),
        ("maiseythedog".into(), ActorRef::user(1)),
        ("maisey@dogsrule.com".into(), ActorRef::user(1)),
        ("ALICE".into(), ActorRef::user(2)),
    ];
    for (input, expected) in cases {
        assert_eq!(resolver.parse(input.clone()).await.unwrap(), expected, "{input:?}");
    }

    let err = resolver.parse("nonexistent-user-xyz").await.unwrap_err();
    assert!(matches!(err, ParseError::Unresolved(_)));

    let bob = resolver.resolve_one(ActorRef::user(3)).await.unwrap();
    assert_eq!(bob.as_user().unwrap().username, "bob");
    assert_eq!(ActorRef::from_resolved(&bob), ActorRef::user(3));

    let err = resolver.resolve_one(ActorRef::team(3)).await.unwrap_err();
    assert!(matches!(err, ResolveError::NotFound { kind: ActorKind::Team, id: 3 }));

    let resolved = resolver
        .resolve_many(&[
            ActorRef::team(2),
            ActorRef::user(99),
            ActorRef::user(1),
            ActorRef::team(1),
        ])
        .await
        .unwrap();
    let names: Vec<&str> = resolved.iter().map(ResolvedActor::display_name).collect();
    assert_eq!(names, vec!["frontend", "maisey@dogsrule.com", "backend"]);

    drop(resolver);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_batches_cost_one_fetch_per_kind() {
    let system = seeded().await;
    let store = CountingStore {
        inner: system.registry(),
        by_id: AtomicUsize::default(),
        by_ids: AtomicUsize::default(),
        lookups: AtomicUsize::default(),
    };
    let resolver = ActorResolver::new(store);
    let by_ids = || resolver.store().by_ids.load(Ordering::SeqCst);

    let refs: Vec<ActorRef> = (1..=50)
        .map(|n| if n % 2 == 0 { ActorRef::user(n % 4) } else { ActorRef::team(n % 3) })
        .collect();
    resolver.resolve_many(&refs).await.unwrap();
    assert_eq!(by_ids(), 2);

    // Single-kind batch: one fetch
    resolver
        .resolve_many(&[ActorRef::user(1), ActorRef::user(2)])
        .await
        .unwrap();
    assert_eq!(by_ids(), 3);

    // Empty batch: nothing
    resolver.resolve_many(&[]).await.unwrap();
    assert_eq!(by_ids(), 3);

    let dict = HashMap::from([(1, ActorRef::user(1)), (2, ActorRef::team(1)), (3, ActorRef::user(2))]);
    assert_eq!(resolver.resolve_dict(dict).await.unwrap().len(), 3);
    assert_eq!(by_ids(), 5);

    assert_eq!(resolver.store().by_id.load(Ordering::SeqCst), 0);
    assert_eq!(resolver.store().lookups.load(Ordering::SeqCst), 0);

    drop(resolver);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_deactivated_users_still_resolve() {
    let system = seeded().await;
    let resolver = system.resolver();

    let bob = system.users.deactivate(3).await.unwrap();
    assert!(!bob.is_active);

    assert_eq!(resolver.parse("bob").await.unwrap(), ActorRef::user(3));
    let resolved = resolver.resolve_one(ActorRef::user(3)).await.unwrap();
    assert!(!resolved.is_active());

    drop(resolver);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_username_match_wins_over_email_match() {
    let system = seeded().await;
    // A user whose username is someone else's email address
    system
        .users
        .create_user(UserCreate::new("bob@example.com", "impostor@example.com"))
        .await
        .unwrap();
    let resolver = system.resolver();

    assert_eq!(resolver.parse("bob@example.com").await.unwrap(), ActorRef::user(4));

    drop(resolver);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_actor_field() {
    let system = seeded().await;
    let store = system.registry();
    let field = ActorField;

    assert_eq!(field.to_representation(&ActorRef::team(2)), "team:2");
    assert_eq!(field.to_internal_value("", &store).await, Ok(None));
    assert_eq!(field.to_internal_value(0u64, &store).await, Ok(None));
    assert_eq!(
        field.to_internal_value("alice", &store).await,
        Ok(Some(ActorRef::user(2)))
    );
    assert_eq!(
        field.to_internal_value("team:2", &store).await,
        Ok(Some(ActorRef::team(2)))
    );
    assert_eq!(
        field.to_internal_value("team:abc", &store).await,
        Err(FieldError::UnknownActor)
    );
    assert_eq!(
        field.to_internal_value("nobody", &store).await,
        Err(FieldError::UnknownActor)
    );

    drop(store);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_table_validation_surfaces_typed_errors() {
    let system = seeded().await;

    let err = system
        .users
        .create_user(UserCreate::new("12345", "digits@example.com"))
        .await
        .unwrap_err();
    assert!(matches!(err, UserError::ValidationError(_)));

    let err = system.users.require(77).await.unwrap_err();
    assert_eq!(err, UserError::NotFound(77));

    let backend = system.teams.by_slug(1, "backend").await.unwrap();
    assert_eq!(backend.id, 1);
    assert!(system.teams.by_slug(2, "backend").await.is_err());

    system.users.delete(2).await.unwrap();
    assert!(system.users.get(2).await.unwrap().is_none());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_usernames_stay_reachable() {
    let system = seeded().await;

    for username in ["alice", "ALICE", "Alice"] {
        let err = system
            .users
            .create_user(UserCreate::new(username, "other@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, UserError::ValidationError(_)), "{username:?}");
    }

    // A rejected create consumes no id
    let carol = system
        .users
        .create_user(UserCreate::new("carol", "carol@example.com"))
        .await
        .unwrap();
    assert_eq!(carol, 4);

    let resolver = system.resolver();
    assert_eq!(resolver.parse("Alice").await.unwrap(), ActorRef::user(2));
    assert_eq!(resolver.parse("carol").await.unwrap(), ActorRef::user(carol));

    drop(resolver);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_team_slugs_are_unique_per_organization() {
    let system = seeded().await;

    let err = system
        .teams
        .create_team(TeamCreate::new(1, "backend", "Backend again"))
        .await
        .unwrap_err();
    assert!(matches!(err, TeamError::ValidationError(_)));

    // Same slug in another organization is fine
    let other = system
        .teams
        .create_team(TeamCreate::new(2, "backend", "Backend"))
        .await
        .unwrap();
    assert_eq!(system.teams.by_slug(2, "backend").await.unwrap().id, other);
    assert_eq!(system.teams.by_slug(1, "backend").await.unwrap().id, 1);

    // Renaming onto a taken slug is rejected and leaves the team as it was
    let rename = |slug: &str| TeamUpdate {
        slug: Some(slug.to_string()),
        name: None,
    };
    let err = system.teams.update_team(2, rename("backend")).await.unwrap_err();
    assert!(matches!(err, TeamError::ValidationError(_)));
    assert_eq!(system.teams.by_slug(1, "frontend").await.unwrap().id, 2);

    let renamed = system.teams.update_team(2, rename("web")).await.unwrap();
    assert_eq!(renamed.slug, "web");
    assert_eq!(
        system.teams.by_slug(1, "frontend").await.unwrap_err(),
        TeamError::UnknownSlug {
            organization_id: 1,
            slug: "frontend".to_string()
        }
    );

    let err = system.teams.update_team(42, rename("ops")).await.unwrap_err();
    assert_eq!(err, TeamError::NotFound(42));

    system.shutdown().await.unwrap();
}

/// Concurrent resolvers share the tables without interfering.
#[tokio::test]
async fn test_concurrent_resolution() {
    let system = seeded().await;

    let mut handles = vec![];
    for i in 0..10u64 {
        let resolver = system.resolver();
        handles.push(tokio::spawn(async move {
            let actor = resolver.parse(format!("user:{}", i % 3 + 1)).await.unwrap();
            resolver.resolve_many(&[actor, ActorRef::team(1)]).await.unwrap().len()
        }));
    }
    for handle in handles {
        assert_eq!(handle.await.unwrap(), 2);
    }

    system.shutdown().await.unwrap();
}
