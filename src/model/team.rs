use serde::{Deserialize, Serialize};

/// A team within an organization: the group kind of actor.
///
/// # Table Framework
/// This struct implements the [`Record`](crate::framework::Record) trait,
/// allowing it to be stored in a [`TableActor`](crate::framework::TableActor).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: u64,
    pub organization_id: u64,
    pub slug: String,
    pub name: String,
}

/// Payload for creating a new team.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamCreate {
    pub organization_id: u64,
    pub slug: String,
    pub name: String,
}

/// Payload for updating an existing team.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TeamUpdate {
    pub slug: Option<String>,
    pub name: Option<String>,
}

impl Team {
    pub fn new(id: u64, organization_id: u64, slug: impl Into<String>) -> Self {
        let slug = slug.into();
        Self {
            id,
            organization_id,
            name: slug.clone(),
            slug,
        }
    }
}

impl TeamCreate {
    pub fn new(organization_id: u64, slug: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            organization_id,
            slug: slug.into(),
            name: name.into(),
        }
    }
}
