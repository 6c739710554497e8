//! Record trait implementation for the Team domain type.

use crate::framework::Record;
use crate::model::{Team, TeamCreate, TeamUpdate};
use crate::team_table::TeamError;

fn validate_slug(slug: &str) -> Result<(), TeamError> {
    let valid = !slug.is_empty()
        && slug
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-' || b == b'_');
    if valid {
        Ok(())
    } else {
        Err(TeamError::ValidationError(format!(
            "slug {slug:?} must be lowercase letters, digits, '-' or '_'"
        )))
    }
}

impl Record for Team {
    type Create = TeamCreate;
    type Update = TeamUpdate;
    type Error = TeamError;

    fn from_create_params(id: u64, params: TeamCreate) -> Result<Self, Self::Error> {
        validate_slug(&params.slug)?;
        Ok(Self {
            id,
            organization_id: params.organization_id,
            slug: params.slug,
            name: params.name,
        })
    }

    fn on_update(&mut self, update: TeamUpdate) -> Result<(), Self::Error> {
        if let Some(slug) = update.slug {
            validate_slug(&slug)?;
            self.slug = slug;
        }
        if let Some(name) = update.name {
            self.name = name;
        }
        Ok(())
    }

    fn lookup_rank(&self, key: &str) -> Option<u8> {
        (self.slug == key).then_some(0)
    }

    /// Slugs are unique within an organization.
    fn unique_key(&self) -> Option<String> {
        Some(format!("{}/{}", self.organization_id, self.slug))
    }

    fn duplicate_key(key: String) -> Self::Error {
        TeamError::ValidationError(format!("team {key:?} already exists"))
    }
}
