use serde::{Deserialize, Serialize};

/// A registered user: the principal kind of actor.
///
/// # Table Framework
/// This struct implements the [`Record`](crate::framework::Record) trait,
/// allowing it to be stored in a [`TableActor`](crate::framework::TableActor).
///
/// See [`impl Record for User`](#impl-Record-for-User) for details on:
/// - Creation parameters ([`UserCreate`])
/// - Update parameters ([`UserUpdate`])
/// - Lookup matching by username or email
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub username: String,
    pub email: String,
    pub name: String,
    pub is_active: bool,
}

/// Payload for creating a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserCreate {
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub name: String,
}

/// Payload for updating an existing user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub is_active: Option<bool>,
}

impl User {
    /// Creates an active user with an empty display name.
    ///
    /// # Arguments
    /// * `id` - Store-assigned primary key
    /// * `username` - Login name, unique regardless of case
    /// * `email` - Primary email address
    pub fn new(id: u64, username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            email: email.into(),
            name: String::new(),
            is_active: true,
        }
    }

    /// The name to show for this user, falling back to the email.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.email
        } else {
            &self.name
        }
    }
}

impl UserCreate {
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            name: String::new(),
        }
    }
}
