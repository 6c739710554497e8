//! Record trait implementation for the User domain type.
//!
//! Usernames are validated so that they can never be mistaken for one of the
//! canonical identifier forms: a username made only of digits, or one carrying a
//! `kind:` prefix, would be shadowed by id parsing and unreachable by lookup.

use crate::framework::Record;
use crate::model::{User, UserCreate, UserUpdate};
use crate::user_table::UserError;

const USERNAME_RANK: u8 = 0;
const EMAIL_RANK: u8 = 1;

fn validate_username(username: &str) -> Result<(), UserError> {
    if username.trim().is_empty() {
        return Err(UserError::ValidationError("username is empty".into()));
    }
    if username.bytes().all(|b| b.is_ascii_digit()) {
        return Err(UserError::ValidationError(format!(
            "username {username:?} is all digits"
        )));
    }
    if username.contains(':') {
        return Err(UserError::ValidationError(format!(
            "username {username:?} contains ':'"
        )));
    }
    Ok(())
}

fn validate_email(email: &str) -> Result<(), UserError> {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(UserError::ValidationError(format!(
            "email {email:?} is not an address"
        ))),
    }
}

impl Record for User {
    type Create = UserCreate;
    type Update = UserUpdate;
    type Error = UserError;

    fn from_create_params(id: u64, params: UserCreate) -> Result<Self, Self::Error> {
        validate_username(&params.username)?;
        validate_email(&params.email)?;
        Ok(Self {
            id,
            username: params.username,
            email: params.email,
            name: params.name,
            is_active: true,
        })
    }

    /// Handles updates to the User record.
    ///
    /// # Fields Updated
    /// - `name`: display name
    /// - `email`: primary email, validated
    /// - `is_active`: deactivation keeps the row resolvable by id
    fn on_update(&mut self, update: UserUpdate) -> Result<(), Self::Error> {
        if let Some(email) = &update.email {
            validate_email(email)?;
        }
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(is_active) = update.is_active {
            self.is_active = is_active;
        }
        Ok(())
    }

    /// Username matches outrank email matches; both compare case-insensitively.
    fn lookup_rank(&self, key: &str) -> Option<u8> {
        if key.is_empty() {
            None
        } else if self.username.eq_ignore_ascii_case(key) {
            Some(USERNAME_RANK)
        } else if self.email.eq_ignore_ascii_case(key) {
            Some(EMAIL_RANK)
        } else {
            None
        }
    }

    /// Usernames are unique regardless of case.
    fn unique_key(&self) -> Option<String> {
        Some(self.username.to_lowercase())
    }

    fn duplicate_key(key: String) -> Self::Error {
        UserError::ValidationError(format!("username {key:?} is already taken"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_usernames_that_shadow_identifiers() {
        for username in ["", "  ", "1234", "user:7", "team:x"] {
            let params = UserCreate::new(username, "a@example.com");
            assert!(
                matches!(User::from_create_params(1, params), Err(UserError::ValidationError(_))),
                "{username:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_rejects_malformed_email() {
        for email in ["", "plain", "@example.com", "someone@"] {
            let params = UserCreate::new("someone", email);
            assert!(User::from_create_params(1, params).is_err(), "{email:?}");
        }
    }

    #[test]
    fn test_lookup_rank() {
        let user = User::new(3, "Maisey", "maisey@dogsrule.com");
        assert_eq!(user.lookup_rank("maisey"), Some(USERNAME_RANK));
        assert_eq!(user.lookup_rank("MAISEY@dogsrule.com"), Some(EMAIL_RANK));
        assert_eq!(user.lookup_rank("mais"), None);
        assert_eq!(user.lookup_rank(""), None);
    }

    #[test]
    fn test_unique_key_ignores_case() {
        let lower = User::new(1, "alice", "a@example.com");
        let upper = User::new(2, "ALICE", "b@example.com");
        assert_eq!(lower.unique_key(), upper.unique_key());
    }

    #[test]
    fn test_update_deactivates_and_validates() {
        let mut user = User::new(1, "alice", "alice@example.com");
        user.on_update(UserUpdate {
            is_active: Some(false),
            ..Default::default()
        })
        .unwrap();
        assert!(!user.is_active);

        let err = user
            .on_update(UserUpdate {
                name: Some("Alice".into()),
                email: Some("broken".into()),
                ..Default::default()
            })
            .unwrap_err();
        assert!(matches!(err, UserError::ValidationError(_)));
        // A rejected update leaves the row untouched
        assert_eq!(user.name, "");
        assert_eq!(user.email, "alice@example.com");
    }
}
