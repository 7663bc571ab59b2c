//! User record type and payload shape validation.
//!
//! A [`User`] is a stored record; a [`UserPayload`] is the client-supplied
//! body for create and update requests. Payloads carry no id — the store
//! assigns one on create and preserves it on update.

use serde::{Deserialize, Serialize};

/// A stored user record.
///
/// The `id` is assigned by the store on creation and never changes; updates
/// replace every other field wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique, store-assigned identifier (starts at 1, never reused)
    pub id: u64,
    /// Display name, 2-50 characters
    pub name: String,
    /// Email address, unique among current records (case-sensitive)
    pub email: String,
    /// City of residence, at least 2 characters
    pub city: String,
}

/// Client-supplied fields for creating or fully replacing a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPayload {
    pub name: String,
    pub email: String,
    pub city: String,
}

/// Validation errors for user input
#[derive(Debug, Clone, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid name: must be 2-50 characters")]
    InvalidName,

    #[error("Invalid email: must not be empty")]
    InvalidEmail,

    #[error("Invalid city: must be at least 2 characters")]
    InvalidCity,
}

impl UserPayload {
    /// Validate field shape. Uniqueness is the store's concern, not ours.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let name_len = self.name.chars().count();
        if !(2..=50).contains(&name_len) {
            return Err(ValidationError::InvalidName);
        }

        if self.email.is_empty() {
            return Err(ValidationError::InvalidEmail);
        }

        if self.city.chars().count() < 2 {
            return Err(ValidationError::InvalidCity);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::UserPayload;

    fn payload(name: &str, email: &str, city: &str) -> UserPayload {
        UserPayload {
            name: name.to_string(),
            email: email.to_string(),
            city: city.to_string(),
        }
    }

    #[test]
    fn accepts_well_formed_payload() {
        assert!(payload("Ann", "a@x.com", "Lviv").validate().is_ok());
    }

    #[test]
    fn name_length_bounds_are_inclusive() {
        assert!(payload("Al", "a@x.com", "Lviv").validate().is_ok());
        assert!(payload(&"x".repeat(50), "a@x.com", "Lviv").validate().is_ok());

        assert!(payload("A", "a@x.com", "Lviv").validate().is_err());
        assert!(
            payload(&"x".repeat(51), "a@x.com", "Lviv")
                .validate()
                .is_err()
        );
    }

    #[test]
    fn rejects_empty_email() {
        assert!(payload("Ann", "", "Lviv").validate().is_err());
    }

    #[test]
    fn rejects_short_city() {
        assert!(payload("Ann", "a@x.com", "L").validate().is_err());
        assert!(payload("Ann", "a@x.com", "Lo").validate().is_ok());
    }

    #[test]
    fn name_bounds_count_characters_not_bytes() {
        // Two characters, more than two bytes.
        assert!(payload("Ля", "a@x.com", "Київ").validate().is_ok());
    }
}
