//! The in-memory user store: an ordered collection plus an id allocator.
//!
//! The store is plain synchronous data with no interior locking; the server
//! wraps it in a `tokio::sync::Mutex` so each HTTP operation holds the lock
//! for its whole scan-and-mutate span. Insertion order is preserved and is
//! the order listing iterates in. Ids start at 1 and are never reused, even
//! after deletion.

use crate::user::{User, UserPayload};

/// Errors surfaced by store operations.
///
/// Shape problems (field lengths, missing fields) never reach the store;
/// handlers validate payloads first.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("A user with email '{0}' already exists")]
    DuplicateEmail(String),

    #[error("No user with id {0}")]
    NotFound(u64),

    #[error("No users found in city '{0}'")]
    NoMatch(String),
}

/// Owner of all user records and the id counter.
#[derive(Debug)]
pub struct UserStore {
    users: Vec<User>,
    next_id: u64,
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl UserStore {
    pub fn new() -> Self {
        Self {
            users: Vec::new(),
            next_id: 1,
        }
    }

    /// Create a user from an already shape-validated payload.
    ///
    /// Fails if any current record holds the same email (case-sensitive).
    /// On success the new record gets the next id and is appended, so
    /// listing reflects creation order.
    pub fn create(&mut self, payload: UserPayload) -> Result<User, StoreError> {
        if self.users.iter().any(|u| u.email == payload.email) {
            return Err(StoreError::DuplicateEmail(payload.email));
        }

        let user = User {
            id: self.next_id,
            name: payload.name,
            email: payload.email,
            city: payload.city,
        };
        self.next_id += 1;

        self.users.push(user.clone());
        Ok(user)
    }

    /// List users, optionally filtered by city (case-insensitive exact
    /// match).
    ///
    /// With no filter an empty store yields an empty vec; with a filter a
    /// zero-match result is `NoMatch`. The asymmetry is part of the
    /// registry's observed contract.
    pub fn list(&self, city: Option<&str>) -> Result<Vec<User>, StoreError> {
        match city {
            Some(city) => {
                let wanted = city.to_lowercase();
                let filtered: Vec<User> = self
                    .users
                    .iter()
                    .filter(|u| u.city.to_lowercase() == wanted)
                    .cloned()
                    .collect();

                if filtered.is_empty() {
                    return Err(StoreError::NoMatch(city.to_string()));
                }
                Ok(filtered)
            }
            None => Ok(self.users.clone()),
        }
    }

    /// Replace every field except `id` of the record with the given id.
    ///
    /// The replacement email must not collide with any *other* record; the
    /// user may keep their own email unchanged.
    pub fn update(&mut self, id: u64, payload: UserPayload) -> Result<User, StoreError> {
        let position = self
            .users
            .iter()
            .position(|u| u.id == id)
            .ok_or(StoreError::NotFound(id))?;

        if self
            .users
            .iter()
            .any(|u| u.id != id && u.email == payload.email)
        {
            return Err(StoreError::DuplicateEmail(payload.email));
        }

        let user = &mut self.users[position];
        user.name = payload.name;
        user.email = payload.email;
        user.city = payload.city;

        Ok(user.clone())
    }

    /// Remove the record with the given id.
    pub fn delete(&mut self, id: u64) -> Result<(), StoreError> {
        let position = self
            .users
            .iter()
            .position(|u| u.id == id)
            .ok_or(StoreError::NotFound(id))?;

        self.users.remove(position);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
