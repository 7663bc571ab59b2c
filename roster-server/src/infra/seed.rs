//! Optional sample-data seeding for demos and local development.

use roster_core::{UserPayload, UserStore};
use tracing::info;

const SAMPLE_USERS: &[(&str, &str, &str)] = &[
    ("Anna Kovalenko", "anna@example.com", "Lviv"),
    ("Bohdan Shevchenko", "bohdan@example.com", "Kyiv"),
    ("Daryna Melnyk", "daryna@example.com", "Odesa"),
];

/// Populate a fresh store with the fixed sample records.
///
/// The samples have distinct emails, so creation cannot fail on an empty
/// store; a duplicate would indicate the store was not fresh.
pub fn seed_sample_users(store: &mut UserStore) -> anyhow::Result<()> {
    for (name, email, city) in SAMPLE_USERS {
        store.create(UserPayload {
            name: name.to_string(),
            email: email.to_string(),
            city: city.to_string(),
        })?;
    }

    info!(count = SAMPLE_USERS.len(), "seeded sample users");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::seed_sample_users;
    use roster_core::UserStore;

    #[test]
    fn seeding_a_fresh_store_succeeds() {
        let mut store = UserStore::new();
        seed_sample_users(&mut store).unwrap();
        assert_eq!(store.len(), 3);
    }
}
