//! In-memory implementation of UserRepository
//!
//! Backs tests and the database-less development mode. It assigns sequential
//! identifiers, enforces the same username uniqueness constraint as the
//! relational schema and, like the MySQL store, only updates existing ids.

use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::domain::entities::user::{User, UserId};
use crate::errors::RepositoryError;

use super::trait_::UserRepository;

#[derive(Debug, Default)]
struct Store {
    next_id: UserId,
    users: BTreeMap<UserId, User>,
}

impl Store {
    fn username_taken(&self, username: &str, except: Option<UserId>) -> bool {
        self.users
            .values()
            .any(|u| u.username == username && u.id != except)
    }
}

/// In-memory user repository
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    store: RwLock<Store>,
}

impl InMemoryUserRepository {
    /// Create a new, empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records
    pub async fn len(&self) -> usize {
        self.store.read().await.users.len()
    }

    /// Whether no record is stored
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Number of stored records holding `username`
    pub async fn count_by_username(&self, username: &str) -> usize {
        self.store
            .read()
            .await
            .users
            .values()
            .filter(|u| u.username == username)
            .count()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn save(&self, user: User) -> Result<User, RepositoryError> {
        let mut store = self.store.write().await;

        if store.username_taken(&user.username, user.id) {
            return Err(RepositoryError::UniqueViolation {
                field: "username".to_string(),
            });
        }

        let id = match user.id {
            Some(id) if store.users.contains_key(&id) => id,
            Some(id) => {
                return Err(RepositoryError::Mapping {
                    message: format!("No stored user with id {}", id),
                });
            }
            None => {
                store.next_id += 1;
                store.next_id
            }
        };

        let stored = user.with_id(id);
        store.users.insert(id, stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError> {
        let store = self.store.read().await;
        Ok(store.users.get(&id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError> {
        let store = self.store.read().await;
        Ok(store
            .users
            .values()
            .find(|u| u.username == username)
            .cloned())
    }
}
