//! MySQL implementation of the UserRepository trait.
//!
//! Persists users in the `users` table created by the bundled migrations.
//! Constraint failures reported by MySQL are translated into
//! [`RepositoryError`] variants so the workflows can tell a taken username
//! from any other failure.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::error::ErrorKind;
use sqlx::{MySqlPool, Row};

use ur_core::domain::entities::user::{User, UserId};
use ur_core::errors::RepositoryError;
use ur_core::repositories::UserRepository;

/// Name of the unique index guarding `users.username`
pub const USERNAME_UNIQUE_KEY: &str = "uk_users_username";

const FIND_BY_ID: &str = r#"
    SELECT id, username, birthdate, country_of_residence, phone_number, gender
    FROM users
    WHERE id = ?
    LIMIT 1
"#;

const FIND_BY_USERNAME: &str = r#"
    SELECT id, username, birthdate, country_of_residence, phone_number, gender
    FROM users
    WHERE username = ?
    LIMIT 1
"#;

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlUserRepository {
    /// Create a new MySQL user repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to User entity
    fn row_to_user(row: &sqlx::mysql::MySqlRow) -> Result<User, RepositoryError> {
        let column = |name: &str, e: sqlx::Error| RepositoryError::Mapping {
            message: format!("Failed to get {}: {}", name, e),
        };

        Ok(User {
            id: Some(row.try_get::<i64, _>("id").map_err(|e| column("id", e))?),
            username: row
                .try_get("username")
                .map_err(|e| column("username", e))?,
            birthdate: row
                .try_get::<NaiveDate, _>("birthdate")
                .map_err(|e| column("birthdate", e))?,
            country_of_residence: row
                .try_get("country_of_residence")
                .map_err(|e| column("country_of_residence", e))?,
            phone_number: row
                .try_get("phone_number")
                .map_err(|e| column("phone_number", e))?,
            gender: row.try_get("gender").map_err(|e| column("gender", e))?,
        })
    }

    async fn insert(&self, user: User) -> Result<User, RepositoryError> {
        let query = r#"
            INSERT INTO users (
                username, birthdate, country_of_residence, phone_number, gender
            ) VALUES (?, ?, ?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(&user.username)
            .bind(user.birthdate)
            .bind(&user.country_of_residence)
            .bind(&user.phone_number)
            .bind(&user.gender)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        let id = UserId::try_from(result.last_insert_id()).map_err(|_| RepositoryError::Mapping {
            message: format!("Generated id out of range: {}", result.last_insert_id()),
        })?;

        Ok(user.with_id(id))
    }

    async fn update(&self, id: UserId, user: User) -> Result<User, RepositoryError> {
        let query = r#"
            UPDATE users SET
                username = ?,
                birthdate = ?,
                country_of_residence = ?,
                phone_number = ?,
                gender = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&user.username)
            .bind(user.birthdate)
            .bind(&user.country_of_residence)
            .bind(&user.phone_number)
            .bind(&user.gender)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        // Zero rows also means "nothing changed", so confirm the row exists
        if result.rows_affected() == 0 && self.find_by_id(id).await?.is_none() {
            return Err(RepositoryError::Mapping {
                message: format!("No stored user with id {}", id),
            });
        }

        Ok(user)
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn save(&self, user: User) -> Result<User, RepositoryError> {
        match user.id {
            Some(id) => self.update(id, user).await,
            None => self.insert(user).await,
        }
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError> {
        let result = sqlx::query(FIND_BY_ID)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        result.as_ref().map(Self::row_to_user).transpose()
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError> {
        let result = sqlx::query(FIND_BY_USERNAME)
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        result.as_ref().map(Self::row_to_user).transpose()
    }
}

/// Translate a driver error into the store-layer signal
pub fn map_sqlx_error(error: sqlx::Error) -> RepositoryError {
    if let sqlx::Error::Database(db_error) = &error {
        let message = db_error.message();
        match db_error.kind() {
            ErrorKind::UniqueViolation => {
                return RepositoryError::UniqueViolation {
                    field: unique_violation_field(message),
                };
            }
            ErrorKind::NotNullViolation => {
                return RepositoryError::MissingField {
                    field: quoted_name(message).unwrap_or("unknown").to_string(),
                };
            }
            _ => {}
        }
    }

    RepositoryError::Database(Box::new(error))
}

/// Column guarded by the unique key named in a MySQL duplicate-entry message
/// (`Duplicate entry 'x' for key 'users.uk_users_username'`)
fn unique_violation_field(message: &str) -> String {
    let key = message.rsplit("for key").next().unwrap_or_default();
    if key.contains(USERNAME_UNIQUE_KEY) {
        "username".to_string()
    } else {
        key.trim().trim_matches('\'').to_string()
    }
}

/// First single-quoted name in a MySQL message (`Column 'gender' cannot be null`)
fn quoted_name(message: &str) -> Option<&str> {
    let start = message.find('\'')? + 1;
    let len = message[start..].find('\'')?;
    Some(&message[start..start + len])
}
