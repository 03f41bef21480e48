//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::entity::user::{NewUser, User};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    country::CountryCode, email::Email, password::PasswordHash, user_id::UserId,
    username::Username,
};
use crate::error::{AuthError, AuthResult};

const USER_COLUMNS: &str = "user_id, username, email, password_hash, image, verified, \
                            first_name, last_name, bio, country, created_at, updated_at";

/// PostgreSQL-backed user repository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Unique-constraint violation (PostgreSQL class 23505)
fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .and_then(|db| db.code())
        .is_some_and(|code| code == "23505")
}

impl UserRepository for PgUserRepository {
    async fn create(&self, user: &NewUser) -> AuthResult<User> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            r#"
            INSERT INTO users (
                username,
                email,
                password_hash,
                image,
                verified,
                first_name,
                last_name,
                bio,
                country,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(user.username.as_str())
        .bind(user.email.as_str())
        .bind(user.password_hash.as_phc_string())
        .bind(&user.image)
        .bind(user.verified)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.bio)
        .bind(user.country.as_ref().map(|c| c.as_str()))
        .bind(user.created_at)
        .bind(user.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            // Concurrent registration of the same email lands here, not in
            // the exists check.
            if is_unique_violation(&e) {
                AuthError::EmailInUse
            } else {
                AuthError::Database(e)
            }
        })?;

        row.into_user()
    }

    async fn find_by_id(&self, user_id: UserId) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE user_id = $1"
        ))
        .bind(user_id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
        ))
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn find_by_username(&self, username: &Username) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE username = $1"
        ))
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
                .bind(email.as_str())
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }

    async fn update(&self, user: &User) -> AuthResult<()> {
        sqlx::query(
            r#"
            UPDATE users SET
                username = $2,
                email = $3,
                password_hash = $4,
                image = $5,
                verified = $6,
                first_name = $7,
                last_name = $8,
                bio = $9,
                country = $10,
                updated_at = $11
            WHERE user_id = $1
            "#,
        )
        .bind(user.user_id.as_i64())
        .bind(user.username.as_str())
        .bind(user.email.as_str())
        .bind(user.password_hash.as_phc_string())
        .bind(&user.image)
        .bind(user.verified)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.bio)
        .bind(user.country.as_ref().map(|c| c.as_str()))
        .bind(user.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    user_id: i64,
    username: String,
    email: String,
    password_hash: String,
    image: String,
    verified: bool,
    first_name: Option<String>,
    last_name: Option<String>,
    bio: Option<String>,
    country: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> AuthResult<User> {
        let password_hash = PasswordHash::from_phc_string(self.password_hash)
            .map_err(|e| AuthError::Internal(format!("Invalid password hash: {}", e)))?;

        Ok(User {
            user_id: UserId::from_i64(self.user_id),
            username: Username::from_db(self.username),
            email: Email::from_db(self.email),
            password_hash,
            image: self.image,
            verified: self.verified,
            first_name: self.first_name,
            last_name: self.last_name,
            bio: self.bio,
            country: self.country.map(CountryCode::from_db),
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
