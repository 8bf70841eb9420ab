//! PostgreSQL Repository Implementations

use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::user::StoredUser;
use crate::domain::repository::{RoleStore, UserStore};
use crate::domain::value_object::role::RoleRef;
use crate::error::{AuthError, AuthResult};
use kernel::id::UserId;

/// PostgreSQL-backed auth repository
#[derive(Clone)]
pub struct PgAuthRepository {
    pool: PgPool,
}

impl PgAuthRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Unique violation on insert means the username is taken
fn map_insert_error(err: sqlx::Error, username: &str) -> AuthError {
    if let sqlx::Error::Database(db) = &err {
        if db.is_unique_violation() {
            return AuthError::UserAlreadyExists(username.to_string());
        }
    }
    AuthError::from(err)
}

// ============================================================================
// User Store Implementation
// ============================================================================

impl UserStore for PgAuthRepository {
    async fn find_by_username(&self, username: &str) -> AuthResult<Option<StoredUser>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                u.id,
                u.username,
                u.password_hash,
                u.email,
                COALESCE(
                    array_agg(r.name ORDER BY ur.position) FILTER (WHERE r.name IS NOT NULL),
                    '{}'
                ) AS roles
            FROM users u
            LEFT JOIN user_roles ur ON ur.user_id = u.id
            LEFT JOIN roles r ON r.id = ur.role_id
            WHERE u.username = $1
            GROUP BY u.id
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(UserRow::into_user))
    }

    async fn save(&self, user: &StoredUser) -> AuthResult<StoredUser> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO users (id, username, password_hash, email)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(user.id.as_uuid())
        .bind(&user.username)
        .bind(user.password_hash.as_deref())
        .bind(&user.email)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_insert_error(e, &user.username))?;

        for (position, role) in user.roles.iter().enumerate() {
            let inserted = sqlx::query(
                r#"
                INSERT INTO user_roles (user_id, role_id, position)
                SELECT $1, r.id, $3 FROM roles r WHERE r.name = $2
                "#,
            )
            .bind(user.id.as_uuid())
            .bind(role.name())
            .bind(position as i16)
            .execute(&mut *tx)
            .await?
            .rows_affected();

            if inserted == 0 {
                // Dropping the transaction rolls back the user row
                return Err(AuthError::RoleMissing(role.name().to_string()));
            }
        }

        tx.commit().await?;

        tracing::debug!(user_id = %user.id, "User row inserted");

        Ok(user.clone())
    }
}

// ============================================================================
// Role Store Implementation
// ============================================================================

impl RoleStore for PgAuthRepository {
    async fn find_by_name(&self, name: &str) -> AuthResult<Option<RoleRef>> {
        let name = sqlx::query_scalar::<_, String>("SELECT name FROM roles WHERE name = $1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;

        Ok(name.map(RoleRef::new))
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    username: String,
    password_hash: Option<String>,
    email: String,
    roles: Vec<String>,
}

impl UserRow {
    fn into_user(self) -> StoredUser {
        StoredUser {
            id: UserId::from_uuid(self.id),
            username: self.username,
            password_hash: self.password_hash,
            email: self.email,
            roles: self.roles.into_iter().map(RoleRef::new).collect(),
        }
    }
}
