use domain_guard_core::{Email, User, UserStore, UserStoreError, Username};
use sqlx::{Pool, Postgres, migrate::Migrator};

/// Migrations for the `users` table.
pub static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

#[derive(Clone)]
pub struct PostgresUserStore {
    pool: sqlx::PgPool,
}

impl PostgresUserStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        PostgresUserStore { pool }
    }
}

#[async_trait::async_trait]
impl UserStore for PostgresUserStore {
    #[tracing::instrument(name = "Adding user to PostgreSQL", skip_all)]
    async fn add_user(&self, user: User) -> Result<(), UserStoreError> {
        let query = sqlx::query(
            r#"
                INSERT INTO users (id, username, email, registered_at, flow)
                VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(user.id())
        .bind(user.username().as_str())
        .bind(user.email().as_str())
        .bind(user.registered_at())
        .bind(user.flow().as_str());

        query.execute(&self.pool).await.map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.constraint().is_some() {
                    return UserStoreError::UserAlreadyExists;
                }
            }
            UserStoreError::UnexpectedError(e.to_string())
        })?;

        Ok(())
    }

    #[tracing::instrument(name = "Checking username in PostgreSQL", skip_all)]
    async fn username_exists(&self, username: &Username) -> Result<bool, UserStoreError> {
        sqlx::query_scalar::<_, bool>(
            r#"
                SELECT EXISTS(SELECT 1 FROM users WHERE LOWER(username) = LOWER($1))
            "#,
        )
        .bind(username.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))
    }

    #[tracing::instrument(name = "Checking email in PostgreSQL", skip_all)]
    async fn email_exists(&self, email: &Email) -> Result<bool, UserStoreError> {
        sqlx::query_scalar::<_, bool>(
            r#"
                SELECT EXISTS(SELECT 1 FROM users WHERE LOWER(email) = LOWER($1))
            "#,
        )
        .bind(email.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))
    }
}
