pub use crate::auth::repo_types::User;
use sqlx::PgPool;

impl User {
    /// Find a user by username.
    pub async fn find_by_username(db: &PgPool, username: &str) -> sqlx::Result<Option<User>> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT uid, username, email, password_hash, created_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(db)
        .await
    }

    /// Create a new user with a hashed password. The unique constraints on
    /// username and email make duplicates a store error.
    pub async fn create(
        db: &PgPool,
        username: &str,
        email: &str,
        password_hash: &str,
    ) -> sqlx::Result<User> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, email, password_hash)
            VALUES ($1, $2, $3)
            RETURNING uid, username, email, password_hash, created_at
            "#,
        )
        .bind(username)
        .bind(email)
        .bind(password_hash)
        .fetch_one(db)
        .await
    }
}

// Run with `cargo test -- --ignored` against a disposable Postgres;
// #[sqlx::test] provisions a fresh database and applies ./migrations.
#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::services::hash_password;

    #[sqlx::test]
    #[ignore = "requires a running Postgres"]
    async fn duplicate_username_or_email_is_rejected(db: PgPool) -> sqlx::Result<()> {
        let hash = hash_password("password123").expect("hash");
        let alice = User::create(&db, "alice", "a@x.com", &hash).await?;
        assert_ne!(alice.password_hash, "password123");

        assert!(User::create(&db, "alice", "other@x.com", &hash)
            .await
            .is_err());
        assert!(User::create(&db, "alice2", "a@x.com", &hash).await.is_err());

        let found = User::find_by_username(&db, "alice")
            .await?
            .expect("alice exists");
        assert_eq!(found.uid, alice.uid);
        assert_eq!(found.email, "a@x.com");

        assert!(User::find_by_username(&db, "nobody").await?.is_none());
        Ok(())
    }
}
