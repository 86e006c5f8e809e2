use crate::db::models::{User, UserRequest};
use crate::error::{AppError, AppResult};
use sqlx::SqlitePool;

/// Create the `users` table if it does not exist yet. Called once at startup.
pub async fn ensure_schema(pool: &SqlitePool) -> AppResult<()> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT,
            email TEXT UNIQUE,
            age INTEGER,
            password TEXT
        )",
    )
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn create_user(pool: &SqlitePool, req: &UserRequest) -> AppResult<User> {
    let result = sqlx::query("INSERT INTO users (name, email, age, password) VALUES (?, ?, ?, ?)")
        .bind(&req.name)
        .bind(&req.email)
        .bind(req.age)
        .bind(&req.password)
        .execute(pool)
        .await?;

    Ok(User {
        id: result.last_insert_rowid(),
        name: req.name.clone(),
        email: req.email.clone(),
        age: req.age,
        password: req.password.clone(),
    })
}

pub async fn get_all(pool: &SqlitePool) -> AppResult<Vec<User>> {
    let users = sqlx::query_as::<_, User>("SELECT id, name, email, age, password FROM users")
        .fetch_all(pool)
        .await?;

    Ok(users)
}

/// Exact match on both columns. `Ok(None)` means no such credential pair;
/// only transport/connection failures surface as errors.
pub async fn find_by_credentials(
    pool: &SqlitePool,
    email: &str,
    password: &str,
) -> AppResult<Option<User>> {
    let user = sqlx::query_as::<_, User>(
        "SELECT id, name, email, age, password FROM users WHERE email = ? AND password = ?",
    )
    .bind(email)
    .bind(password)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Overwrite name, password and age for the row matching `user.email`.
/// No existence check: updating an unknown email matches zero rows and still
/// succeeds, returning the input unchanged.
pub async fn update_user(pool: &SqlitePool, user: User) -> AppResult<User> {
    sqlx::query("UPDATE users SET name = ?, password = ?, age = ? WHERE email = ?")
        .bind(&user.name)
        .bind(&user.password)
        .bind(user.age)
        .bind(&user.email)
        .execute(pool)
        .await?;

    Ok(user)
}

/// Re-read the row by exact email+password, then delete it by the same
/// predicate. The read and the delete are separate statements; a concurrent
/// delete in between shows up as zero affected rows and is reported as
/// not-found.
pub async fn delete_user(pool: &SqlitePool, email: &str, password: &str) -> AppResult<User> {
    let user = find_by_credentials(pool, email, password)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User '{}' not found", email)))?;

    let result = sqlx::query("DELETE FROM users WHERE email = ? AND password = ?")
        .bind(email)
        .bind(password)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!("User '{}' not found", email)));
    }

    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    // A single connection so every query sees the same in-memory database.
    async fn test_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        ensure_schema(&pool).await.unwrap();
        pool
    }

    fn request(name: &str, email: &str, password: &str, age: i64) -> UserRequest {
        UserRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            age,
        }
    }

    #[tokio::test]
    async fn create_assigns_positive_id() {
        let pool = test_pool().await;
        let user = create_user(&pool, &request("Ann", "a@x.com", "p", 30))
            .await
            .unwrap();
        assert!(user.id > 0);
        assert_eq!(user.email, "a@x.com");
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected() {
        let pool = test_pool().await;
        create_user(&pool, &request("Ann", "a@x.com", "p", 30))
            .await
            .unwrap();
        let err = create_user(&pool, &request("Other", "a@x.com", "q", 40))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Database(_)));
    }

    #[tokio::test]
    async fn find_by_credentials_matches_exactly() {
        let pool = test_pool().await;
        create_user(&pool, &request("Ann", "a@x.com", "p", 30))
            .await
            .unwrap();

        let found = find_by_credentials(&pool, "a@x.com", "p").await.unwrap();
        assert_eq!(found.unwrap().name, "Ann");

        // Wrong password is a not-found signal, not an error.
        let missing = find_by_credentials(&pool, "a@x.com", "wrong").await.unwrap();
        assert!(missing.is_none());

        // Case-sensitive on the password.
        let missing = find_by_credentials(&pool, "a@x.com", "P").await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn get_all_returns_every_row() {
        let pool = test_pool().await;
        assert!(get_all(&pool).await.unwrap().is_empty());

        for i in 0..3 {
            create_user(&pool, &request("u", &format!("u{}@x.com", i), "p", 20 + i))
                .await
                .unwrap();
        }
        assert_eq!(get_all(&pool).await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn update_overwrites_by_email() {
        let pool = test_pool().await;
        let created = create_user(&pool, &request("Ann", "a@x.com", "p", 30))
            .await
            .unwrap();

        let updated = update_user(
            &pool,
            User {
                id: 0,
                name: "Anne".to_string(),
                email: "a@x.com".to_string(),
                age: 31,
                password: "p2".to_string(),
            },
        )
        .await
        .unwrap();
        assert_eq!(updated.name, "Anne");

        let stored = find_by_credentials(&pool, "a@x.com", "p2")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.id, created.id);
        assert_eq!(stored.name, "Anne");
        assert_eq!(stored.age, 31);
    }

    #[tokio::test]
    async fn update_of_unknown_email_still_succeeds() {
        let pool = test_pool().await;
        let user = User {
            id: 0,
            name: "Ghost".to_string(),
            email: "ghost@x.com".to_string(),
            age: 99,
            password: "p".to_string(),
        };
        let returned = update_user(&pool, user).await.unwrap();
        assert_eq!(returned.email, "ghost@x.com");
        assert!(get_all(&pool).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_removes_the_row() {
        let pool = test_pool().await;
        create_user(&pool, &request("Ann", "a@x.com", "p", 30))
            .await
            .unwrap();

        let deleted = delete_user(&pool, "a@x.com", "p").await.unwrap();
        assert_eq!(deleted.email, "a@x.com");
        assert!(get_all(&pool).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_of_absent_pair_is_not_found() {
        let pool = test_pool().await;
        let err = delete_user(&pool, "nobody@x.com", "p").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));

        // Present email but wrong password is also not-found.
        create_user(&pool, &request("Ann", "a@x.com", "p", 30))
            .await
            .unwrap();
        let err = delete_user(&pool, "a@x.com", "wrong").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
