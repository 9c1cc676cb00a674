//! Manages account enrichment around the core user record.
//!
//! This module defines the role source abstraction (`RoleStore`), its
//! database-backed implementation, and the best-effort loader that pages use
//! to get a user together with their roles.

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::database::models::{Role, User, UserWithRoles};
use crate::database::queries;

/// Source of a user's role collection.
///
/// Pages treat this as best-effort enrichment: implementations may fail and
/// callers continue without roles, so the trait is the seam where tests swap
/// in failing sources.
#[async_trait]
pub trait RoleStore: Send + Sync {
    async fn roles_for_user(&self, user_id: i64) -> Result<Vec<Role>, sqlx::Error>;
}

/// Pool-backed role source used by the running app.
pub struct SqlRoleStore<'a> {
    pool: &'a SqlitePool,
}

impl<'a> SqlRoleStore<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RoleStore for SqlRoleStore<'_> {
    async fn roles_for_user(&self, user_id: i64) -> Result<Vec<Role>, sqlx::Error> {
        queries::roles_for_user(self.pool, user_id).await
    }
}

/// Attach the user's roles when the lookup succeeds; otherwise log one
/// warning and carry on with an empty set. The page must render either way,
/// so this never returns an error.
pub async fn load_user_with_roles(store: &dyn RoleStore, user: User) -> UserWithRoles {
    let roles = match store.roles_for_user(user.id).await {
        Ok(roles) => roles,
        Err(err) => {
            tracing::warn!(
                user_id = user.id,
                error = %err,
                "failed to load roles, rendering without them"
            );
            Vec::new()
        }
    };
    UserWithRoles { user, roles }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_pool;
    use chrono::Utc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tracing::Level;
    use tracing_subscriber::layer::SubscriberExt;

    struct FailingStore;

    #[async_trait]
    impl RoleStore for FailingStore {
        async fn roles_for_user(&self, _user_id: i64) -> Result<Vec<Role>, sqlx::Error> {
            Err(sqlx::Error::PoolClosed)
        }
    }

    struct FixedStore(Vec<Role>);

    #[async_trait]
    impl RoleStore for FixedStore {
        async fn roles_for_user(&self, _user_id: i64) -> Result<Vec<Role>, sqlx::Error> {
            Ok(self.0.clone())
        }
    }

    #[derive(Clone)]
    struct WarnCounter(Arc<AtomicUsize>);

    impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for WarnCounter {
        fn on_event(
            &self,
            event: &tracing::Event<'_>,
            _ctx: tracing_subscriber::layer::Context<'_, S>,
        ) {
            if *event.metadata().level() == Level::WARN {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    fn sample_user() -> User {
        let now = Utc::now();
        User {
            id: 7,
            full_name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            password_hash: "$argon2id$stub".to_string(),
            terms_accepted_version: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn roles_are_attached_when_the_store_succeeds() {
        let store = FixedStore(vec![Role {
            id: 1,
            name: "admin".to_string(),
        }]);
        let loaded = load_user_with_roles(&store, sample_user()).await;
        assert_eq!(loaded.user.id, 7);
        assert_eq!(loaded.roles.len(), 1);
        assert_eq!(loaded.roles[0].name, "admin");
    }

    #[tokio::test]
    async fn a_failing_store_still_yields_the_user_and_warns_once() {
        let warnings = Arc::new(AtomicUsize::new(0));
        let subscriber =
            tracing_subscriber::registry().with(WarnCounter(warnings.clone()));
        let _guard = tracing::subscriber::set_default(subscriber);

        let loaded = load_user_with_roles(&FailingStore, sample_user()).await;
        assert_eq!(loaded.user.id, 7);
        assert_eq!(loaded.user.email, "ada@example.com");
        assert!(loaded.roles.is_empty());
        assert_eq!(warnings.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn a_succeeding_store_warns_never() {
        let warnings = Arc::new(AtomicUsize::new(0));
        let subscriber =
            tracing_subscriber::registry().with(WarnCounter(warnings.clone()));
        let _guard = tracing::subscriber::set_default(subscriber);

        let loaded = load_user_with_roles(&FixedStore(Vec::new()), sample_user()).await;
        assert!(loaded.roles.is_empty());
        assert_eq!(warnings.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn the_sql_store_reads_roles_through_the_join_table() {
        let pool = test_pool().await;
        let user = queries::insert_user(
            &pool,
            &crate::database::models::NewUser {
                full_name: "Ada Lovelace".to_string(),
                email: "ada@example.com".to_string(),
                password_hash: "$argon2id$stub".to_string(),
            },
        )
        .await
        .unwrap();
        queries::attach_role(&pool, user.id, "admin").await;

        let store = SqlRoleStore::new(&pool);
        let loaded = load_user_with_roles(&store, user).await;
        assert_eq!(loaded.roles.len(), 1);
        assert_eq!(loaded.roles[0].name, "admin");
    }
}
