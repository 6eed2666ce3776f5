// src/infrastructure/security/oauth_state_store.rs
use crate::application::ApplicationResult;
use crate::application::ports::oauth_state::{OAuthStateStore, PendingAuthorization};
use crate::domain::errors::DomainError;
use crate::domain::user::AuthProvider;
use crate::infrastructure::repositories::map_sqlx;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

/// Pending sign-ins kept in the `oauth_states` table.
#[derive(Clone)]
pub struct PostgresOAuthStateStore {
    pool: PgPool,
}

impl PostgresOAuthStateStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct OAuthStateRow {
    state: String,
    provider: String,
    pkce_verifier: String,
    expires_at: DateTime<Utc>,
}

impl TryFrom<OAuthStateRow> for PendingAuthorization {
    type Error = DomainError;

    fn try_from(row: OAuthStateRow) -> Result<Self, Self::Error> {
        Ok(PendingAuthorization {
            state: row.state,
            provider: row.provider.parse::<AuthProvider>()?,
            pkce_verifier: row.pkce_verifier,
            expires_at: row.expires_at,
        })
    }
}

#[async_trait]
impl OAuthStateStore for PostgresOAuthStateStore {
    async fn save(&self, pending: PendingAuthorization) -> ApplicationResult<()> {
        sqlx::query("DELETE FROM oauth_states WHERE expires_at <= NOW()")
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        sqlx::query(
            "INSERT INTO oauth_states (state, provider, pkce_verifier, expires_at) \
             VALUES ($1, $2, $3, $4)",
        )
        .bind(&pending.state)
        .bind(pending.provider.as_str())
        .bind(&pending.pkce_verifier)
        .bind(pending.expires_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(())
    }

    async fn consume(
        &self,
        provider: AuthProvider,
        state: &str,
    ) -> ApplicationResult<Option<PendingAuthorization>> {
        let row = sqlx::query_as::<_, OAuthStateRow>(
            "DELETE FROM oauth_states WHERE state = $1 AND provider = $2 \
             RETURNING state, provider, pkce_verifier, expires_at",
        )
        .bind(state)
        .bind(provider.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(row.map(PendingAuthorization::try_from).transpose()?)
    }
}
