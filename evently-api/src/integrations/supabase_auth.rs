use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use uuid::Uuid;

use crate::config::SupabaseConfig;

/// The authenticated user a function runs on behalf of
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallerIdentity {
    pub user_id: Uuid,
}

#[async_trait]
pub trait AuthVerifier: Send + Sync {
    /// Resolves an access token to its user. `Ok(None)` means the token was
    /// rejected; `Err` means the auth service could not be asked.
    async fn verify(&self, access_token: &str) -> anyhow::Result<Option<CallerIdentity>>;
}

#[derive(Deserialize)]
struct SupabaseUser {
    id: Uuid,
}

/// Verifies tokens against Supabase Auth (`GET /auth/v1/user`)
pub struct SupabaseAuthVerifier {
    client: reqwest::Client,
    user_endpoint: String,
    anon_key: String,
}

impl SupabaseAuthVerifier {
    pub fn new(config: &SupabaseConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            user_endpoint: format!("{}/auth/v1/user", config.url.trim_end_matches('/')),
            anon_key: config.anon_key.clone(),
        }
    }
}

#[async_trait]
impl AuthVerifier for SupabaseAuthVerifier {
    async fn verify(&self, access_token: &str) -> anyhow::Result<Option<CallerIdentity>> {
        let response = self
            .client
            .get(&self.user_endpoint)
            .header("apikey", &self.anon_key)
            .bearer_auth(access_token)
            .send()
            .await?;

        match response.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => return Ok(None),
            status if !status.is_success() => {
                anyhow::bail!("Supabase auth returned {}", status);
            }
            _ => {}
        }

        let user: SupabaseUser = response.json().await?;
        Ok(Some(CallerIdentity { user_id: user.id }))
    }
}
