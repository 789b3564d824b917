use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::modules::auth::store::{TokenKind, TokenStore};

#[derive(Serialize, Deserialize, Default)]
pub struct CliConfig {
    #[serde(default)]
    pub addr: Option<String>,
}

pub struct CommandContext<'a> {
    pub client: &'a reqwest::Client,
    pub addr: &'a str,
    pub store: &'a TokenStore,
    /// Explicit `--token`; bypasses the store and disables the refresh flow.
    pub token_override: Option<String>,
    /// Serializes concurrent refresh attempts into a single refresh call.
    pub refresh_gate: &'a Mutex<()>,
}

impl CommandContext<'_> {
    pub(crate) fn access_token(&self) -> anyhow::Result<Option<String>> {
        if let Some(token) = self.token_override.as_deref() {
            return Ok(Some(token.to_string()));
        }
        self.store.get(TokenKind::Access)
    }
}
