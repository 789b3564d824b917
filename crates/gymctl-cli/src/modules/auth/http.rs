use tracing::{debug, warn};

use gymctl_core::api::auth::{RefreshRequest, RefreshResponse};

use crate::modules::auth::store::{TokenKind, TokenStore};
use crate::modules::system::{ApiError, CommandContext};

/// Exchanges the stored refresh token for a new access token and persists it
/// before returning, so a retried request always observes the rotated token.
///
/// Concurrent callers coalesce into a single refresh: the gate serializes
/// them, and whoever acquires it second finds the token already rotated and
/// skips the network call. Any failure here is terminal for the session.
pub(crate) async fn refresh_session(
    ctx: &CommandContext<'_>,
    stale_token: &str,
) -> anyhow::Result<String> {
    let _gate = ctx.refresh_gate.lock().await;

    if let Some(current) = ctx.store.get(TokenKind::Access)? {
        if current != stale_token {
            debug!("session already refreshed by a concurrent call");
            return Ok(current);
        }
    }

    let Some(refresh_token) = ctx.store.get(TokenKind::Refresh)? else {
        return expire_session(ctx.store);
    };

    let url = format!("{}/auth/refresh", ctx.addr.trim_end_matches('/'));
    let payload = RefreshRequest { refresh_token };
    let response = match ctx.client.post(url).json(&payload).send().await {
        Ok(response) => response,
        Err(err) => {
            warn!("token refresh request failed: {err}");
            return expire_session(ctx.store);
        }
    };
    if !response.status().is_success() {
        warn!(status = %response.status(), "token refresh rejected");
        return expire_session(ctx.store);
    }
    let auth: RefreshResponse = match response.json().await {
        Ok(auth) => auth,
        Err(err) => {
            warn!("token refresh returned a malformed body: {err}");
            return expire_session(ctx.store);
        }
    };

    ctx.store.set(TokenKind::Access, Some(&auth.access_token))?;
    if let Some(rotated) = auth.refresh_token.as_deref() {
        ctx.store.set(TokenKind::Refresh, Some(rotated))?;
    }
    debug!("session refreshed");
    Ok(auth.access_token)
}

/// Terminal state of the refresh flow: the session is torn down locally and
/// the caller observes `SessionExpired`.
fn expire_session(store: &TokenStore) -> anyhow::Result<String> {
    store.clear_all()?;
    Err(ApiError::SessionExpired.into())
}
