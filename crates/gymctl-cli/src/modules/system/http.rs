use reqwest::header::AUTHORIZATION;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use gymctl_core::api::ApiMessage;

use crate::modules::auth::http::refresh_session;
use crate::modules::system::error::ApiError;
use crate::modules::system::CommandContext;

/// Path prefixes reachable without credentials. These never receive an
/// `Authorization` header and never enter the refresh flow.
pub(crate) const PUBLIC_ENDPOINTS: &[&str] = &[
    "/users/signin",
    "/users/signup",
    "/users/verify",
    "/users/verify-email",
    "/users/forgot-password",
    "/users/reset-password",
];

pub(crate) fn is_public_endpoint(path: &str) -> bool {
    PUBLIC_ENDPOINTS.iter().any(|prefix| path.starts_with(prefix))
}

/// Performs one logical API call. Protected calls carry the stored bearer
/// token and recover from token expiry at most once: a 401 on the first
/// attempt triggers the refresh flow, the call is retried with the rotated
/// token, and whatever comes back the second time is final.
pub(crate) async fn send_request(
    ctx: &CommandContext<'_>,
    method: Method,
    path: &str,
    payload: Option<serde_json::Value>,
) -> anyhow::Result<reqwest::Response> {
    if is_public_endpoint(path) {
        return send_request_once(ctx, method, path, payload, None).await;
    }

    let mut access_token = ctx.access_token()?;
    // explicit attempt counter, not recursion: one refresh per logical call
    let mut refreshed = false;
    loop {
        let response = send_request_once(
            ctx,
            method.clone(),
            path,
            payload.clone(),
            access_token.as_deref(),
        )
        .await?;
        if response.status() != StatusCode::UNAUTHORIZED || refreshed {
            return Ok(response);
        }
        // A 401 without a bearer attached is an ordinary rejection, not
        // expiry; it surfaces verbatim. Same for an explicit --token, which
        // has nothing to refresh with.
        let Some(stale) = access_token.as_deref() else {
            return Ok(response);
        };
        if ctx.token_override.is_some() {
            return Ok(response);
        }
        info!(method = %method, path, "http request unauthorized; refreshing session");
        access_token = Some(refresh_session(ctx, stale).await?);
        refreshed = true;
    }
}

pub(crate) async fn send_request_once(
    ctx: &CommandContext<'_>,
    method: Method,
    path: &str,
    payload: Option<serde_json::Value>,
    bearer: Option<&str>,
) -> anyhow::Result<reqwest::Response> {
    let url = format!("{}{}", ctx.addr.trim_end_matches('/'), path);
    let mut builder = ctx.client.request(method.clone(), &url);
    if let Some(token) = bearer {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    if let Some(payload) = payload {
        builder = builder.json(&payload);
    }
    debug!(method = %method, url = %url, "http request");
    let start = std::time::Instant::now();
    let response = builder
        .send()
        .await
        .map_err(|err| ApiError::NetworkUnavailable(err.to_string()))?;
    debug!(
        method = %method,
        url = %url,
        status = %response.status(),
        elapsed_ms = start.elapsed().as_millis(),
        "http response"
    );
    Ok(response)
}

/// Decodes a 2xx body into the declared type. `204 No Content` and empty
/// bodies decode as JSON `null` instead of failing the parse; any non-2xx
/// becomes a `RequestFailed` carrying the server's message.
pub(crate) async fn decode_json<T: DeserializeOwned>(
    response: reqwest::Response,
) -> anyhow::Result<T> {
    let status = response.status();
    if !status.is_success() {
        return Err(response_error(response).await.into());
    }
    let bytes = response
        .bytes()
        .await
        .map_err(|err| ApiError::NetworkUnavailable(err.to_string()))?;
    let body: &[u8] = if status == StatusCode::NO_CONTENT || bytes.is_empty() {
        b"null"
    } else {
        bytes.as_ref()
    };
    serde_json::from_slice(body).map_err(|err| ApiError::Decode(err.to_string()).into())
}

/// Builds the terminal error for a non-2xx response: the `{ "message": ... }`
/// body when it parses, a generic fallback otherwise.
pub(crate) async fn response_error(response: reqwest::Response) -> ApiError {
    let status = response.status();
    let message = match response.bytes().await {
        Ok(bytes) => serde_json::from_slice::<ApiMessage>(&bytes)
            .map(|body| body.message)
            .unwrap_or_else(|_| format!("HTTP {status}")),
        Err(_) => format!("HTTP {status}"),
    };
    ApiError::RequestFailed {
        status: status.as_u16(),
        message,
    }
}

pub(crate) async fn print_json_response(response: reqwest::Response) -> anyhow::Result<()> {
    let body: serde_json::Value = decode_json(response).await?;
    println!("{}", serde_json::to_string_pretty(&body)?);
    Ok(())
}

pub(crate) async fn print_empty_response(
    response: reqwest::Response,
    message: &str,
) -> anyhow::Result<()> {
    if !response.status().is_success() {
        return Err(response_error(response).await.into());
    }
    println!("{message}");
    Ok(())
}
