use reqwest::Method;
use uuid::Uuid;

use gymctl_core::api::users::{CreateUserRequest, UpdateUserRequest};
use gymctl_core::{Role, UserProfile};

use crate::modules::system::http::{decode_json, send_request};
use crate::modules::system::CommandContext;

pub(crate) async fn list_users(ctx: &CommandContext<'_>) -> anyhow::Result<reqwest::Response> {
    send_request(ctx, Method::GET, "/api/users/all-users", None).await
}

pub(crate) async fn fetch_profile(ctx: &CommandContext<'_>) -> anyhow::Result<UserProfile> {
    let response = send_request(ctx, Method::GET, "/api/users", None).await?;
    decode_json(response).await
}

pub(crate) async fn create_user(
    ctx: &CommandContext<'_>,
    payload: CreateUserRequest,
) -> anyhow::Result<reqwest::Response> {
    send_request(
        ctx,
        Method::POST,
        "/api/users",
        Some(serde_json::to_value(&payload)?),
    )
    .await
}

pub(crate) async fn update_user(
    ctx: &CommandContext<'_>,
    id: &Uuid,
    payload: UpdateUserRequest,
) -> anyhow::Result<reqwest::Response> {
    send_request(
        ctx,
        Method::PUT,
        &format!("/api/users/{id}"),
        Some(serde_json::to_value(&payload)?),
    )
    .await
}

pub(crate) async fn delete_user(
    ctx: &CommandContext<'_>,
    id: &Uuid,
) -> anyhow::Result<reqwest::Response> {
    send_request(ctx, Method::DELETE, &format!("/api/users/{id}"), None).await
}

pub(crate) async fn user_memberships(
    ctx: &CommandContext<'_>,
    id: &Uuid,
) -> anyhow::Result<reqwest::Response> {
    send_request(ctx, Method::GET, &format!("/api/users/{id}/memberships"), None).await
}

/// Gate for mutating operations. The role claim is request-scoped: it is
/// fetched again for every command, never cached across invocations, and a
/// profile without the claim means least privilege.
pub(crate) async fn ensure_manager(ctx: &CommandContext<'_>) -> anyhow::Result<UserProfile> {
    let profile = fetch_profile(ctx).await?;
    if profile.role != Role::Manager {
        anyhow::bail!("this operation requires the manager role");
    }
    Ok(profile)
}
