use reqwest::Method;
use uuid::Uuid;

use gymctl_core::api::memberships::CreateMembershipRequest;

use crate::modules::system::http::send_request;
use crate::modules::system::CommandContext;

pub(crate) async fn add_membership(
    ctx: &CommandContext<'_>,
    payload: CreateMembershipRequest,
) -> anyhow::Result<reqwest::Response> {
    send_request(
        ctx,
        Method::POST,
        "/api/memberships",
        Some(serde_json::to_value(&payload)?),
    )
    .await
}

pub(crate) async fn remove_membership(
    ctx: &CommandContext<'_>,
    user_id: &Uuid,
    gym_id: &Uuid,
) -> anyhow::Result<reqwest::Response> {
    send_request(
        ctx,
        Method::DELETE,
        &format!("/api/memberships/users/{user_id}/gyms/{gym_id}"),
        None,
    )
    .await
}

pub(crate) async fn gym_members(
    ctx: &CommandContext<'_>,
    gym_id: &Uuid,
) -> anyhow::Result<reqwest::Response> {
    send_request(
        ctx,
        Method::GET,
        &format!("/api/memberships/gyms/{gym_id}/users"),
        None,
    )
    .await
}

pub(crate) async fn user_gyms(
    ctx: &CommandContext<'_>,
    user_id: &Uuid,
) -> anyhow::Result<reqwest::Response> {
    send_request(
        ctx,
        Method::GET,
        &format!("/api/memberships/users/{user_id}/gyms"),
        None,
    )
    .await
}

pub(crate) async fn my_gyms(ctx: &CommandContext<'_>) -> anyhow::Result<reqwest::Response> {
    send_request(ctx, Method::GET, "/api/memberships/my-gyms", None).await
}
