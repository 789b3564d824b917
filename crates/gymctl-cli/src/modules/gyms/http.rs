use reqwest::Method;
use uuid::Uuid;

use gymctl_core::api::gyms::{CreateGymRequest, UpdateGymRequest};

use crate::modules::system::http::send_request;
use crate::modules::system::CommandContext;

pub(crate) async fn list_gyms(ctx: &CommandContext<'_>) -> anyhow::Result<reqwest::Response> {
    send_request(ctx, Method::GET, "/api/gyms", None).await
}

pub(crate) async fn get_gym(
    ctx: &CommandContext<'_>,
    id: &Uuid,
) -> anyhow::Result<reqwest::Response> {
    send_request(ctx, Method::GET, &format!("/api/gyms/{id}"), None).await
}

pub(crate) async fn create_gym(
    ctx: &CommandContext<'_>,
    payload: CreateGymRequest,
) -> anyhow::Result<reqwest::Response> {
    send_request(
        ctx,
        Method::POST,
        "/api/gyms",
        Some(serde_json::to_value(&payload)?),
    )
    .await
}

pub(crate) async fn update_gym(
    ctx: &CommandContext<'_>,
    id: &Uuid,
    payload: UpdateGymRequest,
) -> anyhow::Result<reqwest::Response> {
    send_request(
        ctx,
        Method::PUT,
        &format!("/api/gyms/{id}"),
        Some(serde_json::to_value(&payload)?),
    )
    .await
}

pub(crate) async fn delete_gym(
    ctx: &CommandContext<'_>,
    id: &Uuid,
) -> anyhow::Result<reqwest::Response> {
    send_request(ctx, Method::DELETE, &format!("/api/gyms/{id}"), None).await
}

pub(crate) async fn list_available(ctx: &CommandContext<'_>) -> anyhow::Result<reqwest::Response> {
    send_request(ctx, Method::GET, "/api/gyms/available-spots", None).await
}
