use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::User;

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateMembershipRequest {
    pub user_id: Uuid,
    pub gym_id: Uuid,
}

/// One row of `GET /api/memberships/gyms/{gymId}/users`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GymMemberEntry {
    pub user: User,
    pub join_date: DateTime<Utc>,
}
