use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::{FitnessGoal, GymKind, Role};

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub date_of_birth: NaiveDate,
    pub fitness_goal: FitnessGoal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Profile view of the calling user. The role claim is asserted by the
/// server, not encoded in any token; a response without it means least
/// privilege.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub date_of_birth: NaiveDate,
    pub fitness_goal: FitnessGoal,
    #[serde(default)]
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Gym {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: GymKind,
    pub location: Option<String>,
    /// `None` means the gym does not cap attendance.
    pub capacity: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Membership {
    pub id: Uuid,
    pub user_id: Uuid,
    pub gym_id: Uuid,
    pub join_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GymAvailability {
    pub gym: Gym,
    /// `None` when the gym is uncapped.
    pub available_spots: Option<i64>,
    pub current_count: i64,
}
