pub mod auth;
pub mod gyms;
pub mod memberships;
pub mod users;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Error envelope returned by the API for every non-2xx response.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ApiMessage {
    pub message: String,
}
