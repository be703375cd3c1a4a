use crate::entities::environmental_actions::{self, ActionKind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateActionRequest {
    pub action: ActionKind,
    pub description: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ActionResponse {
    pub id: i64,
    pub action: ActionKind,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl From<environmental_actions::Model> for ActionResponse {
    fn from(entry: environmental_actions::Model) -> Self {
        Self {
            id: entry.id,
            action: entry.action,
            description: entry.description,
            created_at: entry.created_at,
        }
    }
}
