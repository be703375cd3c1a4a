use crate::entities::recycle_items::{self, RecycleStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SubmitRecycleRequest {
    #[schema(example = "Jacket")]
    pub product_name: String,
    #[schema(example = "Cotton")]
    pub material: String,
    #[schema(example = "Good")]
    pub condition: String,
    pub description: Option<String>,
}

/// Outcome of an admin review. Deliberately narrower than
/// [`RecycleStatus`]: `Pending` is not a valid review verdict, so any
/// other value is rejected before it reaches the service.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub enum ReviewDecision {
    Approved,
    Rejected,
}

impl From<ReviewDecision> for RecycleStatus {
    fn from(decision: ReviewDecision) -> Self {
        match decision {
            ReviewDecision::Approved => RecycleStatus::Approved,
            ReviewDecision::Rejected => RecycleStatus::Rejected,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReviewRecycleRequest {
    pub status: ReviewDecision,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RecycleItemResponse {
    pub id: i64,
    pub product_name: String,
    pub material: String,
    pub condition: String,
    pub description: Option<String>,
    pub status: RecycleStatus,
    pub date_submitted: DateTime<Utc>,
}

impl From<recycle_items::Model> for RecycleItemResponse {
    fn from(item: recycle_items::Model) -> Self {
        Self {
            id: item.id,
            product_name: item.product_name,
            material: item.material,
            condition: item.condition,
            description: item.description,
            status: item.status,
            date_submitted: item.date_submitted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn review_decision_rejects_pending() {
        assert!(serde_json::from_str::<ReviewDecision>("\"Approved\"").is_ok());
        assert!(serde_json::from_str::<ReviewDecision>("\"Rejected\"").is_ok());
        assert!(serde_json::from_str::<ReviewDecision>("\"Pending\"").is_err());
        assert!(serde_json::from_str::<ReviewDecision>("\"approved\"").is_err());
    }

    #[test]
    fn review_decision_maps_to_terminal_status() {
        assert_eq!(
            RecycleStatus::from(ReviewDecision::Approved),
            RecycleStatus::Approved
        );
        assert_eq!(
            RecycleStatus::from(ReviewDecision::Rejected),
            RecycleStatus::Rejected
        );
    }
}
