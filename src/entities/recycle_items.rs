use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Review lifecycle of a submitted item. `Pending` is the only initial
/// state; `Approved` and `Rejected` are both terminal.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema, DeriveActiveEnum, EnumIter,
)]
#[sea_orm(rs_type = "String", db_type = "String(Some(32))")]
pub enum RecycleStatus {
    #[sea_orm(string_value = "Pending")]
    Pending,
    #[sea_orm(string_value = "Approved")]
    Approved,
    #[sea_orm(string_value = "Rejected")]
    Rejected,
}

impl std::fmt::Display for RecycleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecycleStatus::Pending => write!(f, "Pending"),
            RecycleStatus::Approved => write!(f, "Approved"),
            RecycleStatus::Rejected => write!(f, "Rejected"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "recycle_items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub product_name: String,
    pub material: String,
    pub condition: String,
    pub description: Option<String>,
    pub status: RecycleStatus,
    pub user_id: i64,
    pub date_submitted: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::ActiveEnum;

    #[test]
    fn test_status_serde_round_trip() {
        assert_eq!(
            serde_json::to_string(&RecycleStatus::Pending).unwrap(),
            "\"Pending\""
        );
        assert_eq!(
            serde_json::from_str::<RecycleStatus>("\"Rejected\"").unwrap(),
            RecycleStatus::Rejected
        );
        assert!(serde_json::from_str::<RecycleStatus>("\"Recycled\"").is_err());
    }

    #[test]
    fn test_status_db_string_round_trip() {
        assert_eq!(RecycleStatus::Approved.to_value(), "Approved");
        assert_eq!(
            RecycleStatus::try_from_value(&"Pending".to_string()).unwrap(),
            RecycleStatus::Pending
        );
        // Status strings are capitalized in the DB; lowercase is not valid.
        assert!(RecycleStatus::try_from_value(&"pending".to_string()).is_err());
    }
}
