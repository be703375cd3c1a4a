use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema, DeriveActiveEnum, EnumIter,
)]
#[sea_orm(rs_type = "String", db_type = "String(Some(32))")]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    #[sea_orm(string_value = "resell")]
    Resell,
    #[sea_orm(string_value = "donate")]
    Donate,
    #[sea_orm(string_value = "recycle")]
    Recycle,
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActionKind::Resell => write!(f, "resell"),
            ActionKind::Donate => write!(f, "donate"),
            ActionKind::Recycle => write!(f, "recycle"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "environmental_actions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub action: ActionKind,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::ActiveEnum;

    #[test]
    fn test_action_kind_serde_round_trip() {
        assert_eq!(serde_json::to_string(&ActionKind::Donate).unwrap(), "\"donate\"");
        assert_eq!(
            serde_json::from_str::<ActionKind>("\"recycle\"").unwrap(),
            ActionKind::Recycle
        );
        assert!(serde_json::from_str::<ActionKind>("\"landfill\"").is_err());
    }

    #[test]
    fn test_action_kind_db_string_round_trip() {
        assert_eq!(ActionKind::Resell.to_value(), "resell");
        assert_eq!(
            ActionKind::try_from_value(&"donate".to_string()).unwrap(),
            ActionKind::Donate
        );
        assert!(ActionKind::try_from_value(&"landfill".to_string()).is_err());
    }
}
