use crate::database::DbPool;
use crate::entities::environmental_action_entity as environmental_actions;
use crate::error::AppResult;
use crate::models::*;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, EntityTrait, NotSet, QueryOrder, Set};

/// Append-only log of environmental program actions. Entries are never
/// updated or deleted.
#[derive(Clone)]
pub struct EnvironmentalService {
    pool: DbPool,
}

impl EnvironmentalService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn record(&self, request: CreateActionRequest) -> AppResult<ActionResponse> {
        let entry = environmental_actions::ActiveModel {
            id: NotSet,
            action: Set(request.action),
            description: Set(request.description),
            created_at: Set(Utc::now()),
        }
        .insert(&self.pool)
        .await?;

        Ok(ActionResponse::from(entry))
    }

    pub async fn list(&self) -> AppResult<Vec<ActionResponse>> {
        let rows = environmental_actions::Entity::find()
            .order_by_asc(environmental_actions::Column::Id)
            .all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(ActionResponse::from).collect())
    }
}
