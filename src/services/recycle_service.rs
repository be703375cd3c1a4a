use crate::database::DbPool;
use crate::entities::{recycle_item_entity as recycle_items, recycle_items::RecycleStatus};
use crate::error::{AppError, AppResult};
use crate::models::*;
use crate::services::voucher_service::{VoucherService, RECYCLE_REWARD_DISCOUNT};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel, NotSet, QueryFilter, QueryOrder,
    Set, TransactionTrait,
};

#[derive(Clone)]
pub struct RecycleService {
    pool: DbPool,
}

impl RecycleService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Submissions always enter the queue as Pending; the caller cannot
    /// choose an initial status.
    pub async fn submit(
        &self,
        user_id: i64,
        request: SubmitRecycleRequest,
    ) -> AppResult<RecycleItemResponse> {
        let item = recycle_items::ActiveModel {
            id: NotSet,
            product_name: Set(request.product_name),
            material: Set(request.material),
            condition: Set(request.condition),
            description: Set(request.description),
            status: Set(RecycleStatus::Pending),
            user_id: Set(user_id),
            date_submitted: Set(Utc::now()),
        }
        .insert(&self.pool)
        .await?;

        Ok(RecycleItemResponse::from(item))
    }

    /// The caller's own submissions, any status.
    pub async fn list_own(&self, user_id: i64) -> AppResult<Vec<RecycleItemResponse>> {
        let rows = recycle_items::Entity::find()
            .filter(recycle_items::Column::UserId.eq(user_id))
            .order_by_asc(recycle_items::Column::Id)
            .all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(RecycleItemResponse::from).collect())
    }

    /// Every Pending item across all users, for the admin review queue.
    pub async fn list_pending(&self) -> AppResult<Vec<RecycleItemResponse>> {
        let rows = recycle_items::Entity::find()
            .filter(recycle_items::Column::Status.eq(RecycleStatus::Pending))
            .order_by_asc(recycle_items::Column::DateSubmitted)
            .all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(RecycleItemResponse::from).collect())
    }

    /// Apply an admin verdict. The status change and the reward voucher
    /// are committed atomically; a voucher insert failure rolls back the
    /// approval. Items that already left Pending are not re-reviewable,
    /// so approval issues exactly one voucher per item.
    pub async fn review(
        &self,
        item_id: i64,
        decision: ReviewDecision,
    ) -> AppResult<RecycleItemResponse> {
        let tx = self.pool.begin().await?;

        let item = recycle_items::Entity::find_by_id(item_id)
            .one(&tx)
            .await?
            .ok_or_else(|| AppError::NotFound("Item not found".to_string()))?;

        if item.status != RecycleStatus::Pending {
            return Err(AppError::Conflict(format!(
                "Item has already been {}",
                item.status
            )));
        }

        let owner_id = item.user_id;
        let status = RecycleStatus::from(decision);

        let mut model = item.into_active_model();
        model.status = Set(status);
        let updated = model.update(&tx).await?;

        if status == RecycleStatus::Approved {
            VoucherService::issue(&tx, owner_id, RECYCLE_REWARD_DISCOUNT).await?;
        }

        tx.commit().await?;

        log::info!("Recycle item {} marked {}", updated.id, updated.status);

        Ok(RecycleItemResponse::from(updated))
    }
}
