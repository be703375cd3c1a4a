use crate::database::DbPool;
use crate::entities::voucher_entity as vouchers;
use crate::error::AppResult;
use crate::models::VoucherResponse;
use crate::utils::generate_voucher_code;
use chrono::{Duration, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Set,
};

/// Discount applied to vouchers earned through recycling approval.
pub const RECYCLE_REWARD_DISCOUNT: f64 = 15.0;

/// Vouchers stay valid for 30 days from issuance.
pub const VOUCHER_VALIDITY_DAYS: i64 = 30;

#[derive(Clone)]
pub struct VoucherService {
    pool: DbPool,
}

impl VoucherService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Issue a voucher for `user_id`. Generic over the connection so the
    /// recycle approval flow can run it inside its transaction.
    pub async fn issue<C: ConnectionTrait>(
        conn: &C,
        user_id: i64,
        discount_value: f64,
    ) -> AppResult<vouchers::Model> {
        let now = Utc::now();
        let voucher = vouchers::ActiveModel {
            id: NotSet,
            code: Set(generate_voucher_code()),
            discount_value: Set(discount_value),
            user_id: Set(user_id),
            valid_until: Set(now + Duration::days(VOUCHER_VALIDITY_DAYS)),
            is_redeemed: Set(false),
            created_at: Set(now),
        }
        .insert(conn)
        .await?;

        log::info!(
            "Issued voucher {} ({}% off) to user {}",
            voucher.code,
            voucher.discount_value,
            user_id
        );

        Ok(voucher)
    }

    /// The caller's unredeemed vouchers, newest first.
    pub async fn list_unredeemed(&self, user_id: i64) -> AppResult<Vec<VoucherResponse>> {
        let rows = vouchers::Entity::find()
            .filter(vouchers::Column::UserId.eq(user_id))
            .filter(vouchers::Column::IsRedeemed.eq(false))
            .order_by_desc(vouchers::Column::CreatedAt)
            .all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(VoucherResponse::from).collect())
    }
}
