use crate::entities::vouchers;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct VoucherResponse {
    pub code: String,
    pub discount_value: f64,
    pub valid_until: DateTime<Utc>,
    pub is_redeemed: bool,
}

impl From<vouchers::Model> for VoucherResponse {
    fn from(voucher: vouchers::Model) -> Self {
        Self {
            code: voucher.code,
            discount_value: voucher.discount_value,
            valid_until: voucher.valid_until,
            is_redeemed: voucher.is_redeemed,
        }
    }
}
