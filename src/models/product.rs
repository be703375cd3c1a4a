use crate::entities::products;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateProductRequest {
    #[schema(example = "Recycled Denim Jacket")]
    pub name: String,
    pub description: String,
    #[schema(example = 49.99)]
    pub price: f64,
    /// Optional; products may be listed before a score is computed.
    pub eco_score: Option<i32>,
}

/// Partial update: only fields present in the body overwrite stored values.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub eco_score: Option<i32>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub eco_score: Option<i32>,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
}

impl From<products::Model> for ProductResponse {
    fn from(product: products::Model) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
            eco_score: product.eco_score,
            user_id: product.user_id,
            created_at: product.created_at,
        }
    }
}
