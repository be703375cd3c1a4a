use crate::database::DbPool;
use crate::entities::product_entity as products;
use crate::error::{AppError, AppResult};
use crate::models::*;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel, ModelTrait, NotSet, QueryFilter,
    QueryOrder, Set,
};

#[derive(Clone)]
pub struct ProductService {
    pool: DbPool,
}

impl ProductService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn create_product(
        &self,
        user_id: i64,
        request: CreateProductRequest,
    ) -> AppResult<ProductResponse> {
        let product = products::ActiveModel {
            id: NotSet,
            name: Set(request.name),
            description: Set(request.description),
            price: Set(request.price),
            eco_score: Set(request.eco_score),
            user_id: Set(user_id),
            created_at: Set(Utc::now()),
        }
        .insert(&self.pool)
        .await?;

        Ok(ProductResponse::from(product))
    }

    /// The full catalog, oldest first. Listing is public; see the auth
    /// middleware's public-path table.
    pub async fn list_products(&self) -> AppResult<Vec<ProductResponse>> {
        let rows = products::Entity::find()
            .order_by_asc(products::Column::Id)
            .all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(ProductResponse::from).collect())
    }

    /// Partial update scoped to the owner. A row that exists but belongs
    /// to someone else reports NotFound, same as a missing id.
    pub async fn update_product(
        &self,
        user_id: i64,
        product_id: i64,
        request: UpdateProductRequest,
    ) -> AppResult<ProductResponse> {
        let mut model = self
            .find_owned(user_id, product_id)
            .await?
            .into_active_model();

        if let Some(name) = request.name {
            model.name = Set(name);
        }
        if let Some(description) = request.description {
            model.description = Set(description);
        }
        if let Some(price) = request.price {
            model.price = Set(price);
        }
        if let Some(eco_score) = request.eco_score {
            model.eco_score = Set(Some(eco_score));
        }

        let updated = model.update(&self.pool).await?;
        Ok(ProductResponse::from(updated))
    }

    pub async fn delete_product(&self, user_id: i64, product_id: i64) -> AppResult<()> {
        let product = self.find_owned(user_id, product_id).await?;
        product.delete(&self.pool).await?;
        Ok(())
    }

    async fn find_owned(&self, user_id: i64, product_id: i64) -> AppResult<products::Model> {
        products::Entity::find_by_id(product_id)
            .filter(products::Column::UserId.eq(user_id))
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Product not found".to_string()))
    }
}
