use crate::database::DbPool;
use crate::entities::user_entity as users;
use crate::error::{AppError, AppResult};
use crate::models::EcoPointsResponse;
use sea_orm::EntityTrait;

#[derive(Clone)]
pub struct UserService {
    pool: DbPool,
}

impl UserService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Eco points are read-only over HTTP; nothing in the program
    /// currently awards them.
    pub async fn get_eco_points(&self, user_id: i64) -> AppResult<EcoPointsResponse> {
        let user = users::Entity::find_by_id(user_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        Ok(EcoPointsResponse {
            points: user.eco_points,
        })
    }
}
