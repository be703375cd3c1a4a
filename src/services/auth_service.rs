use crate::database::DbPool;
use crate::entities::{admin_entity as admins, user_entity as users, users::Role};
use crate::error::{AppError, AppResult};
use crate::models::*;
use crate::utils::{hash_password, verify_password, JwtService};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, NotSet, QueryFilter, Set};

#[derive(Clone)]
pub struct AuthService {
    pool: DbPool,
    jwt_service: JwtService,
}

impl AuthService {
    pub fn new(pool: DbPool, jwt_service: JwtService) -> Self {
        Self { pool, jwt_service }
    }

    /// Register a customer account. Usernames are unique across the
    /// `users` table; admins live in their own credential space.
    pub async fn register(&self, request: RegisterRequest) -> AppResult<UserResponse> {
        let existing = users::Entity::find()
            .filter(users::Column::Username.eq(request.username.as_str()))
            .one(&self.pool)
            .await?;

        if existing.is_some() {
            return Err(AppError::Conflict("User already exists".to_string()));
        }

        let password_hash = hash_password(&request.password)?;

        let user = users::ActiveModel {
            id: NotSet,
            username: Set(request.username),
            password_hash: Set(password_hash),
            role: Set(request.role.unwrap_or(Role::Customer)),
            eco_points: Set(0),
            created_at: Set(Utc::now()),
        }
        .insert(&self.pool)
        .await?;

        log::info!("Registered user {} (id {})", user.username, user.id);

        Ok(UserResponse::from(user))
    }

    pub async fn login(&self, request: LoginRequest) -> AppResult<AuthResponse> {
        let user = users::Entity::find()
            .filter(users::Column::Username.eq(request.username.as_str()))
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::AuthError("Invalid credentials".to_string()))?;

        if !verify_password(&request.password, &user.password_hash)? {
            return Err(AppError::AuthError("Invalid credentials".to_string()));
        }

        let access_token =
            self.jwt_service
                .generate_access_token(user.id, &user.username, user.role)?;

        Ok(AuthResponse {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in: self.jwt_service.get_access_token_expires_in(),
            user: IdentityResponse {
                id: user.id,
                username: user.username,
                role: user.role,
            },
        })
    }

    pub async fn register_admin(&self, request: AdminRegisterRequest) -> AppResult<IdentityResponse> {
        let existing = admins::Entity::find()
            .filter(admins::Column::Username.eq(request.username.as_str()))
            .one(&self.pool)
            .await?;

        if existing.is_some() {
            return Err(AppError::Conflict("Admin already exists".to_string()));
        }

        let password_hash = hash_password(&request.password)?;

        let admin = admins::ActiveModel {
            id: NotSet,
            username: Set(request.username),
            password_hash: Set(password_hash),
            created_at: Set(Utc::now()),
        }
        .insert(&self.pool)
        .await?;

        log::info!("Registered admin {} (id {})", admin.username, admin.id);

        Ok(IdentityResponse {
            id: admin.id,
            username: admin.username,
            role: Role::Admin,
        })
    }

    pub async fn login_admin(&self, request: LoginRequest) -> AppResult<AuthResponse> {
        let admin = admins::Entity::find()
            .filter(admins::Column::Username.eq(request.username.as_str()))
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::AuthError("Invalid admin credentials".to_string()))?;

        if !verify_password(&request.password, &admin.password_hash)? {
            return Err(AppError::AuthError("Invalid admin credentials".to_string()));
        }

        let access_token =
            self.jwt_service
                .generate_access_token(admin.id, &admin.username, Role::Admin)?;

        Ok(AuthResponse {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in: self.jwt_service.get_access_token_expires_in(),
            user: IdentityResponse {
                id: admin.id,
                username: admin.username,
                role: Role::Admin,
            },
        })
    }
}
