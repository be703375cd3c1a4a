pub mod admin;
pub mod auth;
pub mod eco_score;
pub mod environmental;
pub mod product;
pub mod recycle;
pub mod user;

pub use admin::admin_config;
pub use auth::auth_config;
pub use eco_score::eco_score_config;
pub use environmental::environmental_config;
pub use product::product_config;
pub use recycle::recycle_config;
pub use user::user_config;

use actix_web::HttpResponse;

/// Root greeting; doubles as a liveness check.
pub async fn home() -> HttpResponse {
    HttpResponse::Ok().body("Welcome to Green Street Market!")
}
