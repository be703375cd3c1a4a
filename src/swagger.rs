use actix_web::web;
use utoipa::OpenApi;
use utoipa::{
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
    Modify,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::entities::environmental_actions::ActionKind;
use crate::entities::recycle_items::RecycleStatus;
use crate::entities::users::Role;
use crate::handlers;
use crate::models::*;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.as_mut().unwrap();
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        )
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::auth::register,
        handlers::auth::login,
        handlers::auth::register_admin,
        handlers::auth::login_admin,
        handlers::product::create_product,
        handlers::product::list_products,
        handlers::product::update_product,
        handlers::product::delete_product,
        handlers::recycle::submit_recycle_item,
        handlers::recycle::get_recycle_items,
        handlers::admin::get_pending_recycle_items,
        handlers::admin::review_recycle_item,
        handlers::user::get_eco_points,
        handlers::user::get_vouchers,
        handlers::eco_score::calculate_eco_score,
        handlers::eco_score::sustainability,
        handlers::eco_score::dynamic_pricing,
        handlers::environmental::record_action,
        handlers::environmental::list_actions,
    ),
    components(
        schemas(
            RegisterRequest,
            LoginRequest,
            AdminRegisterRequest,
            IdentityResponse,
            AuthResponse,
            UserResponse,
            EcoPointsResponse,
            Role,
            CreateProductRequest,
            UpdateProductRequest,
            ProductResponse,
            SubmitRecycleRequest,
            ReviewRecycleRequest,
            ReviewDecision,
            RecycleItemResponse,
            RecycleStatus,
            VoucherResponse,
            EcoScoreRequest,
            EcoScoreResponse,
            SustainabilityResponse,
            DynamicPricingResponse,
            CreateActionRequest,
            ActionResponse,
            ActionKind,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Registration and login"),
        (name = "products", description = "Product catalog"),
        (name = "recycle", description = "Recycling submissions"),
        (name = "admin", description = "Admin review queue"),
        (name = "user", description = "Account data"),
        (name = "scoring", description = "Eco scoring and pricing"),
        (name = "environmental", description = "Environmental action log"),
    )
)]
pub struct ApiDoc;

pub fn swagger_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    );
}
