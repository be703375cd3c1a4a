use crate::middlewares::current_user;
use crate::models::*;
use crate::services::{UserService, VoucherService};
use actix_web::{web, HttpRequest, HttpResponse, ResponseError, Result};
use serde_json::json;

#[utoipa::path(
    get,
    path = "/api/eco_points",
    tag = "user",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "The caller's eco points", body = EcoPointsResponse),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_eco_points(
    user_service: web::Data<UserService>,
    req: HttpRequest,
) -> Result<HttpResponse> {
    let user = match current_user(&req) {
        Ok(user) => user,
        Err(e) => return Ok(e.error_response()),
    };

    match user_service.get_eco_points(user.id).await {
        Ok(points) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": points
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/api/vouchers",
    tag = "user",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "The caller's unredeemed vouchers", body = [VoucherResponse])
    )
)]
pub async fn get_vouchers(
    voucher_service: web::Data<VoucherService>,
    req: HttpRequest,
) -> Result<HttpResponse> {
    let user = match current_user(&req) {
        Ok(user) => user,
        Err(e) => return Ok(e.error_response()),
    };

    match voucher_service.list_unredeemed(user.id).await {
        Ok(vouchers) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": vouchers
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn user_config(cfg: &mut web::ServiceConfig) {
    cfg.route("/eco_points", web::get().to(get_eco_points))
        .route("/vouchers", web::get().to(get_vouchers));
}
