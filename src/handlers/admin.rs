use crate::middlewares::current_user;
use crate::models::*;
use crate::services::RecycleService;
use actix_web::{web, HttpRequest, HttpResponse, ResponseError, Result};
use serde_json::json;

#[utoipa::path(
    get,
    path = "/api/admin/recycle_items",
    tag = "admin",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All pending submissions", body = [RecycleItemResponse]),
        (status = 403, description = "Caller is not an admin")
    )
)]
pub async fn get_pending_recycle_items(
    recycle_service: web::Data<RecycleService>,
    req: HttpRequest,
) -> Result<HttpResponse> {
    let user = match current_user(&req) {
        Ok(user) => user,
        Err(e) => return Ok(e.error_response()),
    };
    if let Err(e) = user.require_admin() {
        return Ok(e.error_response());
    }

    match recycle_service.list_pending().await {
        Ok(items) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": items
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    put,
    path = "/api/admin/recycle_item/{id}",
    tag = "admin",
    request_body = ReviewRecycleRequest,
    params(("id" = i64, Path, description = "Recycle item id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Verdict applied", body = RecycleItemResponse),
        (status = 400, description = "Status is not Approved or Rejected"),
        (status = 403, description = "Caller is not an admin"),
        (status = 404, description = "Item not found"),
        (status = 409, description = "Item was already reviewed")
    )
)]
pub async fn review_recycle_item(
    recycle_service: web::Data<RecycleService>,
    req: HttpRequest,
    path: web::Path<i64>,
    request: web::Json<ReviewRecycleRequest>,
) -> Result<HttpResponse> {
    let user = match current_user(&req) {
        Ok(user) => user,
        Err(e) => return Ok(e.error_response()),
    };
    if let Err(e) = user.require_admin() {
        return Ok(e.error_response());
    }

    match recycle_service
        .review(path.into_inner(), request.status)
        .await
    {
        Ok(item) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": item,
            "message": format!("Item {} successfully", item.status)
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn admin_config(cfg: &mut web::ServiceConfig) {
    cfg.route("/admin/recycle_items", web::get().to(get_pending_recycle_items))
        .route("/admin/recycle_item/{id}", web::put().to(review_recycle_item));
}
