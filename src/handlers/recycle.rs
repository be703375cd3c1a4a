use crate::middlewares::current_user;
use crate::models::*;
use crate::services::RecycleService;
use actix_web::{web, HttpRequest, HttpResponse, ResponseError, Result};
use serde_json::json;

#[utoipa::path(
    post,
    path = "/api/recycle",
    tag = "recycle",
    request_body = SubmitRecycleRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Item submitted for review", body = RecycleItemResponse),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn submit_recycle_item(
    recycle_service: web::Data<RecycleService>,
    req: HttpRequest,
    request: web::Json<SubmitRecycleRequest>,
) -> Result<HttpResponse> {
    let user = match current_user(&req) {
        Ok(user) => user,
        Err(e) => return Ok(e.error_response()),
    };

    match recycle_service.submit(user.id, request.into_inner()).await {
        Ok(item) => Ok(HttpResponse::Created().json(json!({
            "success": true,
            "data": item,
            "message": "Recycle item submitted successfully"
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/api/recycle_items",
    tag = "recycle",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "The caller's submissions", body = [RecycleItemResponse])
    )
)]
pub async fn get_recycle_items(
    recycle_service: web::Data<RecycleService>,
    req: HttpRequest,
) -> Result<HttpResponse> {
    let user = match current_user(&req) {
        Ok(user) => user,
        Err(e) => return Ok(e.error_response()),
    };

    match recycle_service.list_own(user.id).await {
        Ok(items) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": items
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn recycle_config(cfg: &mut web::ServiceConfig) {
    cfg.route("/recycle", web::post().to(submit_recycle_item))
        .route("/recycle_items", web::get().to(get_recycle_items));
}
