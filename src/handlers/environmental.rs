use crate::models::*;
use crate::services::EnvironmentalService;
use actix_web::{web, HttpResponse, ResponseError, Result};
use serde_json::json;

#[utoipa::path(
    post,
    path = "/api/environmental-actions",
    tag = "environmental",
    request_body = CreateActionRequest,
    responses(
        (status = 201, description = "Action logged", body = ActionResponse),
        (status = 400, description = "Unknown action kind")
    )
)]
pub async fn record_action(
    environmental_service: web::Data<EnvironmentalService>,
    request: web::Json<CreateActionRequest>,
) -> Result<HttpResponse> {
    match environmental_service.record(request.into_inner()).await {
        Ok(entry) => Ok(HttpResponse::Created().json(json!({
            "success": true,
            "data": entry
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/api/environmental-actions",
    tag = "environmental",
    responses(
        (status = 200, description = "All logged actions, oldest first", body = [ActionResponse])
    )
)]
pub async fn list_actions(
    environmental_service: web::Data<EnvironmentalService>,
) -> Result<HttpResponse> {
    match environmental_service.list().await {
        Ok(entries) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": entries
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn environmental_config(cfg: &mut web::ServiceConfig) {
    // Two spellings of the same log; older frontend revisions use
    // /environmental-program.
    cfg.route("/environmental-program", web::post().to(record_action))
        .route("/environmental-program", web::get().to(list_actions))
        .route("/environmental-actions", web::post().to(record_action))
        .route("/environmental-actions", web::get().to(list_actions));
}
