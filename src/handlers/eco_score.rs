use crate::models::*;
use crate::services::EcoScoreService;
use actix_web::{web, HttpResponse, Result};
use serde_json::json;

/// Returned when the scoring provider fails or its response cannot be
/// parsed; the failure is swallowed rather than surfaced to the caller.
pub const FALLBACK_ECO_SCORE: i32 = 50;

#[utoipa::path(
    post,
    path = "/api/calculate-eco-score",
    tag = "scoring",
    request_body = EcoScoreRequest,
    responses(
        (status = 200, description = "Estimated eco score", body = EcoScoreResponse),
        (status = 500, description = "Provider failure; fallback score of 50 in the body")
    )
)]
pub async fn calculate_eco_score(
    eco_score_service: web::Data<EcoScoreService>,
    request: web::Json<EcoScoreRequest>,
) -> Result<HttpResponse> {
    match eco_score_service.estimate(&request).await {
        Ok(score) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": { "eco_score": score }
        }))),
        Err(e) => {
            log::error!("Eco score estimation failed, using fallback: {e}");
            Ok(HttpResponse::InternalServerError().json(json!({
                "success": false,
                "data": { "eco_score": FALLBACK_ECO_SCORE },
                "message": "Could not determine an eco score; returning the default"
            })))
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/sustainability",
    tag = "scoring",
    responses(
        (status = 200, description = "Random sustainability score", body = SustainabilityResponse)
    )
)]
pub async fn sustainability(eco_score_service: web::Data<EcoScoreService>) -> Result<HttpResponse> {
    let score = eco_score_service.sustainability_score();
    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "data": { "sustainability_score": score }
    })))
}

#[utoipa::path(
    get,
    path = "/api/dynamic-pricing",
    tag = "scoring",
    responses(
        (status = 200, description = "Suggested listing price", body = DynamicPricingResponse)
    )
)]
pub async fn dynamic_pricing(eco_score_service: web::Data<EcoScoreService>) -> Result<HttpResponse> {
    let price = eco_score_service.dynamic_price();
    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "data": { "price": price }
    })))
}

pub fn eco_score_config(cfg: &mut web::ServiceConfig) {
    cfg.route("/calculate-eco-score", web::post().to(calculate_eco_score))
        .route("/sustainability", web::post().to(sustainability))
        .route("/dynamic-pricing", web::get().to(dynamic_pricing));
}
