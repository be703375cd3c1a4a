use crate::middlewares::current_user;
use crate::models::*;
use crate::services::ProductService;
use actix_web::{web, HttpRequest, HttpResponse, ResponseError, Result};
use serde_json::json;

#[utoipa::path(
    post,
    path = "/api/products",
    tag = "products",
    request_body = CreateProductRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Product created", body = ProductResponse),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn create_product(
    product_service: web::Data<ProductService>,
    req: HttpRequest,
    request: web::Json<CreateProductRequest>,
) -> Result<HttpResponse> {
    let user = match current_user(&req) {
        Ok(user) => user,
        Err(e) => return Ok(e.error_response()),
    };

    match product_service
        .create_product(user.id, request.into_inner())
        .await
    {
        Ok(product) => Ok(HttpResponse::Created().json(json!({
            "success": true,
            "data": product
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/api/products",
    tag = "products",
    responses(
        (status = 200, description = "Full product catalog", body = [ProductResponse])
    )
)]
pub async fn list_products(product_service: web::Data<ProductService>) -> Result<HttpResponse> {
    match product_service.list_products().await {
        Ok(products) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": products
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    put,
    path = "/api/products/{id}",
    tag = "products",
    request_body = UpdateProductRequest,
    params(("id" = i64, Path, description = "Product id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Product updated", body = ProductResponse),
        (status = 404, description = "No such product owned by the caller")
    )
)]
pub async fn update_product(
    product_service: web::Data<ProductService>,
    req: HttpRequest,
    path: web::Path<i64>,
    request: web::Json<UpdateProductRequest>,
) -> Result<HttpResponse> {
    let user = match current_user(&req) {
        Ok(user) => user,
        Err(e) => return Ok(e.error_response()),
    };

    match product_service
        .update_product(user.id, path.into_inner(), request.into_inner())
        .await
    {
        Ok(product) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": product
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    tag = "products",
    params(("id" = i64, Path, description = "Product id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Product deleted"),
        (status = 404, description = "No such product owned by the caller")
    )
)]
pub async fn delete_product(
    product_service: web::Data<ProductService>,
    req: HttpRequest,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    let user = match current_user(&req) {
        Ok(user) => user,
        Err(e) => return Ok(e.error_response()),
    };

    match product_service
        .delete_product(user.id, path.into_inner())
        .await
    {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "message": "Product deleted successfully"
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn product_config(cfg: &mut web::ServiceConfig) {
    cfg.route("/products", web::post().to(create_product))
        .route("/products", web::get().to(list_products))
        .route("/products/{id}", web::put().to(update_product))
        .route("/products/{id}", web::delete().to(delete_product));
}
