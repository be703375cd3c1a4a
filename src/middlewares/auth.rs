use crate::entities::users::Role;
use crate::error::{AppError, AppResult};
use crate::utils::JwtService;
use actix_web::http::Method;
use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    Error, HttpMessage, HttpRequest,
};
use futures_util::future::LocalBoxFuture;
use std::future::{ready, Ready};

/// Verified identity of the caller, stashed in request extensions by the
/// auth middleware.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: i64,
    pub username: String,
    pub role: Role,
}

impl CurrentUser {
    /// Authorization gate for admin-only operations.
    pub fn require_admin(&self) -> AppResult<()> {
        if self.role == Role::Admin {
            Ok(())
        } else {
            Err(AppError::Forbidden)
        }
    }
}

/// Extract the verified caller from a handler's request.
pub fn current_user(req: &HttpRequest) -> AppResult<CurrentUser> {
    req.extensions()
        .get::<CurrentUser>()
        .cloned()
        .ok_or_else(|| AppError::AuthError("Missing access token".to_string()))
}

// Routes reachable without a token.
struct PublicPaths {
    exact_paths: Vec<&'static str>,
    prefix_paths: Vec<&'static str>,
    // (method, path) pairs public only for that method
    method_paths: Vec<(Method, &'static str)>,
}

impl PublicPaths {
    fn new() -> Self {
        Self {
            exact_paths: vec![
                "/",
                "/api/register",
                "/api/login",
                "/api/admin/register",
                "/api/admin/login",
                "/api/calculate-eco-score",
                "/api/sustainability",
                "/api/dynamic-pricing",
                "/api/environmental-program",
                "/api/environmental-actions",
                "/swagger-ui",
                "/swagger-ui/",
                "/api-docs/openapi.json",
            ],
            prefix_paths: vec!["/swagger-ui/", "/api-docs/"],
            // The product catalog is browsable without an account; writes
            // stay behind auth.
            method_paths: vec![(Method::GET, "/api/products")],
        }
    }

    fn is_public(&self, method: &Method, path: &str) -> bool {
        if self.exact_paths.contains(&path) {
            return true;
        }

        if self
            .method_paths
            .iter()
            .any(|(m, p)| m == method && *p == path)
        {
            return true;
        }

        self.prefix_paths
            .iter()
            .any(|&prefix| path.starts_with(prefix))
    }
}

pub struct AuthMiddleware {
    jwt_service: JwtService,
}

impl AuthMiddleware {
    pub fn new(jwt_service: JwtService) -> Self {
        Self { jwt_service }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service,
            jwt_service: self.jwt_service.clone(),
            public_paths: PublicPaths::new(),
        }))
    }
}

pub struct AuthMiddlewareService<S> {
    service: S,
    jwt_service: JwtService,
    public_paths: PublicPaths,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        // CORS preflight never carries credentials.
        if req.method() == Method::OPTIONS {
            let fut = self.service.call(req);
            return Box::pin(fut);
        }

        if self.public_paths.is_public(req.method(), req.path()) {
            let fut = self.service.call(req);
            return Box::pin(fut);
        }

        let auth_header = req.headers().get("Authorization");

        let token = if let Some(auth_value) = auth_header {
            if let Ok(auth_str) = auth_value.to_str() {
                auth_str.strip_prefix("Bearer ")
            } else {
                None
            }
        } else {
            None
        };

        if let Some(token) = token {
            match self.jwt_service.verify_access_token(token) {
                Ok(claims) => {
                    let id = match claims.sub.parse::<i64>() {
                        Ok(id) => id,
                        Err(_) => {
                            let error =
                                AppError::AuthError("Invalid access token".to_string());
                            return Box::pin(async move { Err(error.into()) });
                        }
                    };
                    req.extensions_mut().insert(CurrentUser {
                        id,
                        username: claims.username,
                        role: claims.role,
                    });
                    let fut = self.service.call(req);
                    Box::pin(fut)
                }
                Err(_) => {
                    let error = AppError::AuthError("Invalid access token".to_string());
                    Box::pin(async move { Err(error.into()) })
                }
            }
        } else {
            let error = AppError::AuthError("Missing access token".to_string());
            Box::pin(async move { Err(error.into()) })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_routes_are_public() {
        let paths = PublicPaths::new();
        for path in [
            "/api/register",
            "/api/login",
            "/api/admin/register",
            "/api/admin/login",
        ] {
            assert!(paths.is_public(&Method::POST, path), "{path}");
        }
    }

    #[test]
    fn test_scoring_and_action_routes_are_public() {
        let paths = PublicPaths::new();
        assert!(paths.is_public(&Method::POST, "/api/calculate-eco-score"));
        assert!(paths.is_public(&Method::POST, "/api/sustainability"));
        assert!(paths.is_public(&Method::GET, "/api/dynamic-pricing"));
        assert!(paths.is_public(&Method::POST, "/api/environmental-program"));
        assert!(paths.is_public(&Method::GET, "/api/environmental-actions"));
    }

    #[test]
    fn test_product_catalog_read_is_public_but_writes_are_not() {
        let paths = PublicPaths::new();
        assert!(paths.is_public(&Method::GET, "/api/products"));
        assert!(!paths.is_public(&Method::POST, "/api/products"));
        assert!(!paths.is_public(&Method::PUT, "/api/products/1"));
        assert!(!paths.is_public(&Method::DELETE, "/api/products/1"));
    }

    #[test]
    fn test_protected_routes_require_token() {
        let paths = PublicPaths::new();
        assert!(!paths.is_public(&Method::POST, "/api/recycle"));
        assert!(!paths.is_public(&Method::GET, "/api/recycle_items"));
        assert!(!paths.is_public(&Method::GET, "/api/admin/recycle_items"));
        assert!(!paths.is_public(&Method::PUT, "/api/admin/recycle_item/1"));
        assert!(!paths.is_public(&Method::GET, "/api/vouchers"));
        assert!(!paths.is_public(&Method::GET, "/api/eco_points"));
    }

    #[test]
    fn test_require_admin() {
        let admin = CurrentUser {
            id: 1,
            username: "root".to_string(),
            role: Role::Admin,
        };
        let customer = CurrentUser {
            id: 2,
            username: "alice".to_string(),
            role: Role::Customer,
        };

        assert!(admin.require_admin().is_ok());
        assert!(matches!(
            customer.require_admin(),
            Err(AppError::Forbidden)
        ));
    }
}
