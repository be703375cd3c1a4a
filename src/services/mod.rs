pub mod auth_service;
pub mod eco_score_service;
pub mod environmental_service;
pub mod product_service;
pub mod recycle_service;
pub mod user_service;
pub mod voucher_service;

pub use auth_service::*;
pub use eco_score_service::*;
pub use environmental_service::*;
pub use product_service::*;
pub use recycle_service::*;
pub use user_service::*;
pub use voucher_service::*;
