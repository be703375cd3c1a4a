pub mod eco_score;
pub mod environmental;
pub mod product;
pub mod recycle;
pub mod user;
pub mod voucher;

pub use eco_score::*;
pub use environmental::*;
pub use product::*;
pub use recycle::*;
pub use user::*;
pub use voucher::*;
