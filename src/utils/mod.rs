pub mod code_generator;
pub mod jwt;
pub mod password;

pub use code_generator::generate_voucher_code;
pub use jwt::*;
pub use password::*;
