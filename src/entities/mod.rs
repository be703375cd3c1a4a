pub mod admins;
pub mod environmental_actions;
pub mod products;
pub mod recycle_items;
pub mod users;
pub mod vouchers;

pub use admins as admin_entity;
pub use environmental_actions as environmental_action_entity;
pub use products as product_entity;
pub use recycle_items as recycle_item_entity;
pub use users as user_entity;
pub use vouchers as voucher_entity;
