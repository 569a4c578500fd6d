pub mod admin_service;
pub mod assistant_service;
pub mod auth_service;
pub mod cart_service;
pub mod product_service;
pub mod user_service;
