pub mod admin;
pub mod assistant;
pub mod auth;
pub mod cart;
pub mod products;
pub mod users;
