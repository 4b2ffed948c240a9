pub mod articles;
pub mod auth;
pub mod common;
pub mod err;
pub mod products;
pub mod profile;
